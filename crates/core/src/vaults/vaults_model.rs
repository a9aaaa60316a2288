//! Vault domain models.

use bigdecimal::BigDecimal;
use log::debug;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::amounts::{parse_raw_amount, rescale, ScaledAmount};
use crate::constants::MAX_DECIMALS;

/// A base-unit amount as delivered by the data loader.
///
/// The original text is kept so a malformed value degrades to an unknown
/// amount instead of failing the whole vault list. Amounts that reached us
/// through a binary float are flagged lossy and never parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAmount {
    text: String,
    lossy: bool,
}

impl RawAmount {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lossy: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the loader handed over a float instead of an integer.
    pub fn is_lossy(&self) -> bool {
        self.lossy
    }

    /// Parsed integer value, `None` when malformed or lossy.
    pub fn value(&self) -> Option<BigInt> {
        if self.lossy {
            debug!("Base-unit amount '{}' arrived as a float", self.text);
            return None;
        }
        parse_raw_amount(&self.text)
    }
}

impl From<BigInt> for RawAmount {
    fn from(value: BigInt) -> Self {
        RawAmount::new(value.to_string())
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount::new(value.to_string())
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::new(value)
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmountRepr {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = match RawAmountRepr::deserialize(deserializer)? {
            RawAmountRepr::Text(text) => RawAmount::new(text),
            RawAmountRepr::Unsigned(value) => RawAmount::from(value),
            RawAmountRepr::Signed(value) => RawAmount::new(value.to_string()),
            // Integers past u64 land here already rounded.
            RawAmountRepr::Float(value) => RawAmount {
                text: value.to_string(),
                lossy: true,
            },
        };
        Ok(amount)
    }
}

/// Reads an optional field, turning a value of the wrong shape into `None`
/// so one bad field does not reject the whole snapshot.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            debug!("Ignoring malformed vault field {}: {}", value, e);
            Ok(None)
        }
    }
}

/// Which raw amount of a vault to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmountField {
    /// Wallet balance of the underlying token
    Balance,
    /// Amount deposited into the vault
    Deposited,
    /// Total value locked in the vault
    Tvl,
}

/// A vault as supplied by the data-loading collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultRecord {
    /// Asset key, e.g. `dai`
    pub token: String,
    /// Display symbol, e.g. `DAI`
    #[serde(default)]
    pub symbol: String,
    /// Short description of the strategies the vault uses
    #[serde(default)]
    pub uses: String,
    /// Accent style name
    #[serde(default)]
    pub color: String,
    /// Power-of-ten scale of the raw amounts
    #[serde(default, deserialize_with = "lenient")]
    pub decimals: Option<i64>,
    #[serde(default)]
    pub balance: Option<RawAmount>,
    #[serde(default, deserialize_with = "lenient")]
    pub balance_usd: Option<BigDecimal>,
    #[serde(default)]
    pub deposited: Option<RawAmount>,
    #[serde(default, deserialize_with = "lenient")]
    pub deposited_usd: Option<BigDecimal>,
    #[serde(default)]
    pub tvl: Option<RawAmount>,
    #[serde(default, deserialize_with = "lenient")]
    pub tvl_usd: Option<BigDecimal>,
    /// Annual percentage yield, already expressed in percent
    #[serde(default, deserialize_with = "lenient")]
    pub apy: Option<Decimal>,
}

impl VaultRecord {
    pub fn new(token: impl Into<String>, decimals: i64) -> Self {
        let token = token.into();
        Self {
            symbol: token.to_uppercase(),
            token,
            decimals: Some(decimals),
            ..Default::default()
        }
    }

    pub fn with_balance(mut self, balance: impl Into<RawAmount>) -> Self {
        self.balance = Some(balance.into());
        self
    }

    pub fn with_deposited(mut self, deposited: impl Into<RawAmount>) -> Self {
        self.deposited = Some(deposited.into());
        self
    }

    pub fn with_tvl(mut self, tvl: impl Into<RawAmount>) -> Self {
        self.tvl = Some(tvl.into());
        self
    }

    /// Symbol for display, falling back to the upper-cased token key.
    pub fn display_symbol(&self) -> String {
        if self.symbol.trim().is_empty() {
            self.token.to_uppercase()
        } else {
            self.symbol.clone()
        }
    }

    pub fn raw_amount(&self, field: AmountField) -> Option<&RawAmount> {
        match field {
            AmountField::Balance => self.balance.as_ref(),
            AmountField::Deposited => self.deposited.as_ref(),
            AmountField::Tvl => self.tvl.as_ref(),
        }
    }

    pub fn usd_amount(&self, field: AmountField) -> Option<&BigDecimal> {
        match field {
            AmountField::Balance => self.balance_usd.as_ref(),
            AmountField::Deposited => self.deposited_usd.as_ref(),
            AmountField::Tvl => self.tvl_usd.as_ref(),
        }
    }

    /// Rescaled value of one raw amount.
    ///
    /// Absent or malformed amounts, and amounts without a decimal count,
    /// are unknown.
    pub fn scaled_amount(&self, field: AmountField) -> ScaledAmount {
        let (Some(raw), Some(decimals)) = (self.raw_amount(field), self.decimals) else {
            return ScaledAmount::Unknown;
        };
        rescale(raw.value().as_ref(), decimals)
    }

    /// The scaled wallet balance of this vault.
    pub fn scaled_balance(&self) -> ScaledAmount {
        self.scaled_amount(AmountField::Balance)
    }

    /// Already-converted USD value of one field.
    ///
    /// Values whose exponent lies outside `MAX_DECIMALS` are unknown, since
    /// rounding them for display would expand the exponent in full.
    pub fn usd_value(&self, field: AmountField) -> ScaledAmount {
        match self.usd_amount(field) {
            Some(value) => {
                let (_, scale) = value.as_bigint_and_exponent();
                if scale.abs() > MAX_DECIMALS {
                    debug!("USD value of {} with exponent {} treated as unknown", self.token, scale);
                    ScaledAmount::Unknown
                } else {
                    ScaledAmount::Known(value.clone())
                }
            }
            None => ScaledAmount::Unknown,
        }
    }
}
