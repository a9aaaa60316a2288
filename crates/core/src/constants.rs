/// Placeholder rendered for amounts that are not known yet
pub const UNKNOWN_AMOUNT_PLACEHOLDER: &str = "-";

/// Currency prefix used for USD-denominated cells
pub const USD_PREFIX: &str = "$";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: i64 = 2;

/// Decimal precision for display of small values (strictly between 0 and 10)
pub const SMALL_VALUE_DECIMAL_PRECISION: i64 = 3;

/// Upper bound (exclusive) of the small value range
pub const SMALL_VALUE_UPPER_BOUND: u32 = 10;

/// Days used to derive a daily rate from an annual yield
pub const DAYS_PER_YEAR: u32 = 365;

/// Chain id assumed when the wallet provider does not report one (Polygon)
pub const DEFAULT_CHAIN_ID: u64 = 137;

/// Largest decimal count accepted when rescaling base-unit amounts
pub const MAX_DECIMALS: i64 = 255;
