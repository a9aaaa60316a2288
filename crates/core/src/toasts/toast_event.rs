//! Toast event types.

use serde::{Deserialize, Serialize};

/// Events emitted by a toast lifecycle towards the owner of the toast list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    /// The toast finished hiding and must be removed from the list.
    Destroyed { title: String },
}

impl ToastEvent {
    /// Creates a Destroyed event.
    pub fn destroyed(title: impl Into<String>) -> Self {
        Self::Destroyed {
            title: title.into(),
        }
    }

    /// Title of the toast the event refers to.
    pub fn title(&self) -> &str {
        match self {
            Self::Destroyed { title } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destroyed_serialization() {
        let event = ToastEvent::destroyed("T1");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"destroyed","title":"T1"}"#);

        let back: ToastEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title(), "T1");
    }
}
