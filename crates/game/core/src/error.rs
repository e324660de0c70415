//! Common error infrastructure for game-core.
//!
//! Rules return [`GameError`] for every refusal. None of these errors imply
//! that state was touched: a rule that fails leaves its inputs unchanged.

use core::fmt;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the player can retry later or with different inputs
/// - **Validation**: malformed input that should have been rejected upstream
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Quantities a rule can run short of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Fuel,
    Credits,
}

/// Kinds of records a lookup can miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Player,
    ShopItem,
    Mission,
    Alliance,
}

/// Errors surfaced by game rules.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameError {
    /// Not enough of a resource to perform the operation.
    #[error("not enough {resource}: need {needed}, have {available}")]
    InsufficientResource {
        resource: Resource,
        needed: u32,
        available: u32,
    },

    /// Referenced record does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: RecordKind, id: u64 },

    /// Input that should have been rejected before reaching the rules.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GameError {
    pub fn not_found(kind: RecordKind, id: impl Into<u64>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientResource { .. } => ErrorSeverity::Recoverable,
            Self::NotFound { .. } => ErrorSeverity::Recoverable,
            Self::InvalidInput(_) => ErrorSeverity::Validation,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_read_naturally() {
        let err = GameError::InsufficientResource {
            resource: Resource::Fuel,
            needed: 15,
            available: 10,
        };
        assert_eq!(err.to_string(), "not enough fuel: need 15, have 10");

        let err = GameError::not_found(RecordKind::ShopItem, 99u32);
        assert_eq!(err.to_string(), "shop_item 99 not found");
    }

    #[test]
    fn refusals_are_recoverable() {
        assert!(GameError::not_found(RecordKind::Mission, 1u64)
            .severity()
            .is_recoverable());
        assert!(!GameError::InvalidInput("x".into())
            .severity()
            .is_recoverable());
    }
}
