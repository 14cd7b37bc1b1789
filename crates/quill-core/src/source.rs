use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical provider identifiers used in outcomes and envelopes.
///
/// `Fallback` names the embedded catalog; it is never a remote adapter and
/// cannot be selected with `--source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Quotable,
    Typefit,
    Fallback,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quotable => "quotable",
            Self::Typefit => "typefit",
            Self::Fallback => "fallback",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quotable" => Ok(Self::Quotable),
            "typefit" | "type.fit" => Ok(Self::Typefit),
            other => Err(ValidationError::InvalidSource {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_remote_providers_case_insensitively() {
        assert_eq!("Quotable".parse::<ProviderId>(), Ok(ProviderId::Quotable));
        assert_eq!(" type.fit ".parse::<ProviderId>(), Ok(ProviderId::Typefit));
    }

    #[test]
    fn fallback_is_not_selectable() {
        let err = "fallback".parse::<ProviderId>().expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSource { .. }));
    }
}
