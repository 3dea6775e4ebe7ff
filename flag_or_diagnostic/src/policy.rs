//! Construction policy for calls that supply both payloads.
//!
//! The policy derives `serde` traits so an application can keep it in its own
//! configuration alongside other settings:
//!
//! ```
//! use flag_or_diagnostic::AmbiguityPolicy;
//!
//! #[derive(serde::Deserialize)]
//! struct Settings {
//!     #[serde(default)]
//!     ambiguity: AmbiguityPolicy,
//! }
//!
//! let settings: Settings = serde_json::from_str(r#"{"ambiguity": "prefer_flag"}"#)?;
//! assert_eq!(settings.ambiguity, AmbiguityPolicy::PreferFlag);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What [`ResultUnion::with_policy`](crate::ResultUnion::with_policy) does
/// when handed a diagnostic and a flag at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum AmbiguityPolicy {
    /// Fail with [`ConstructionError::Ambiguous`](crate::ConstructionError::Ambiguous).
    #[default]
    Reject,
    /// Keep the diagnostic and drop the flag.
    PreferDiagnostic,
    /// Keep the flag and drop the diagnostic.
    PreferFlag,
}

impl AmbiguityPolicy {
    /// The `snake_case` name used by `serde` and [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::PreferDiagnostic => "prefer_diagnostic",
            Self::PreferFlag => "prefer_flag",
        }
    }
}

impl fmt::Display for AmbiguityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an [`AmbiguityPolicy`] from an unrecognised name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown ambiguity policy '{0}', expected reject, prefer_diagnostic or prefer_flag")]
pub struct UnknownPolicy(pub String);

impl FromStr for AmbiguityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reject" => Ok(Self::Reject),
            "prefer_diagnostic" => Ok(Self::PreferDiagnostic),
            "prefer_flag" => Ok(Self::PreferFlag),
            other => Err(UnknownPolicy(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests panic to surface serialisation failures"
)]
mod tests {
    use super::{AmbiguityPolicy, UnknownPolicy};
    use rstest::rstest;

    #[test]
    fn defaults_to_reject() {
        assert_eq!(AmbiguityPolicy::default(), AmbiguityPolicy::Reject);
    }

    #[rstest]
    #[case(AmbiguityPolicy::Reject)]
    #[case(AmbiguityPolicy::PreferDiagnostic)]
    #[case(AmbiguityPolicy::PreferFlag)]
    fn name_parses_back(#[case] policy: AmbiguityPolicy) {
        assert_eq!(policy.name().parse::<AmbiguityPolicy>(), Ok(policy));
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let encoded = serde_json::to_string(&AmbiguityPolicy::PreferDiagnostic)
            .expect("policy serialises");
        assert_eq!(encoded, "\"prefer_diagnostic\"");
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "favour_flag".parse::<AmbiguityPolicy>(),
            Err(UnknownPolicy("favour_flag".to_owned()))
        );
    }
}
