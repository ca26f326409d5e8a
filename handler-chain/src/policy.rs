use std::fmt;
use std::str::FromStr;

use patterns_core::PatternsError;

/// What the chain does with a request nobody accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnhandledPolicy {
    /// Return [`patterns_core::HandlerResponse::Dropped`] and report nothing.
    #[default]
    Drop,
    /// Fail with [`patterns_core::HandlerError::UnhandledRequest`].
    Error,
}

impl FromStr for UnhandledPolicy {
    type Err = PatternsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop" => Ok(UnhandledPolicy::Drop),
            "error" => Ok(UnhandledPolicy::Error),
            other => Err(PatternsError::Config(format!(
                "Unknown unhandled policy '{}', expected 'drop' or 'error'",
                other
            ))),
        }
    }
}

impl fmt::Display for UnhandledPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnhandledPolicy::Drop => f.write_str("drop"),
            UnhandledPolicy::Error => f.write_str("error"),
        }
    }
}
