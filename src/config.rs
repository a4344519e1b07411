use std::fmt;
use std::str::FromStr;

/// Default delay before an error message hides itself.
pub const DEFAULT_ERROR_DISMISS_MS: u32 = 5000;

/// What to do with a response that arrives after a newer request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Render it anyway: the last response to resolve wins.
    #[default]
    Apply,
    /// Drop it: the last request to be issued wins.
    Discard,
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "apply" => Ok(StalePolicy::Apply),
            "discard" => Ok(StalePolicy::Discard),
            other => Err(format!("Unknown stale policy: {}", other)),
        }
    }
}

impl fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StalePolicy::Apply => f.write_str("apply"),
            StalePolicy::Discard => f.write_str("discard"),
        }
    }
}

/// Tunables of the request/render state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub error_dismiss_ms: u32,
    pub stale_policy: StalePolicy,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            error_dismiss_ms: DEFAULT_ERROR_DISMISS_MS,
            stale_policy: StalePolicy::default(),
        }
    }
}
