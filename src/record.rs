use std::fmt;

use serde::{Deserialize, Serialize};

/// Literal prefix marking a link-status record line. Everything else in the
/// captured stream (boot banners, interleaved shell output) is ignored.
pub const RECORD_TAG: &str = "lnk:";

/// Servo state label reported once the link has finished acquisition and is
/// in steady-state phase tracking.
pub const TRACKING_STATE: &str = "TRACK_PHASE";

/// Fields extracted for analysis. The channels of a [`crate::extract::ChannelSet`]
/// are index-aligned with this list.
pub const ANALYSIS_FIELDS: [&str; 6] = ["lock", "mu", "cko", "sec", "nsec", "ss"];

/// Fields forwarded to the chart collaborator. Must stay a subset of
/// [`ANALYSIS_FIELDS`].
pub const DISPLAY_FIELDS: [&str; 4] = ["lock", "mu", "cko", "sec"];

/// One extracted field value.
///
/// The log is noisy: a field that should carry an integer can carry garbage,
/// and extraction must never abort over it. A value that fails integer
/// conversion is retained as the raw token text, so a channel can mix both
/// variants. Checks that need a number reject the textual variant explicitly
/// and report it, instead of trusting an implicit conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl Value {
    /// Integer view; `None` for the textual variant.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Float view. A textual value that happens to parse as a float (e.g. a
    /// fractional seconds field) is still usable for time arithmetic.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Text(s) => s.parse::<f64>().ok(),
        }
    }

    /// Textual view; `None` for the integer variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Text(s) => Some(s.as_str()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}
