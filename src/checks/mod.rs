//! Sequential-invariant checks over an extracted [`ChannelSet`].
//!
//! # PURITY INVARIANT
//! Every check is a pure function of the channels it reads: no channel is
//! ever mutated, re-running a check on the same data yields the same
//! outcome, and the five checks may run in any order.
//!
//! An invariant violation is a normal, reportable outcome, never an error:
//! each check always completes and returns a verdict plus diagnostics.

use std::fmt;

use serde::Serialize;

use crate::config::Thresholds;
use crate::extract::ChannelSet;

pub mod bound;
pub mod jump;
pub mod lock;
pub mod state;
pub mod timing;

/// First index at which `steady` holds, or `samples.len()` if it never does.
///
/// The warm-up rule shared by the continuity, timing and bound checks:
/// samples before the link first reaches steady state are excluded, and a
/// log that never reaches it (or an empty log) leaves nothing to check.
pub fn warm_up_cursor<T>(samples: &[T], steady: impl Fn(&T) -> bool) -> usize {
    samples.iter().position(steady).unwrap_or(samples.len())
}

/// One anomalous sample, with what was observed there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub index: usize,
    pub anomaly: Anomaly,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Anomaly {
    /// lock dropped from 1 after first acquiring.
    LossOfLock,
    /// Servo state left TRACK_PHASE after first reaching it.
    LeftTrackingState { observed: String },
    /// Timestamp gap outside the accepted interval (or negative).
    BadTimeInterval { interval: f64 },
    /// Consecutive-sample delta beyond the jump threshold.
    MetricJump { delta: i64 },
    /// Value outside the symmetric bound.
    OutOfBounds { value: i64 },
    /// Textual value where the check needed a number.
    NonNumeric { raw: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anomaly {
            Anomaly::LossOfLock => write!(f, "loss of lock at sample {}", self.index),
            Anomaly::LeftTrackingState { observed } => {
                write!(f, "left TRACK_PHASE at sample {} to {}", self.index, observed)
            }
            Anomaly::BadTimeInterval { interval } => {
                write!(f, "time counter at sample {}, interval {:.3}s", self.index, interval)
            }
            Anomaly::MetricJump { delta } => {
                write!(f, "rtt jump at sample {} is {}ps", self.index, delta)
            }
            Anomaly::OutOfBounds { value } => {
                write!(f, "cko too large at sample {} value is {}ps", self.index, value)
            }
            Anomaly::NonNumeric { raw } => {
                write!(f, "non-numeric value at sample {}: {}", self.index, raw)
            }
        }
    }
}

/// Verdict of one check: passed only if the scan produced zero diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckOutcome {
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            passed: diagnostics.is_empty(),
            diagnostics,
        }
    }
}

/// Runs the full validator suite against one [`ChannelSet`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    thresholds: Thresholds,
}

impl Analyzer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn run(&self, data: &ChannelSet) -> AnalysisReport {
        AnalysisReport {
            lock: lock::check(data.channel("lock")),
            state: state::check(data.channel("ss")),
            time: timing::check(
                data.channel("sec"),
                data.channel("nsec"),
                data.channel("ss"),
                &self.thresholds,
            ),
            rtt: jump::check(data.channel("mu"), self.thresholds.max_mu_jump),
            cko: bound::check(
                data.channel("cko"),
                data.channel("ss"),
                self.thresholds.max_cko,
            ),
        }
    }
}

/// Independent verdicts of the five checks. There is deliberately no
/// aggregate pass/fail; each check reports on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub lock: CheckOutcome,
    pub state: CheckOutcome,
    pub time: CheckOutcome,
    pub rtt: CheckOutcome,
    pub cko: CheckOutcome,
}

impl AnalysisReport {
    /// Display order, labels and full-pass messages for rendering.
    pub fn sections(&self) -> [(&'static str, &CheckOutcome, &'static str); 5] {
        [
            ("LOCK", &self.lock, "Success, always locked"),
            ("STATE", &self.state, "Success, always TRACK_PHASE"),
            ("TIME", &self.time, "Success, always growing"),
            ("RTT", &self.rtt, "Success, no jumps detected"),
            ("CKO", &self.cko, "Success, no values outside accepted range"),
        ]
    }
}
