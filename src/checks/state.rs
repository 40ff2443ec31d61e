use super::{warm_up_cursor, Anomaly, CheckOutcome, Diagnostic};
use crate::record::{Value, TRACKING_STATE};

/// State continuity: once the servo first reports TRACK_PHASE, every later
/// sample must still report it. Same shape as the lock check with the state
/// label substituted for lock=1.
pub fn check(ss: &[Value]) -> CheckOutcome {
    let start = warm_up_cursor(ss, is_tracking);

    let mut diagnostics = Vec::new();
    for (index, value) in ss.iter().enumerate().skip(start) {
        if !is_tracking(value) {
            diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::LeftTrackingState {
                    observed: value.to_string(),
                },
            });
        }
    }
    CheckOutcome::from_diagnostics(diagnostics)
}

pub(crate) fn is_tracking(value: &Value) -> bool {
    value.as_text() == Some(TRACKING_STATE)
}
