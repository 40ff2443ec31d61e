use super::{warm_up_cursor, Anomaly, CheckOutcome, Diagnostic};
use crate::record::Value;

/// Lock continuity: once the link first reports lock=1, every later sample
/// must still report it. Samples before first lock are warm-up and skipped;
/// a log that never locks passes vacuously.
pub fn check(lock: &[Value]) -> CheckOutcome {
    let start = warm_up_cursor(lock, is_locked);

    let mut diagnostics = Vec::new();
    for (index, value) in lock.iter().enumerate().skip(start) {
        if !is_locked(value) {
            diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::LossOfLock,
            });
        }
    }
    CheckOutcome::from_diagnostics(diagnostics)
}

fn is_locked(value: &Value) -> bool {
    matches!(value, Value::Int(1))
}
