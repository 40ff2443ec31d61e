use super::{state, warm_up_cursor, Anomaly, CheckOutcome, Diagnostic};
use crate::record::Value;

/// Absolute bound on the cko channel: from the first TRACK_PHASE sample
/// onward, every value must sit inside `[-max, max]`. Unlike the mu check
/// this bounds the value itself, not the consecutive delta; the asymmetry
/// is intentional and matches the link's servo behavior.
pub fn check(cko: &[Value], ss: &[Value], max: i64) -> CheckOutcome {
    let start = warm_up_cursor(ss, state::is_tracking);

    let mut diagnostics = Vec::new();
    for (index, value) in cko.iter().enumerate().skip(start) {
        match value.as_int() {
            Some(v) if v > max || v < -max => diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::OutOfBounds { value: v },
            }),
            Some(_) => {}
            None => diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::NonNumeric {
                    raw: value.to_string(),
                },
            }),
        }
    }
    CheckOutcome::from_diagnostics(diagnostics)
}
