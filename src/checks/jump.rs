use super::{Anomaly, CheckOutcome, Diagnostic};
use crate::record::Value;

/// Delta-jump check on a numeric channel: any consecutive pair differing by
/// more than `max_jump` in either direction is flagged with its signed
/// delta. No warm-up: round-trip jumps matter even before lock, so the scan
/// starts at the very first sample.
pub fn check(channel: &[Value], max_jump: i64) -> CheckOutcome {
    let mut diagnostics = Vec::new();

    for (index, value) in channel.iter().enumerate() {
        if value.as_int().is_none() {
            diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::NonNumeric {
                    raw: value.to_string(),
                },
            });
        }
    }

    for i in 1..channel.len() {
        if let (Some(prev), Some(cur)) = (channel[i - 1].as_int(), channel[i].as_int()) {
            let delta = cur - prev;
            if delta > max_jump || delta < -max_jump {
                diagnostics.push(Diagnostic {
                    index: i,
                    anomaly: Anomaly::MetricJump { delta },
                });
            }
        }
    }
    CheckOutcome::from_diagnostics(diagnostics)
}
