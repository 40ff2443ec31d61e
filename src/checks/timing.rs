use super::{state, warm_up_cursor, Anomaly, CheckOutcome, Diagnostic};
use crate::config::Thresholds;
use crate::record::Value;

/// Monotonic time: from one sample past the first TRACK_PHASE sample, every
/// consecutive timestamp gap must be non-negative and inside the configured
/// interval. Catches clock regression as well as missed or duplicated
/// samples without requiring exact periodicity. The non-negative requirement
/// stands on its own: clock regression is flagged even when a caller relaxes
/// the minimum interval below zero.
///
/// Timestamps are `sec + nsec / 1e9`. A sample whose sec or nsec is not
/// numeric is reported and excluded from the pairs it would take part in.
pub fn check(
    sec: &[Value],
    nsec: &[Value],
    ss: &[Value],
    thresholds: &Thresholds,
) -> CheckOutcome {
    let n = sec.len().min(nsec.len());
    let timestamps: Vec<Option<f64>> = (0..n)
        .map(|i| match (sec[i].as_f64(), nsec[i].as_f64()) {
            (Some(s), Some(ns)) => Some(s + ns / 1e9),
            _ => None,
        })
        .collect();

    // Warm-up recomputed from the state channel, same rule as the state check.
    let start = warm_up_cursor(ss, state::is_tracking);

    let mut diagnostics = Vec::new();
    for (index, stamp) in timestamps.iter().enumerate().skip(start) {
        if stamp.is_none() {
            let raw = if sec[index].as_f64().is_none() {
                sec[index].to_string()
            } else {
                nsec[index].to_string()
            };
            diagnostics.push(Diagnostic {
                index,
                anomaly: Anomaly::NonNumeric { raw },
            });
        }
    }

    for i in (start + 1)..timestamps.len() {
        if let (Some(prev), Some(cur)) = (timestamps[i - 1], timestamps[i]) {
            let interval = cur - prev;
            if interval < 0.0
                || interval < thresholds.min_time_interval
                || interval > thresholds.max_time_interval
            {
                diagnostics.push(Diagnostic {
                    index: i,
                    anomaly: Anomaly::BadTimeInterval { interval },
                });
            }
        }
    }
    CheckOutcome::from_diagnostics(diagnostics)
}
