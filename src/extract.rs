use crate::record::{Value, ANALYSIS_FIELDS, RECORD_TAG};

/// Index-aligned field channels extracted from a captured log.
///
/// One channel per entry of [`ANALYSIS_FIELDS`]; the i-th entries across all
/// channels describe the same logical record, in file order. Built once from
/// the full capture and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSet {
    channels: Vec<Vec<Value>>,
}

impl ChannelSet {
    /// Scan raw lines and extract every complete link-status record.
    ///
    /// A line is a candidate only if it starts with [`RECORD_TAG`]. Tokens
    /// are whitespace-separated `name:value` pairs; names outside the
    /// configured field set are skipped, and scanning stops once every
    /// configured field has been seen once (later duplicates on the same
    /// line are ignored). A value that fails integer parsing is kept as raw
    /// text with one layer of surrounding single quotes stripped, matching
    /// the firmware's `ss:'TRACK_PHASE'` quoting.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut channels = vec![Vec::new(); ANALYSIS_FIELDS.len()];

        for line in lines {
            if !line.starts_with(RECORD_TAG) {
                continue;
            }

            let mut record: [Option<Value>; ANALYSIS_FIELDS.len()] = Default::default();
            let mut found = 0;
            for token in line.split_whitespace() {
                if found == ANALYSIS_FIELDS.len() {
                    break;
                }
                let Some((name, raw)) = token.split_once(':') else {
                    continue;
                };
                let Some(idx) = ANALYSIS_FIELDS.iter().position(|f| *f == name) else {
                    continue;
                };
                if record[idx].is_some() {
                    continue;
                }
                record[idx] = Some(parse_value(raw));
                found += 1;
            }

            // Channels must stay index-aligned, so a truncated record line
            // (missing one of the configured fields) is dropped whole.
            if found == ANALYSIS_FIELDS.len() {
                for (idx, value) in record.into_iter().enumerate() {
                    if let Some(value) = value {
                        channels[idx].push(value);
                    }
                }
            } else {
                tracing::warn!(found, "incomplete link-status record, skipped");
            }
        }

        Self { channels }
    }

    /// Channel for an analysis field, empty for an unknown name.
    pub fn channel(&self, name: &str) -> &[Value] {
        ANALYSIS_FIELDS
            .iter()
            .position(|f| *f == name)
            .map_or(&[][..], |idx| &self.channels[idx])
    }

    /// Number of extracted records (the common length of every channel).
    pub fn len(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn parse_value(raw: &str) -> Value {
    match raw.parse::<i64>() {
        Ok(v) => Value::Int(v),
        Err(_) => Value::Text(strip_quotes(raw).to_string()),
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(raw)
}
