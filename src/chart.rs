use serde::Serialize;
use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::extract::ChannelSet;
use crate::record::{Value, DISPLAY_FIELDS};

const TITLE_STAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to format chart timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Request for the rendering collaborator: one scatter chart of a display
/// field. X is the dense 0-based sample index; Y is the raw (possibly
/// mixed-typed) value sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub field: String,
    pub title: String,
    pub values: Vec<Value>,
}

/// One chart request per display field, titled with the field name and the
/// generation time in UTC. Non-display analysis fields get no chart.
pub fn chart_requests(data: &ChannelSet) -> Result<Vec<ChartSpec>, ChartError> {
    let stamp = OffsetDateTime::now_utc().format(&TITLE_STAMP)?;

    Ok(DISPLAY_FIELDS
        .iter()
        .map(|field| ChartSpec {
            field: (*field).to_string(),
            title: format!("{field}, updated {stamp}"),
            values: data.channel(field).to_vec(),
        })
        .collect())
}
