use crate::aggregate::{
    aggregate_by_device, aggregate_by_room, aggregate_by_timestamp, total_watts, Total,
};
use crate::parse::{diagnose, parse};
use crate::reading::Reading;

/// Everything the charts draw, derived from one input text.
///
/// Holds no state beyond the derived tables: rebuild it whenever the text
/// changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dashboard {
    pub readings: Vec<Reading>,
    pub by_device: Vec<Total>,
    pub by_room: Vec<Total>,
    pub timeline: Vec<Total>,
    #[serde(serialize_with = "crate::format::serialize_watts")]
    pub total_watts: f64,
}

impl Dashboard {
    pub fn from_text(text: &str) -> Self {
        Self::from_readings(parse(text))
    }

    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self {
            by_device: aggregate_by_device(&readings),
            by_room: aggregate_by_room(&readings),
            timeline: aggregate_by_timestamp(&readings),
            total_watts: total_watts(&readings),
            readings,
        }
    }

    /// Like `from_text`, except that a strict `cfg` turns anything `parse`
    /// would degrade into an error.
    pub fn try_from_text(text: &str, cfg: &crate::Cfg) -> Result<Self, crate::Error> {
        if cfg.strict {
            let issues = diagnose(text);
            if !issues.is_empty() {
                return Err(crate::Error::Malformed(issues));
            }
        }
        Ok(Self::from_text(text))
    }
}
