use crate::reading::{coerce_watts, Reading};

/// Fields per line: timestamp, room, device, watts.
pub const FIELDS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The line split into this many fields instead of four.
    FieldCount { found: usize },
    /// The watts field is present but isn't a number.
    NonNumericWatts { text: String },
}

/// Something `parse` let through silently. `line` is 1-based and counts
/// blank lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub line: usize,
    pub kind: IssueKind,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.kind {
            IssueKind::FieldCount { found } => {
                write!(f, "line {}: expected {FIELDS} fields, found {found}", self.line)
            }
            IssueKind::NonNumericWatts { text } => {
                write!(f, "line {}: watts {text:?} is not a number", self.line)
            }
        }
    }
}

// Non-blank lines, with their line numbers, read as headerless records split
// on plain commas (no quoting) with every field trimmed.
fn records(text: &str) -> Vec<(usize, csv::StringRecord)> {
    let kept: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();
    let joined = kept.iter().map(|(_, l)| *l).collect::<Vec<_>>().join("\n");
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(joined.as_bytes());
    kept.iter()
        .zip(rdr.records())
        .filter_map(|(&(line, _), r)| match r {
            Ok(record) => Some((line, record)),
            Err(e) => {
                log::error!("Error reading line {line}: {e}");
                None
            }
        })
        .collect()
}

fn issue_for(line: usize, record: &csv::StringRecord) -> Option<Issue> {
    if record.len() != FIELDS {
        return Some(Issue {
            line,
            kind: IssueKind::FieldCount {
                found: record.len(),
            },
        });
    }
    let text = record.get(3).unwrap_or_default();
    coerce_watts(Some(text)).is_nan().then(|| Issue {
        line,
        kind: IssueKind::NonNumericWatts {
            text: text.to_string(),
        },
    })
}

fn reading_from(record: &csv::StringRecord) -> Reading {
    Reading {
        timestamp: record.get(0).unwrap_or_default().to_string(),
        room: record.get(1).map(str::to_string),
        device: record.get(2).map(str::to_string),
        watts: coerce_watts(record.get(3)),
    }
}

/// One reading per non-blank line, in input order.
///
/// Never fails. Short lines leave trailing fields as `None`, extra fields are
/// dropped, and unreadable watts become `NaN`.
pub fn parse(text: &str) -> Vec<Reading> {
    let readings: Vec<Reading> = records(text)
        .iter()
        .map(|(line, record)| {
            if let Some(issue) = issue_for(*line, record) {
                log::warn!("{issue}");
            }
            reading_from(record)
        })
        .collect();
    log::debug!("Parsed {} readings", readings.len());
    readings
}

/// The lines `parse` would accept but degrade.
pub fn diagnose(text: &str) -> Vec<Issue> {
    records(text)
        .iter()
        .filter_map(|(line, record)| issue_for(*line, record))
        .collect()
}
