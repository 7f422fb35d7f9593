use std::collections::HashMap;

use crate::reading::Reading;

/// Summed watts for one group. A `None` key collects the readings whose line
/// was too short to carry the grouping field.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Total {
    pub key: Option<String>,
    #[serde(serialize_with = "crate::format::serialize_watts")]
    pub total: f64,
}

/// Group on `key_fn` by exact string equality and sum watts per group.
///
/// Groups come out in the order their key was first seen. `NaN` watts make
/// their group's total `NaN`.
pub fn aggregate_by_key<F>(readings: &[Reading], key_fn: F) -> Vec<Total>
where
    F: Fn(&Reading) -> Option<&str>,
{
    let mut totals: Vec<Total> = Vec::new();
    let mut slot_of: HashMap<Option<&str>, usize> = HashMap::new();
    for r in readings {
        let key = key_fn(r);
        let slot = *slot_of.entry(key).or_insert_with(|| {
            totals.push(Total {
                key: key.map(str::to_string),
                total: 0.0,
            });
            totals.len() - 1
        });
        totals[slot].total += r.watts;
    }
    totals
}

pub fn aggregate_by_device(readings: &[Reading]) -> Vec<Total> {
    aggregate_by_key(readings, Reading::device)
}

pub fn aggregate_by_room(readings: &[Reading]) -> Vec<Total> {
    aggregate_by_key(readings, Reading::room)
}

/// The timeline. Every key is `Some`.
pub fn aggregate_by_timestamp(readings: &[Reading]) -> Vec<Total> {
    aggregate_by_key(readings, Reading::timestamp)
}

/// The grand total, independent of grouping.
pub fn total_watts(readings: &[Reading]) -> f64 {
    readings.iter().fold(0.0, |sum, r| sum + r.watts)
}
