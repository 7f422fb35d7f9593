use wattboard::format::SAMPLE_CSV;
use wattboard::{
    aggregate_by_device, aggregate_by_room, aggregate_by_timestamp, parse, total_watts, Dashboard,
    Reading, Total,
};

const ROOMS: [&str; 4] = ["Living Room", "Kitchen", "Bedroom", "Garage"];
const DEVICES: [&str; 6] = ["TV", "Lamp", "Oven", "Fan", "Dryer", "Washer"];

// Deterministic well-formed input with repeated keys and integer watts.
fn generated(lines: usize, seed: u64) -> String {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    (0..lines)
        .map(|_| {
            format!(
                "2025-10-01 00:{:02}:00 , {} ,{}, {}",
                next() % 5 * 15 % 60,
                ROOMS[next() % ROOMS.len()],
                DEVICES[next() % DEVICES.len()],
                next() % 2500
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sum(totals: &[Total]) -> f64 {
    totals.iter().map(|t| t.total).sum()
}

fn inputs() -> Vec<String> {
    let mut v = vec![SAMPLE_CSV.to_string()];
    for (n, seed) in [(1, 1), (10, 2), (57, 3), (200, 4)] {
        v.push(generated(n, seed));
    }
    v
}

#[test]
fn one_reading_per_line_in_order() {
    for text in inputs() {
        let rs = parse(&text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(rs.len(), lines.len());
        for (r, line) in rs.iter().zip(lines) {
            assert_eq!(Some(r.timestamp.as_str()), line.split(',').next().map(str::trim));
        }
    }
}

#[test]
fn every_grouping_partitions_the_grand_total() {
    for text in inputs() {
        let rs = parse(&text);
        let grand = total_watts(&rs);
        assert_eq!(grand, rs.iter().map(|r| r.watts).sum::<f64>());
        assert_eq!(sum(&aggregate_by_device(&rs)), grand);
        assert_eq!(sum(&aggregate_by_room(&rs)), grand);
        assert_eq!(sum(&aggregate_by_timestamp(&rs)), grand);
    }
}

#[test]
fn group_total_is_sum_over_exactly_its_members() {
    let rs = parse(&generated(120, 9));
    let check = |totals: Vec<Total>, field: fn(&Reading) -> Option<&str>| {
        for t in totals {
            let expected: f64 = rs
                .iter()
                .filter(|r| field(r) == t.key.as_deref())
                .map(|r| r.watts)
                .sum();
            assert_eq!(t.total, expected, "{:?}", t.key);
        }
    };
    check(aggregate_by_device(&rs), Reading::device);
    check(aggregate_by_room(&rs), Reading::room);
    check(aggregate_by_timestamp(&rs), Reading::timestamp);
}

#[test]
fn each_key_appears_once() {
    let rs = parse(&generated(200, 5));
    for totals in [aggregate_by_device(&rs), aggregate_by_room(&rs)] {
        let mut keys: Vec<_> = totals.iter().map(|t| t.key.clone()).collect();
        let n = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), n);
    }
}

#[test]
fn parse_is_idempotent() {
    for text in inputs() {
        assert_eq!(parse(&text), parse(&text));
        assert_eq!(Dashboard::from_text(&text), Dashboard::from_text(&text));
    }
}

#[test]
fn empty_input_is_all_empty() {
    for text in ["", "\n\n", "  \t \n "] {
        let d = Dashboard::from_text(text);
        assert!(d.readings.is_empty());
        assert!(d.by_device.is_empty() && d.by_room.is_empty() && d.timeline.is_empty());
        assert_eq!(d.total_watts, 0.0);
    }
}

#[test]
fn non_numeric_watts_poisons_its_groups_only() {
    let text = format!("{SAMPLE_CSV}\n2025-10-01 00:00:00,Garage,Dryer,unplugged");
    let d = Dashboard::from_text(&text);
    assert!(d.readings[12].watts.is_nan());
    assert!(d.total_watts.is_nan());
    assert!(d.timeline[0].total.is_nan());
    for t in &d.by_room {
        assert_eq!(t.total.is_nan(), t.key.as_deref() == Some("Garage"));
    }
    for t in &d.by_device {
        assert_eq!(t.total.is_nan(), t.key.as_deref() == Some("Dryer"));
    }
}

#[test]
fn living_room_example() {
    let rs = parse("2025-10-01 00:00:00,Living Room,TV,89\n2025-10-01 00:00:00,Living Room,Lamp,14");
    assert_eq!(
        aggregate_by_room(&rs),
        vec![Total {
            key: Some("Living Room".to_string()),
            total: 103.0
        }]
    );
}
