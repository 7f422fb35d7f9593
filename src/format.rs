/// Readings the dashboard shows when given no input of its own.
pub const SAMPLE_CSV: &str = "\
2025-10-01 00:00:00,Living Room,TV,89
2025-10-01 00:00:00,Living Room,Lamp,14
2025-10-01 00:00:00,Living Room,AC,1397
2025-10-01 00:00:00,Kitchen,Refrigerator,163
2025-10-01 00:00:00,Kitchen,Oven,2097
2025-10-01 00:00:00,Kitchen,Microwave,893
2025-10-01 00:00:00,Bedroom,Lamp,22
2025-10-01 00:00:00,Bedroom,Fan,55
2025-10-01 00:00:00,Bedroom,TV,143
2025-10-01 00:00:00,Bedroom,PlayStation,109
2025-10-01 00:00:00,Garage,Dryer,2039
2025-10-01 00:00:00,Garage,Washer,944";

pub const PALETTE: [&str; 7] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#8dd1e1", "#a4de6c", "#d0ed57",
];

pub fn color_for(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Time-of-day part of `2025-10-01 00:00:00`, or the whole thing if there's
/// no space to split on.
pub fn tick_label(timestamp: &str) -> &str {
    timestamp.split(' ').nth(1).unwrap_or(timestamp)
}

pub fn key_label(key: Option<&str>) -> &str {
    key.unwrap_or("undefined")
}

/// `7965` → `7,965`, `1234.5678` → `1,234.568`.
pub fn group_thousands(watts: f64) -> String {
    if watts.is_nan() {
        return "NaN".to_string();
    }
    if watts.is_infinite() {
        return if watts > 0.0 { "∞" } else { "-∞" }.to_string();
    }
    let fixed = format!("{:.3}", watts.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let frac = frac.trim_end_matches('0');
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, c) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if watts < 0.0 && (int != "0" || !frac.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Serde adapter for watts: finite values as numbers, otherwise the strings
/// `NaN`, `Infinity` and `-Infinity`, so JSON doesn't turn them into `null`.
pub fn serialize_watts<S: serde::Serializer>(watts: &f64, s: S) -> Result<S::Ok, S::Error> {
    if watts.is_finite() {
        s.serialize_f64(*watts)
    } else if watts.is_nan() {
        s.serialize_str("NaN")
    } else if *watts > 0.0 {
        s.serialize_str("Infinity")
    } else {
        s.serialize_str("-Infinity")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(color_for(0), "#8884d8");
        assert_eq!(color_for(6), "#d0ed57");
        assert_eq!(color_for(7), "#8884d8");
        assert_eq!(color_for(9), "#ffc658");
    }

    #[test]
    fn tick_is_time_of_day() {
        assert_eq!(tick_label("2025-10-01 00:15:00"), "00:15:00");
        assert_eq!(tick_label("2025-10-01"), "2025-10-01");
        assert_eq!(tick_label("a b c"), "b");
    }

    #[test]
    fn missing_key_label() {
        assert_eq!(key_label(Some("Garage")), "Garage");
        assert_eq!(key_label(None), "undefined");
    }

    #[test]
    fn thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(7965.0), "7,965");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(1234.5678), "1,234.568");
        assert_eq!(group_thousands(2.5), "2.5");
        assert_eq!(group_thousands(-1500.0), "-1,500");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[derive(serde::Serialize)]
    struct W(#[serde(serialize_with = "serialize_watts")] f64);

    #[test]
    fn non_finite_watts_serialize_as_strings() {
        assert_eq!(serde_json::to_string(&W(89.0)).unwrap(), "89.0");
        assert_eq!(serde_json::to_string(&W(f64::NAN)).unwrap(), r#""NaN""#);
        assert_eq!(serde_json::to_string(&W(f64::INFINITY)).unwrap(), r#""Infinity""#);
        assert_eq!(serde_json::to_string(&W(f64::NEG_INFINITY)).unwrap(), r#""-Infinity""#);
    }

    #[test]
    fn thousands_non_finite() {
        assert_eq!(group_thousands(f64::NAN), "NaN");
        assert_eq!(group_thousands(f64::INFINITY), "∞");
        assert_eq!(group_thousands(f64::NEG_INFINITY), "-∞");
    }
}
