/// One power observation: `timestamp,room,device,watts`.
///
/// A line always yields a timestamp. The other fields are `None` when the
/// line was too short to carry them.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Reading {
    pub timestamp: String,
    pub room: Option<String>,
    pub device: Option<String>,
    #[serde(serialize_with = "crate::format::serialize_watts")]
    pub watts: f64,
}

impl Reading {
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn timestamp(&self) -> Option<&str> {
        Some(&self.timestamp)
    }
}

/// Numeric coercion with the leniency of a JavaScript `Number()` call.
///
/// Never fails: text that isn't a number becomes `NaN`, and a missing field
/// does too. Empty text is `0`.
pub fn coerce_watts(text: Option<&str>) -> f64 {
    let Some(s) = text.map(str::trim) else {
        return f64::NAN;
    };
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => (),
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return radix_to_f64(digits, radix);
        }
    }
    // Rust's float parser also takes "inf" and "nan", which Number() doesn't
    if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_to_f64(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut v = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => v = v * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    v
}
