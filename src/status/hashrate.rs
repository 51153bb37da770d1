// src/status/hashrate.rs
//! Human-readable hashrate conversion
//!
//! NOMP reports some hashrates only as display strings like "2.43 MH" or
//! "1.5 KSol/s". This module converts those strings back into raw H/s, and
//! formats raw values into the same style for display.

/// Parses a human-readable hashrate string into raw H/s
///
/// Accepts strings of the form `"<number> <unit>"`. Recognized units:
/// `KH`/`KSol/s` (1e3), `MH` (1e6), `GH` (1e9), `TH` (1e12), `PH` (1e15).
/// An unrecognized unit leaves the number unscaled.
///
/// This function never fails: an empty string, an unparsable leading
/// number, or a string without a unit token yields `0.0`. The upstream
/// strings are display output and get truncated or reformatted across
/// NOMP versions, so leniency here is deliberate.
///
/// # Arguments
/// * `hashrate_str` - The display string to parse (e.g. "2.43 MH")
///
/// # Returns
/// The hashrate in raw H/s, or `0.0` if the string cannot be parsed
pub fn parse_hashrate(hashrate_str: &str) -> f64 {
    let mut fields = hashrate_str.split(' ');

    let hashrate: f64 = match fields.next().map(str::parse) {
        Some(Ok(value)) => value,
        _ => return 0.0,
    };

    match fields.next() {
        Some("KH") | Some("KSol/s") => hashrate * 1e3,
        Some("MH") => hashrate * 1e6,
        Some("GH") => hashrate * 1e9,
        Some("TH") => hashrate * 1e12,
        Some("PH") => hashrate * 1e15,
        Some(_) => hashrate,
        // No unit token at all: the string is not a hashrate display value
        None => 0.0,
    }
}

const UNITS: &[&str] = &["H", "KH", "MH", "GH", "TH", "PH"];

/// Formats a raw H/s value as a human-readable string
///
/// Produces the same style the pool server emits ("2.43 MH"), scaling to
/// the largest unit that keeps the number below 1000. Values at or beyond
/// the table's top stay in PH.
///
/// # Arguments
/// * `hashrate` - The hashrate in raw H/s
pub fn format_hashrate(hashrate: f64) -> String {
    let mut rate = hashrate;
    let mut unit = 0;
    while rate >= 1000.0 && unit < UNITS.len() - 1 {
        rate /= 1000.0;
        unit += 1;
    }
    format!("{:.2} {}", rate, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scaled_units() {
        let cases = [
            ("2.43 MH", 2_430_000.0),
            ("0.00 KH", 0.0),
            ("1.5 KSol/s", 1_500.0),
            ("3 GH", 3e9),
            ("1.2 TH", 1.2e12),
            ("0.5 PH", 0.5e15),
        ];

        for (input, expected) in cases {
            assert_eq!(
                parse_hashrate(input),
                expected,
                "Failed on input {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_missing_or_unknown_unit() {
        // No unit token at all
        assert_eq!(parse_hashrate("1234.5"), 0.0);
        // Unknown unit: number passes through unscaled
        assert_eq!(parse_hashrate("42 Sol"), 42.0);
    }

    #[test]
    fn test_parse_garbage_returns_zero() {
        assert_eq!(parse_hashrate(""), 0.0);
        assert_eq!(parse_hashrate("fast MH"), 0.0);
        assert_eq!(parse_hashrate(" "), 0.0);
    }

    #[test]
    fn test_format() {
        let cases = [
            (0.0, "0.00 H"),
            (999.0, "999.00 H"),
            (1_000.0, "1.00 KH"),
            (2_430_000.0, "2.43 MH"),
            (2.0e9, "2.00 GH"),
            (3.5e12, "3.50 TH"),
            (4.2e15, "4.20 PH"),
            (1e18, "1000.00 PH"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_hashrate(input), expected, "Failed on input {input}");
        }
    }

    #[test]
    fn test_parse_format_agree() {
        assert_eq!(parse_hashrate(&format_hashrate(2_430_000.0)), 2_430_000.0);
    }
}
