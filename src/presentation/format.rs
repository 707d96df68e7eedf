//! Unit conversions used by the page template.
//!
//! Both helpers use decimal scaling and never fail: a value upstream left empty or
//! non-numeric renders as zero. Surrounding whitespace is ignored, the same as for
//! the rates sent to the metrics backend.

use crate::constants::{BITS_PER_MEGABIT, BYTES_PER_GIGABYTE};
use std::num::IntErrorKind;

/// Formats a bits/second string as megabits/second with two decimals.
///
/// ```
/// use line_status::presentation::format::format_rate;
/// assert_eq!(format_rate("100000000"), "100.00 Mb/s");
/// assert_eq!(format_rate(""), "0.00 Mb/s");
/// assert_eq!(format_rate(" 100000000 "), "100.00 Mb/s");
/// ```
pub fn format_rate(bits_per_second: &str) -> String {
    let bps: f64 = bits_per_second.trim().parse().unwrap_or(0.0);
    format!("{:.2} Mb/s", bps / BITS_PER_MEGABIT)
}

/// Formats a byte count string as whole gigabytes, truncating.
///
/// Integers too large for `i64` saturate to `i64::MAX` (or `i64::MIN`) rather than
/// reading as zero; anything else that is not an integer renders as `0 GB`.
///
/// ```
/// use line_status::presentation::format::format_quota;
/// assert_eq!(format_quota("500000000000"), "500 GB");
/// assert_eq!(format_quota("1999999999"), "1 GB");
/// assert_eq!(format_quota("99999999999999999999"), "9223372036 GB");
/// ```
pub fn format_quota(bytes: &str) -> String {
    let bytes = parse_saturating(bytes.trim());
    format!("{} GB", bytes / BYTES_PER_GIGABYTE)
}

fn parse_saturating(value: &str) -> i64 {
    match value.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
