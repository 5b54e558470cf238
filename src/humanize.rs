//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with a binary (1024) divisor and two decimals.
///
/// A value moves to the next unit once it reaches 1024, so `2048` becomes
/// `"2.00 KB"`. Terabytes are the largest unit.
pub fn humanize_bytes(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}
