//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;

/// Formats a byte count as `"<value> <unit>"` with one decimal place.
///
/// `0` is the special case `"0 Bytes"`. Sizes beyond the TB tier stay in TB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut tier = 0;
    while value >= STEP && tier < UNITS.len() - 1 {
        value /= STEP;
        tier += 1;
    }

    // half-up, like the browser's toFixed; the tier is picked before
    // rounding, so 1048575 reads "1024.0 KB" rather than "1.0 MB"
    let rounded = (value * 10.0).round() / 10.0;
    format!("{:.1} {}", rounded, UNITS[tier])
}
