/// Byte-unit helpers used by the storage line.
///
/// All sizes are `u64` bytes. The dashboard reports whole gibibytes and
/// truncates, so no floating point is involved.

/// Bytes in one gibibyte (2^30).
pub const GIB: u64 = 1 << 30;

/// Whole gibibytes in `bytes`, truncating any fraction.
pub fn whole_gib(bytes: u64) -> u64 {
    bytes / GIB
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
