/// Split off the fragment at the first '#'.
/// Returns (`text_without_fragment`, `fragment_without_hash`).
/// Uses SIMD-accelerated memchr for the delimiter scan.
pub fn split_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split off the query at the first '?'.
/// Returns (`text_without_query`, `query_without_question_mark`).
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Check if a string is entirely ASCII digits. The empty string counts,
/// so a lone trailing ':' reads as an absent port.
pub fn is_ascii_digits(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_digit())
}

/// Trim leading zeros from a digit string, keeping a single "0" when the
/// value is zero.
pub fn trim_port_zeros(port: &str) -> &str {
    let trimmed = port.trim_start_matches('0');
    if trimmed.is_empty() && !port.is_empty() {
        "0"
    } else {
        trimmed
    }
}
