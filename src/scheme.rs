/// Registered default port for a scheme, or None for schemes without one.
/// Uses length + first byte to minimize comparisons before the full match.
pub fn default_port(scheme: &str) -> Option<u16> {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first().map(u8::to_ascii_lowercase)) {
        (2, Some(b'w')) if bytes.eq_ignore_ascii_case(b"ws") => Some(80),
        (3, Some(b'w')) if bytes.eq_ignore_ascii_case(b"wss") => Some(443),
        (3, Some(b'f')) if bytes.eq_ignore_ascii_case(b"ftp") => Some(21),
        (4, Some(b'h')) if bytes.eq_ignore_ascii_case(b"http") => Some(80),
        (5, Some(b'h')) if bytes.eq_ignore_ascii_case(b"https") => Some(443),
        (6, Some(b'g')) if bytes.eq_ignore_ascii_case(b"gopher") => Some(70),
        _ => None,
    }
}
