use std::net::Ipv6Addr;

/// Ambient `{host, protocol}` of the embedding environment, consulted only
/// by [`Url::with_context`](crate::Url::with_context). Headless callers
/// simply never build one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub host: String,
    /// Scheme with or without the trailing ':'
    pub protocol: String,
}

/// Pluggable hostname canonicalizer.
///
/// The contract is text in, text out: IDN labels become their ASCII
/// (punycode) form and IPv6 literals their canonical shortest form.
/// Returning `None` means "no verdict", and the host is left untouched.
pub trait HostNormalizer {
    fn normalize_host_text(&self, host: &str) -> Option<String>;
}

/// Default [`HostNormalizer`] backed by the `idna` crate, with IPv6
/// literals rewritten through [`Ipv6Addr`]'s canonical display form.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdnaHostNormalizer;

impl HostNormalizer for IdnaHostNormalizer {
    fn normalize_host_text(&self, host: &str) -> Option<String> {
        if host.is_empty() {
            return None;
        }

        // Bracketed and bare IPv6 literals keep their bracketing style.
        if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            let addr: Ipv6Addr = inner.parse().ok()?;
            return Some(format!("[{addr}]"));
        }
        if let Ok(addr) = host.parse::<Ipv6Addr>() {
            return Some(addr.to_string());
        }

        idna::domain_to_ascii(host).ok()
    }
}
