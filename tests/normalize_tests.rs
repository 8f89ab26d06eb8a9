#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Normalization tests: explicit, idempotent, component-local rewrites.
use urlobj::{HostNormalizer, Url};

#[test]
fn test_normalize_port_drops_scheme_default() {
    let mut url = Url::parse("http://example.org:80/foobar.html");
    url.normalize_port();
    assert_eq!(url.href(), "http://example.org/foobar.html");

    let mut url = Url::parse("https://example.org:443/");
    url.normalize_port();
    assert_eq!(url.href(), "https://example.org/");
}

#[test]
fn test_normalize_port_keeps_non_default() {
    // ftp's default port is 21, not 80
    let mut url = Url::parse("ftp://example.org:80/foobar.html");
    url.normalize_port();
    assert_eq!(url.href(), "ftp://example.org:80/foobar.html");

    let mut url = Url::parse("http://example.org:8080/");
    url.normalize_port();
    assert_eq!(url.port(), "8080");

    // Unknown schemes have no default to drop
    let mut url = Url::parse("custom://example.org:80/");
    url.normalize_port();
    assert_eq!(url.port(), "80");
}

#[test]
fn test_normalize_port_idempotent() {
    for input in [
        "http://example.org:80/",
        "http://example.org:8080/",
        "ftp://example.org:80/",
        "http://example.org/",
    ] {
        let mut url = Url::parse(input);
        url.normalize_port();
        let once = url.href();
        url.normalize_port();
        assert_eq!(url.href(), once, "input: {input}");
    }
}

#[test]
fn test_normalize_query_drops_empty_marker() {
    let mut url = Url::parse("http://example.org/foobar.html?");
    assert_eq!(url.href(), "http://example.org/foobar.html?");
    url.normalize_query();
    assert_eq!(url.href(), "http://example.org/foobar.html");

    // Non-empty queries are untouched
    let mut url = Url::parse("http://example.org/?q=1");
    url.normalize_query();
    assert_eq!(url.href(), "http://example.org/?q=1");
}

#[test]
fn test_normalize_fragment_drops_empty_marker() {
    let mut url = Url::parse("http://example.org/foobar.html#");
    assert_eq!(url.href(), "http://example.org/foobar.html#");
    url.normalize_fragment();
    assert_eq!(url.href(), "http://example.org/foobar.html");
}

#[test]
fn test_normalize_host_idn_to_punycode() {
    let mut url = Url::parse("http://exämple.org/foobar.html");
    url.normalize_host();
    assert_eq!(url.href(), "http://xn--exmple-cua.org/foobar.html");
}

#[test]
fn test_normalize_host_ipv6_shortest_form() {
    let mut url = Url::parse("http://fe80:0000:0000:0000:0204:61ff:fe9d:f156/foobar.html");
    url.normalize_host();
    assert_eq!(url.href(), "http://fe80::204:61ff:fe9d:f156/foobar.html");

    let mut url = Url::parse("http://[2001:0db8:0:0:0:0:0:1]/p");
    url.normalize_host();
    assert_eq!(url.hostname(), "[2001:db8::1]");
}

#[test]
fn test_normalize_host_with_injected_collaborator() {
    struct Upper;
    impl HostNormalizer for Upper {
        fn normalize_host_text(&self, host: &str) -> Option<String> {
            Some(host.to_ascii_uppercase())
        }
    }

    struct Unavailable;
    impl HostNormalizer for Unavailable {
        fn normalize_host_text(&self, _host: &str) -> Option<String> {
            None
        }
    }

    let mut url = Url::parse("http://example.org/");
    url.normalize_host_with(&Upper);
    assert_eq!(url.hostname(), "EXAMPLE.ORG");

    // An unavailable collaborator degrades to a no-op
    url.normalize_host_with(&Unavailable);
    assert_eq!(url.hostname(), "EXAMPLE.ORG");
}

#[test]
fn test_normalize_path_collapses_segments() {
    let mut url = Url::parse("http://example.org/a/./b/../c.html");
    url.normalize_path();
    assert_eq!(url.pathname(), "/a/c.html");

    let mut url = Url::parse("http://example.org/a//b///c");
    url.normalize_path();
    assert_eq!(url.pathname(), "/a/b/c");

    // Relative paths keep what cannot collapse
    let mut url = Url::parse("../path/index.html");
    url.normalize_path();
    assert_eq!(url.pathname(), "../path/index.html");
}

#[test]
fn test_normalize_aggregate() {
    let mut url = Url::parse("http://exämple.org:80/a/./b/../foobar.html?#");
    url.normalize();
    assert_eq!(url.href(), "http://xn--exmple-cua.org/a/foobar.html");
}

#[test]
fn test_normalize_is_idempotent() {
    let mut url = Url::parse("http://exämple.org:80/a/./b/../foobar.html?#frag");
    url.normalize();
    let once = url.href();
    url.normalize();
    assert_eq!(url.href(), once);
}
