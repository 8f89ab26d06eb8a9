use crate::components::UrlComponents;
use crate::helpers::{is_ascii_digits, split_fragment, split_query, trim_port_zeros};

/// Parse an arbitrary string into a component model.
///
/// The parser never fails: each step consumes a recognizable prefix or
/// suffix and anything left over is absorbed into the path.
pub(crate) fn parse_href(input: &str) -> UrlComponents {
    let mut components = UrlComponents::default();

    // Fragment and query are split off first, so their content can never
    // confuse the authority grammar.
    let (rest, fragment) = split_fragment(input);
    components.fragment = fragment.map(str::to_string);
    let (rest, query) = split_query(rest);
    components.query = query.map(str::to_string);

    let rest = match split_scheme(rest) {
        Some((scheme, rest)) => {
            components.protocol = scheme.to_string();
            rest
        }
        // A bare leading "//" is protocol-relative: no scheme, but the
        // authority section still parses below.
        None => rest,
    };

    let rest = if let Some(rest) = rest.strip_prefix("//") {
        components.authority = true;
        let end = rest.find('/').unwrap_or(rest.len());
        parse_authority_into(&rest[..end], &mut components);
        &rest[end..]
    } else {
        rest
    };

    components.path = rest.to_string();
    components.enforce_invariants();
    components
}

/// Split a leading "scheme:" off the input. The scheme is a non-empty
/// ASCII-alphabetic run; anything else means there is no scheme.
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    if colon == 0 {
        return None;
    }
    let candidate = &input[..colon];
    if candidate.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some((candidate, &input[colon + 1..]))
    } else {
        None
    }
}

/// Apply the authority grammar "[user[:pass]@]host[:port]", replacing all
/// four fields in the component model (pieces absent from the input are
/// cleared). Credentials split at the last '@', so passwords may contain
/// '@'; credentials themselves split at the first ':'.
pub(crate) fn parse_authority_into(authority: &str, components: &mut UrlComponents) {
    let (credentials, host_port) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    match credentials {
        Some(credentials) => match credentials.find(':') {
            Some(colon) => {
                components.username = credentials[..colon].to_string();
                components.password = credentials[colon + 1..].to_string();
            }
            None => {
                components.username = credentials.to_string();
                components.password.clear();
            }
        },
        None => {
            components.username.clear();
            components.password.clear();
        }
    }

    let (host, port) = split_host_port(host_port);
    components.host = host.to_string();
    components.port = port.map_or_else(String::new, |p| trim_port_zeros(p).to_string());
    components.enforce_invariants();
}

/// Split "host[:port]" at the last ':' outside a bracketed IPv6 literal.
/// A candidate port that is not all ASCII digits stays part of the host,
/// so an unbracketed IPv6 literal keeps its final group.
pub(crate) fn split_host_port(input: &str) -> (&str, Option<&str>) {
    if let Some(bracket_end) = input.rfind(']') {
        let after = &input[bracket_end + 1..];
        return match after.strip_prefix(':') {
            Some(port) if is_ascii_digits(port) => (&input[..=bracket_end], Some(port)),
            _ => (input, None),
        };
    }

    match input.rfind(':') {
        Some(colon) if is_ascii_digits(&input[colon + 1..]) => {
            (&input[..colon], Some(&input[colon + 1..]))
        }
        _ => (input, None),
    }
}
