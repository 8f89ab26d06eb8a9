//! Derived fraction views: `domain`/`tld` over the host and
//! `directory`/`filename`/`suffix` over the path.
//!
//! Fractions are recomputed on every read and each write rewrites only the
//! component that owns it. The public-suffix boundary comes from the
//! compiled list in the `psl` crate, with a rightmost-label fallback when
//! the list has no verdict; IP-literal hosts have no fractions.

use std::net::{Ipv4Addr, Ipv6Addr};

use psl::{List, Psl};

use crate::url::Url;

impl Url {
    /// Get the registrable domain of the host: the public suffix plus one
    /// label (e.g. "example.org" for "www.example.org"), or "" when the
    /// host is empty, an IP literal, or nothing but a suffix.
    pub fn domain(&self) -> &str {
        let host = &self.components.host;
        match domain_len(host) {
            Some(len) => &host[host.len() - len..],
            None => "",
        }
    }

    /// Replace the registrable domain, preserving subdomain labels. An
    /// empty write is a no-op.
    pub fn set_domain(&mut self, domain: &str) -> &mut Self {
        if domain.is_empty() {
            return self;
        }
        let host = &self.components.host;
        let Some(len) = domain_len(host) else {
            return self;
        };
        let prefix = &host[..host.len() - len];
        self.components.host = format!("{prefix}{domain}");
        self
    }

    /// Get the public-suffix labels of the host (e.g. "org", or "co.uk"
    /// for multi-label suffixes), or "" when there is no registrable part
    /// in front of them.
    pub fn tld(&self) -> &str {
        let host = &self.components.host;
        match suffix_len(host) {
            Some(len) if len < host.len() => &host[host.len() - len..],
            _ => "",
        }
    }

    /// Replace only the public-suffix labels, preserving everything before
    /// them. An empty write is a no-op.
    pub fn set_tld(&mut self, tld: &str) -> &mut Self {
        if tld.is_empty() {
            return self;
        }
        let host = &self.components.host;
        let Some(len) = suffix_len(host) else {
            return self;
        };
        if len >= host.len() {
            return self;
        }
        let prefix = &host[..host.len() - len];
        self.components.host = format!("{prefix}{tld}");
        self
    }

    /// Get the path up to its last '/' (e.g. "/some/path" for
    /// "/some/path/file.html"; "/" for "/file.html"; "" for a bare
    /// relative filename).
    pub fn directory(&self) -> &str {
        let path = &self.components.path;
        match path.rfind('/') {
            Some(0) => "/",
            Some(slash) => &path[..slash],
            None => "",
        }
    }

    /// Replace the directory part of the path, keeping the filename.
    pub fn set_directory(&mut self, directory: &str) -> &mut Self {
        let filename = self.filename().to_string();
        let trimmed = directory.trim_end_matches('/');
        let path = if trimmed.is_empty() {
            if directory.starts_with('/') {
                format!("/{filename}")
            } else {
                filename
            }
        } else {
            format!("{trimmed}/{filename}")
        };
        self.set_pathname(&path)
    }

    /// Get the path after its last '/' (e.g. "file.suffix")
    pub fn filename(&self) -> &str {
        let path = &self.components.path;
        match path.rfind('/') {
            Some(slash) => &path[slash + 1..],
            None => path,
        }
    }

    /// Replace the filename part of the path, keeping the directory.
    pub fn set_filename(&mut self, filename: &str) -> &mut Self {
        let path = &self.components.path;
        let directory = match path.rfind('/') {
            Some(slash) => &path[..=slash],
            None => "",
        };
        let path = format!("{directory}{filename}");
        self.set_pathname(&path)
    }

    /// Get the filename's extension after its last '.' (e.g. "suffix"),
    /// or "" for dotless and dotfile names.
    pub fn suffix(&self) -> &str {
        let filename = self.filename();
        match filename.rfind('.') {
            Some(dot) if dot > 0 && dot + 1 < filename.len() => &filename[dot + 1..],
            _ => "",
        }
    }

    /// Replace the filename's extension; appends one when the filename has
    /// none, and an empty write removes it. A no-op without a filename.
    pub fn set_suffix(&mut self, suffix: &str) -> &mut Self {
        let filename = self.filename();
        if filename.is_empty() {
            return self;
        }
        let stem = match filename.rfind('.') {
            Some(dot) if dot > 0 => &filename[..dot],
            _ => filename,
        };
        let filename = if suffix.is_empty() {
            stem.to_string()
        } else {
            format!("{stem}.{suffix}")
        };
        self.set_filename(&filename)
    }
}

/// Byte length of the host's public suffix, or None when the host has no
/// suffix to speak of (empty or an IP literal).
fn suffix_len(host: &str) -> Option<usize> {
    if host.is_empty() || is_ip_literal(host) {
        return None;
    }
    if let Some(suffix) = List.suffix(host.as_bytes()) {
        return Some(suffix.as_bytes().len());
    }
    // Fallback: rightmost label only
    host.rfind('.').map(|dot| host.len() - dot - 1)
}

/// Byte length of the registrable domain (suffix plus one label).
fn domain_len(host: &str) -> Option<usize> {
    if host.is_empty() || is_ip_literal(host) {
        return None;
    }
    if let Some(domain) = List.domain(host.as_bytes()) {
        return Some(domain.as_bytes().len());
    }
    // Fallback: the last two labels
    let suffix = suffix_len(host)?;
    if suffix >= host.len() {
        return None;
    }
    let rest = &host[..host.len() - suffix - 1];
    let label_start = rest.rfind('.').map_or(0, |dot| dot + 1);
    Some(host.len() - label_start)
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[')
        || host.parse::<Ipv4Addr>().is_ok()
        || host.parse::<Ipv6Addr>().is_ok()
}
