//! A mutable URL value type.
//!
//! [`Url`] parses a string (or a partial record of fields) into named
//! components, exposes chainable getters and setters for every component
//! and for derived fractions (domain, tld, directory, filename, suffix),
//! and re-serializes on demand. Explicit normalization operations rewrite
//! components into canonical form without changing the URL's meaning.
//!
//! Parsing is permissive by design: malformed input degrades into the most
//! permissive component instead of failing. The only hard error is
//! constructing from an unsupported dynamic input kind via
//! [`Url::from_value`].
//!
//! ```
//! use urlobj::Url;
//!
//! let mut url = Url::parse("http://example.org:80/foobar.html");
//! url.normalize_port();
//! assert_eq!(url.href(), "http://example.org/foobar.html");
//! ```

// Internal modules (not public API)
mod components;
mod context;
mod error;
mod fractions;
mod helpers;
mod normalize;
mod parser;
mod percent;
mod scheme;
mod url;

// Public API
pub use components::UrlParts;
pub use context::{Context, HostNormalizer, IdnaHostNormalizer};
pub use error::{Result, UrlError};
pub use url::Url;
