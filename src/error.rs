/// Errors raised by the URL value type.
///
/// Construction from an unsupported dynamic input kind is the only hard
/// failure; malformed URL text and empty setter arguments degrade
/// gracefully instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// Construction from an input that is not a string, parts record,
    /// URL instance, or absent argument
    InvalidArgument,
}

impl core::fmt::Display for UrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidArgument => "Invalid argument: expected a string, parts record or Url",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for UrlError {}

/// Result type for URL construction
pub type Result<T> = core::result::Result<T, UrlError>;
