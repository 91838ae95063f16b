//! Error types raised by the call path.
//!
//! Handler failures are carried verbatim through [`BoxedError`]; the only
//! locally synthesized failure is [`HttpClientError::EmptyUrl`]. There is no
//! retry or recovery at this layer.

use snafu::Snafu;

/// A boxed handler error that can be used without type parameters.
#[derive(Debug, Snafu)]
#[snafu(transparent)]
pub struct BoxedError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl BoxedError {
    /// Create a new boxed error from any error type.
    pub fn from_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

/// Errors surfaced by [`HttpClientCaller::call`](crate::HttpClientCaller::call).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum HttpClientError {
    /// The resolved URL was empty after trimming and base/path combination.
    /// Raised before either handler executes.
    #[snafu(display("URL should not be empty!"))]
    EmptyUrl,

    /// A failure raised by the active request or response handler,
    /// propagated unmodified.
    #[snafu(transparent)]
    Handler {
        /// The underlying handler error.
        source: BoxedError,
    },
}

impl HttpClientError {
    /// Convenience for handler implementations: box an arbitrary error into
    /// the [`Handler`](Self::Handler) variant.
    pub fn from_err<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        BoxedError::from_err(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Snafu)]
    #[snafu(display("connection reset"))]
    struct TransportError;

    #[test]
    fn test_empty_url_message() {
        assert_eq!(HttpClientError::EmptyUrl.to_string(), "URL should not be empty!");
    }

    #[test]
    fn test_handler_error_displays_verbatim() {
        let err = HttpClientError::from_err(TransportError);
        assert_eq!(err.to_string(), "connection reset");
        assert!(matches!(err, HttpClientError::Handler { .. }));
    }
}
