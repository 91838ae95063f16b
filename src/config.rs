//! The pluggable handler pair and its unconfigured default.
//!
//! A [`HttpClientConfiguration`] bundles the two functions the call path
//! delegates to. It is plain data: constructed once, replaced wholesale when
//! overridden, never mutated in place. Both fields are required, so a
//! provided configuration always replaces the full pair — there is no
//! merging of partial configurations.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use serde_json::Value;

use crate::error::HttpClientError;
use crate::response::HttpClientResponse;

/// The boxed future returned by both handler kinds.
pub type HandlerFuture<D> = BoxFuture<'static, Result<HttpClientResponse<D>, HttpClientError>>;

/// Handles and performs the request.
///
/// Any HTTP library can back this since it only receives a URL and an opaque
/// options value `O`, forwarded verbatim from the per-call options.
pub type RequestHandler<O = Value, D = Value> =
    Arc<dyn Fn(String, O) -> HandlerFuture<D> + Send + Sync>;

/// Handles response behavior, such as reacting to 4xx and 5xx statuses,
/// before the response reaches the caller.
pub type ResponseHandler<D = Value> =
    Arc<dyn Fn(HttpClientResponse<D>) -> HandlerFuture<D> + Send + Sync>;

/// The pair of pluggable functions the call path delegates to.
pub struct HttpClientConfiguration<O = Value, D = Value> {
    /// Performs the actual request.
    pub request_handler: RequestHandler<O, D>,

    /// Post-processes the completed response.
    pub response_handler: ResponseHandler<D>,
}

impl<O, D> HttpClientConfiguration<O, D> {
    /// Builds a configuration from two async closures, boxing their futures.
    pub fn new<Req, ReqFut, Res, ResFut>(request_handler: Req, response_handler: Res) -> Self
    where
        Req: Fn(String, O) -> ReqFut + Send + Sync + 'static,
        ReqFut: Future<Output = Result<HttpClientResponse<D>, HttpClientError>> + Send + 'static,
        Res: Fn(HttpClientResponse<D>) -> ResFut + Send + Sync + 'static,
        ResFut: Future<Output = Result<HttpClientResponse<D>, HttpClientError>> + Send + 'static,
    {
        Self {
            request_handler: Arc::new(move |url, options| request_handler(url, options).boxed()),
            response_handler: Arc::new(move |response| response_handler(response).boxed()),
        }
    }
}

impl<O, D> Clone for HttpClientConfiguration<O, D> {
    fn clone(&self) -> Self {
        Self {
            request_handler: Arc::clone(&self.request_handler),
            response_handler: Arc::clone(&self.response_handler),
        }
    }
}

impl<O, D> std::fmt::Debug for HttpClientConfiguration<O, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClientConfiguration")
            .finish_non_exhaustive()
    }
}

impl<O, D> Default for HttpClientConfiguration<O, D>
where
    D: Send + 'static,
{
    fn default() -> Self {
        default_config()
    }
}

/// The unconfigured handler pair.
///
/// Both handlers ignore their input and resolve to the sentinel
/// [`HttpClientResponse::default`], so an application that forgets to provide
/// a configuration observes a recognizable soft failure instead of a panic
/// or a hang.
#[must_use]
pub fn default_config<O, D>() -> HttpClientConfiguration<O, D>
where
    D: Send + 'static,
{
    HttpClientConfiguration {
        request_handler: Arc::new(|_url, _options| {
            future::ready(Ok(HttpClientResponse::default())).boxed()
        }),
        response_handler: Arc::new(|_response| {
            future::ready(Ok(HttpClientResponse::default())).boxed()
        }),
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::{Value, json};

    use super::*;

    #[tokio::test]
    async fn test_default_request_handler_resolves_to_sentinel() {
        let config = default_config::<Value, Value>();
        let response = (*config.request_handler)("http://www.xyz.com".into(), Value::Null)
            .await
            .unwrap();
        assert_eq!(response, HttpClientResponse::default());
    }

    #[tokio::test]
    async fn test_default_response_handler_ignores_its_input() {
        let config = default_config::<Value, Value>();
        let input = HttpClientResponse {
            status: StatusCode::CONTINUE,
            data: Some(json!({})),
            error: None,
        };
        let response = (*config.response_handler)(input).await.unwrap();
        assert_eq!(response, HttpClientResponse::default());
    }
}
