//! Scoped configuration handles.
//!
//! [`ConfigScope`] replaces ambient, tree-propagated configuration with an
//! explicit handle: whoever holds a scope sees exactly the configuration it
//! carries. [`ConfigScope::provide`] derives a child handle with a new
//! configuration; code holding the parent handle is unaffected, so the
//! innermost handle a consumer receives always wins and overrides stay
//! structurally scoped instead of process-wide.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::caller::HttpClientCaller;
use crate::config::{HttpClientConfiguration, default_config};

const ROOT_SCOPE_NAME: &str = "HttpClientConfig";

/// An immutable handle to the active [`HttpClientConfiguration`].
pub struct ConfigScope<O = Value, D = Value> {
    name: Cow<'static, str>,
    config: Arc<HttpClientConfiguration<O, D>>,
}

impl<O, D> ConfigScope<O, D> {
    /// A scope carrying the unconfigured default pair, named
    /// `"HttpClientConfig"`.
    #[must_use]
    pub fn root() -> Self
    where
        D: Send + 'static,
    {
        Self {
            name: Cow::Borrowed(ROOT_SCOPE_NAME),
            config: Arc::new(default_config()),
        }
    }

    /// Derives a child scope carrying `config`.
    ///
    /// The provided pair fully replaces the active one for everything that
    /// receives the child handle; this scope and its other descendants keep
    /// observing their own configuration.
    #[must_use]
    pub fn provide(&self, config: HttpClientConfiguration<O, D>) -> Self {
        tracing::debug!(scope = %self.name, "providing subtree configuration");
        Self {
            name: self.name.clone(),
            config: Arc::new(config),
        }
    }

    /// Renames the scope for diagnostics.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// The scope's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configuration active at this scope.
    #[must_use]
    pub fn read(&self) -> &HttpClientConfiguration<O, D> {
        &self.config
    }

    /// Builds a reusable caller bound to `base_url`.
    ///
    /// The handler pair is captured from this scope once, here; later
    /// [`provide`](Self::provide) calls never affect an existing caller.
    #[must_use]
    pub fn invoker(&self, base_url: Option<&str>) -> HttpClientCaller<O, D> {
        HttpClientCaller::new(self.read(), base_url)
    }
}

impl<O, D> Clone for ConfigScope<O, D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<O, D> Default for ConfigScope<O, D>
where
    D: Send + 'static,
{
    fn default() -> Self {
        Self::root()
    }
}

impl<O, D> fmt::Debug for ConfigScope<O, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigScope")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<O, D> fmt::Display for ConfigScope<O, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::Value;

    use super::*;
    use crate::response::HttpClientResponse;

    fn fixed_status_config(status: StatusCode) -> HttpClientConfiguration<Value, Value> {
        HttpClientConfiguration::new(
            move |_url, _options| async move {
                Ok(HttpClientResponse {
                    status,
                    data: None,
                    error: None,
                })
            },
            |response| async move { Ok(response) },
        )
    }

    async fn observed_status(scope: &ConfigScope<Value, Value>) -> StatusCode {
        let response = (*scope.read().request_handler)(String::from("http://www.xyz.com"), Value::Null)
            .await
            .unwrap();
        response.status
    }

    #[test]
    fn test_root_scope_display_name() {
        let scope = ConfigScope::<Value, Value>::root();
        assert_eq!(scope.name(), "HttpClientConfig");
        assert_eq!(scope.to_string(), "HttpClientConfig");
    }

    #[tokio::test]
    async fn test_root_scope_reads_default_sentinel() {
        let scope = ConfigScope::<Value, Value>::root();
        assert_eq!(observed_status(&scope).await, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_provided_configuration_is_observed() {
        let scope = ConfigScope::root().provide(fixed_status_config(StatusCode::OK));
        assert_eq!(observed_status(&scope).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_innermost_provide_wins_and_outer_is_untouched() {
        let root = ConfigScope::root();
        let outer = root.provide(fixed_status_config(StatusCode::OK));
        let inner = outer.provide(fixed_status_config(StatusCode::IM_A_TEAPOT));

        assert_eq!(observed_status(&inner).await, StatusCode::IM_A_TEAPOT);
        assert_eq!(observed_status(&outer).await, StatusCode::OK);
        assert_eq!(observed_status(&root).await, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
