use crate::{
    config::BackendConfig,
    error::{BackendError, Result},
};
use reqwest::{Client, Method, RequestBuilder};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};
use url::Url;

const APP_ID_HEADER: &str = "X-App-Id";

/// Long-lived handle to the hosted backend.
///
/// Built once at startup and handed to page content through the app context.
/// Clones share the same access token.
#[derive(Debug, Clone)]
pub struct BackendClient {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: BackendConfig,
    app_url: Url,
    client: Client,
    access_token: RwLock<Option<String>>,
}

#[derive(Default)]
pub struct BackendClientBuilder {
    config: BackendConfig,
    access_token: Option<String>,
}

impl BackendClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self
    }

    pub fn app_id(mut self, app_id: &str) -> Self {
        self.config.app_id = app_id.to_string();
        self
    }

    pub fn server_url(mut self, url: &str) -> Self {
        self.config.server_url = url.to_string();
        self
    }

    pub fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.config.requires_auth = requires_auth;
        self
    }

    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn build(self) -> Result<BackendClient> {
        let app_id = self.config.app_id.trim();
        if app_id.is_empty() {
            return Err(BackendError::NotConfigured);
        }

        // Exactly one trailing slash, so joining keeps any path prefix.
        let server_url = Url::parse(&format!(
            "{}/",
            self.config.server_url.trim_end_matches('/')
        ))?;
        let app_url = server_url.join(&format!("api/apps/{app_id}/"))?;

        info!(
            "Backend client ready for app {} (auth required: {})",
            app_id, self.config.requires_auth
        );

        Ok(BackendClient {
            inner: Arc::new(Inner {
                config: self.config,
                app_url,
                client: Client::new(),
                access_token: RwLock::new(self.access_token),
            }),
        })
    }
}

impl BackendClient {
    pub fn builder() -> BackendClientBuilder {
        BackendClientBuilder::new()
    }

    pub fn from_config(config: BackendConfig) -> Result<Self> {
        BackendClientBuilder::new().config(config).build()
    }

    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    pub fn app_id(&self) -> &str {
        &self.inner.config.app_id
    }

    pub fn requires_auth(&self) -> bool {
        self.inner.config.requires_auth
    }

    /// Root every request path is resolved against.
    pub fn app_url(&self) -> &Url {
        &self.inner.app_url
    }

    pub fn set_access_token(&self, token: Option<String>) {
        let mut slot = self
            .inner
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *slot = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner
            .access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Prepare a request against `path` under the app url.
    ///
    /// Fails with `InvalidPath` when `path` would leave the app url and with
    /// `Unauthenticated` when the backend requires auth and no token has been
    /// set. Nothing is sent until the caller does so.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.resolve(path)?;
        let token = self.access_token();

        if self.requires_auth() && token.is_none() {
            return Err(BackendError::Unauthenticated);
        }

        debug!("Preparing {} {}", method, url);

        let mut builder = self
            .inner
            .client
            .request(method, url)
            .header(APP_ID_HEADER, self.app_id());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Join `path` under the app url. Absolute urls, `..` segments and
    /// anything else that would leave the app url are refused.
    fn resolve(&self, path: &str) -> Result<Url> {
        let relative = path.trim_start_matches('/');
        let invalid = || BackendError::InvalidPath(path.to_string());

        if path.starts_with("//") || Url::parse(relative).is_ok() {
            return Err(invalid());
        }
        let route = relative.split(['?', '#']).next().unwrap_or_default();
        if route
            .split(['/', '\\'])
            .any(|segment| segment == ".." || segment.eq_ignore_ascii_case("%2e%2e"))
        {
            return Err(invalid());
        }

        let url = self.inner.app_url.join(relative)?;
        if !url.as_str().starts_with(self.inner.app_url.as_str()) {
            return Err(invalid());
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_client() -> BackendClient {
        BackendClient::builder()
            .app_id("app-1")
            .server_url("https://backend.example/")
            .requires_auth(false)
            .build()
            .unwrap()
    }

    #[test]
    fn app_url_is_scoped_to_the_app() {
        let client = open_client();
        assert_eq!(
            client.app_url().as_str(),
            "https://backend.example/api/apps/app-1/"
        );
    }

    #[test]
    fn default_builder_uses_site_config() {
        let client = BackendClient::from_config(BackendConfig::default()).unwrap();
        assert_eq!(client.app_id(), crate::config::DEFAULT_APP_ID);
        assert!(client.requires_auth());
        assert!(!client.is_authenticated());
    }

    #[test]
    fn empty_app_id_is_rejected() {
        let err = BackendClient::builder().app_id("  ").build().unwrap_err();
        assert!(matches!(err, BackendError::NotConfigured));
    }

    #[test]
    fn bad_server_url_is_rejected() {
        let err = BackendClient::builder()
            .server_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, BackendError::InvalidUrl(_)));
    }

    #[test]
    fn server_path_prefix_is_kept() {
        for server in ["https://host.example/base44", "https://host.example/base44/"] {
            let client = BackendClient::builder()
                .app_id("app-1")
                .server_url(server)
                .build()
                .unwrap();
            assert_eq!(
                client.app_url().as_str(),
                "https://host.example/base44/api/apps/app-1/"
            );
        }
    }

    #[test]
    fn requests_cannot_leave_the_app_url() {
        let client = BackendClient::builder()
            .app_id("app-1")
            .server_url("https://backend.example")
            .access_token("secret")
            .build()
            .unwrap();

        for path in [
            "https://evil.example/steal",
            "/https://evil.example/steal",
            "//evil.example/steal",
            "../../x",
            "entities/../../../x",
            "entities/%2e%2e/%2E%2E/x",
            "entities\\..\\..\\x",
        ] {
            let err = client.request(Method::GET, path).unwrap_err();
            assert!(
                matches!(err, BackendError::InvalidPath(ref p) if p == path),
                "{path} was accepted"
            );
        }
    }

    #[test]
    fn query_strings_stay_under_the_app_url() {
        let request = open_client()
            .request(Method::GET, "entities/Post?sort=-created_date")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://backend.example/api/apps/app-1/entities/Post?sort=-created_date"
        );
    }

    #[test]
    fn auth_required_without_token_refuses() {
        let client = BackendClient::builder().build().unwrap();
        let err = client.request(Method::GET, "entities/Volunteer").unwrap_err();
        assert!(matches!(err, BackendError::Unauthenticated));
    }

    #[test]
    fn token_is_attached_when_present() {
        let client = BackendClient::builder()
            .app_id("app-1")
            .server_url("https://backend.example")
            .access_token("t0k3n")
            .build()
            .unwrap();

        let request = client
            .request(Method::GET, "/entities/Volunteer")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://backend.example/api/apps/app-1/entities/Volunteer"
        );
        assert_eq!(request.headers()["authorization"], "Bearer t0k3n");
        assert_eq!(request.headers()[APP_ID_HEADER], "app-1");
    }

    #[test]
    fn clones_share_the_token() {
        let client = BackendClient::builder().build().unwrap();
        let page_copy = client.clone();

        client.set_access_token(Some("abc".to_string()));
        assert!(page_copy.is_authenticated());
        assert!(page_copy.request(Method::POST, "auth/me").is_ok());

        page_copy.set_access_token(None);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn open_backend_sends_without_token() {
        let request = open_client()
            .request(Method::GET, "public/posts")
            .unwrap()
            .build()
            .unwrap();
        assert!(request.headers().get("authorization").is_none());
    }
}
