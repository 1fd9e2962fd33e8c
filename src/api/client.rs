use std::fmt;
use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;

use super::errors::{extract_detail, ApiError, ApiResult};
use crate::auth::Session;
use crate::config::ClientConfig;

/// Callback fired after a 401 response has cleared the session
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the AgentPut backend
///
/// Every call:
/// - attaches `Authorization: Bearer <token>` when the session holds a token
/// - on 401, logs the session out and fires the unauthorized hook before
///   returning [`ApiError::Unauthorized`] to the caller
/// - on any other failure, returns the error with the backend's `detail` message
/// - on success, returns only the decoded payload
///
/// No retries and no caching; the configured timeout fails a call outright.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use agentput_admin::api::ApiClient;
/// use agentput_admin::auth::{MemoryTokenStore, Session};
/// use agentput_admin::config::ClientConfig;
///
/// let session = Session::restore(Arc::new(MemoryTokenStore::new()));
/// let client = ApiClient::new(&ClientConfig::default(), session, Arc::new(|| {}))
///     .expect("valid client");
/// ```
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    /// Creates a client bound to `session`
    ///
    /// # Arguments
    /// * `config` - base URL and timeout
    /// * `session` - source of the bearer token, cleared on 401
    /// * `on_unauthorized` - invoked after every 401, typically a redirect to login
    pub fn new(
        config: &ClientConfig,
        session: Session,
        on_unauthorized: UnauthorizedHook,
    ) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            on_unauthorized,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::GET, path, |req| req).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(Method::GET, path, |req| req.query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, |req| req.json(body)).await
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send(Method::POST, path, |req| req).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, |req| req.json(body)).await
    }

    /// DELETE; whatever body the backend returns is discarded
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let _: IgnoredAny = self.send(Method::DELETE, path, |req| req).await?;
        Ok(())
    }

    async fn send<T, F>(&self, method: Method, path: &str, build: F) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        tracing::debug!(%method, path, "backend request");

        let mut request = build(self.http.request(method, self.url(path)));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = self.check_status(path, response).await?;
        decode(response).await
    }

    async fn check_status(&self, path: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // a failed body read just means no structured message
        let body = response.bytes().await.unwrap_or_default();
        let message = extract_detail(&body);

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path, "backend rejected credentials, ending session");
            self.session.logout();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized { message });
        }

        tracing::debug!(path, %status, "backend request failed");
        Err(ApiError::backend(status, message))
    }
}

/// `<collection>/<id>` with `id` percent-encoded as a single path segment
///
/// Empty ids and dot segments are rejected since they would resolve to a
/// different endpoint.
pub fn item_path(collection: &str, id: &str) -> ApiResult<String> {
    if matches!(id.trim(), "" | "." | "..") {
        return Err(ApiError::InvalidId(id.to_string()));
    }
    Ok(format!("{}/{}", collection, urlencoding::encode(id)))
}

/// Decodes the payload; an empty body decodes as JSON `null`
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.bytes().await?;
    if body.is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(&body)?)
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}
