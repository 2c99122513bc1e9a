use std::env;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Stable API surface.
pub const STABLE_BASE_URL: &str = "https://api.clockify.me/api/v1";

/// Experimental API surface; hosts endpoints not yet promoted to the
/// stable surface (currently workspace and project deletion).
pub const EXPERIMENTAL_BASE_URL: &str = "https://api.clockify.me/api";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Environment variable read by [`ClockifyClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "CAPI_KEY";

/// Which of the two base URLs an operation is dispatched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiSurface {
    Stable,
    Experimental,
}

/// Client for the Clockify REST API.
///
/// Holds one pre-configured HTTP client carrying the API key header and the
/// two base URLs. Immutable after construction; operations take `&self` and
/// may run concurrently.
///
/// # Examples
///
/// ```no_run
/// # async fn run() -> clockify_rs::Result<()> {
/// use clockify_rs::ClockifyClient;
///
/// let client = ClockifyClient::from_env()?;
/// let workspaces = client.get_workspaces().await?;
/// println!("{:?}", workspaces.data);
/// # Ok(())
/// # }
/// ```
pub struct ClockifyClient {
    http: reqwest::Client,
    base_url: String,
    experimental_url: String,
}

impl ClockifyClient {
    /// Returns a new client using the given API key.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_urls(api_key, STABLE_BASE_URL, EXPERIMENTAL_BASE_URL)
    }

    /// Returns a new client with the API key taken from the `CAPI_KEY`
    /// environment variable.
    ///
    /// Fails with [`Error::MissingApiKey`] when the variable is unset or
    /// empty; no transport handle is created in that case.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV_VAR).map_err(|_| Error::MissingApiKey)?;
        Self::new(&api_key)
    }

    /// Returns a new client bound to caller-chosen base URLs.
    ///
    /// Production callers want [`ClockifyClient::new`]; this constructor
    /// exists so the client can be pointed at a local test server.
    pub fn with_base_urls(api_key: &str, base_url: &str, experimental_url: &str) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut api_key = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            experimental_url: experimental_url.trim_end_matches('/').to_string(),
        })
    }

    /// Starts a request against the given surface. `path` is relative to
    /// the surface's base URL, IDs already substituted verbatim.
    pub(crate) fn request(&self, method: Method, surface: ApiSurface, path: &str) -> RequestBuilder {
        let base = match surface {
            ApiSurface::Stable => &self.base_url,
            ApiSurface::Experimental => &self.experimental_url,
        };
        self.http.request(method, format!("{}/{}", base, path))
    }

    /// Sends a built request and wraps the response.
    ///
    /// Never fails on a non-2xx status; the status is data for the caller.
    /// The payload is decoded only for a successful status with a non-empty
    /// body, and a body that fails to decode leaves `data` as `None` with
    /// the raw text preserved.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} -> {}", response.url(), status);

        let headers = response.headers().clone();
        let body = response.text().await?;
        let data = if status.is_success() && !body.is_empty() {
            serde_json::from_str(&body).ok()
        } else {
            None
        };

        Ok(ApiResponse {
            status,
            headers,
            data,
            body,
        })
    }
}

/// Response wrapper returned by every operation.
///
/// Carries the HTTP status and raw metadata alongside the decoded payload,
/// since a caller may need the status even on a 2xx with an empty body.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// HTTP status of the exchange.
    pub status: StatusCode,
    /// Response headers, verbatim.
    pub headers: HeaderMap,
    /// Decoded payload; `None` on non-2xx, empty, or undecodable bodies.
    pub data: Option<T>,
    /// Raw response body text.
    pub body: String,
}

impl<T> ApiResponse<T> {
    /// Whether the remote service reported success (2xx).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Query string under construction.
///
/// `set` always attaches the parameter; `set_opt` omits it entirely when
/// the value is `None` rather than sending it empty. Names are the fixed
/// kebab-case wire spellings.
#[derive(Debug, Default)]
pub(crate) struct Query(Vec<(&'static str, String)>);

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, name: &'static str, value: impl ToString) {
        self.0.push((name, value.to_string()));
    }

    pub(crate) fn set_opt<T: ToString>(&mut self, name: &'static str, value: &Option<T>) {
        if let Some(value) = value {
            self.set(name, value.to_string());
        }
    }

    pub(crate) fn apply(self, request: RequestBuilder) -> RequestBuilder {
        if self.0.is_empty() {
            request
        } else {
            request.query(&self.0)
        }
    }
}
