//! Request construction, dispatch and response classification
//!
//! Every resource wrapper goes through [`Transport`]: paths are resolved
//! against the tenant base URL `<host>/api/v1/<tenantAlias>/`, requests carry
//! basic auth and JSON headers, and non-2xx responses are turned into
//! [`RestError`] values.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};
use saasquatch_auth::Credentials;
use saasquatch_types::ErrorResponse;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::Write;
use tracing::debug;
use url::Url;

use crate::error::{RestError, RestResult};

/// Default API host
pub const DEFAULT_HOST: &str = "https://app.referralsaasquatch.com";

const JSON: &str = "application/json";

/// Authenticated HTTP transport scoped to one tenant
#[derive(Clone)]
pub struct Transport {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl Transport {
    /// Create a transport for `host` and the tenant in `credentials`
    pub fn new(http: Client, host: &str, credentials: Credentials) -> RestResult<Self> {
        let base_url = tenant_base_url(host, credentials.tenant_alias())?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Tenant-scoped base URL, always ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the tenant credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build an authenticated request
    ///
    /// `path` is relative to the base URL and should not start with `/`.
    /// When `body` is given it is JSON encoded as the request body.
    pub fn new_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> RestResult<Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;
        let (username, password) = self.credentials.basic_auth();

        let mut builder = self
            .http
            .request(method, url)
            .basic_auth(username, Some(password))
            .header(ACCEPT, JSON)
            .header(CONTENT_TYPE, JSON);

        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Send a request and decode the JSON response
    ///
    /// An empty 2xx body, or a literal `null`, yields `T::default()`.
    pub async fn execute<T>(&self, request: Request) -> RestResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send(request).await?;
        let body = response.bytes().await?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        let decoded: Option<T> = serde_json::from_slice(&body)?;
        Ok(decoded.unwrap_or_default())
    }

    /// Send a request and copy the raw response body into `writer`
    ///
    /// Returns the number of bytes written. The body is not decoded.
    pub async fn execute_raw<W>(&self, request: Request, writer: &mut W) -> RestResult<u64>
    where
        W: Write + ?Sized,
    {
        let mut response = self.send(request).await?;
        let mut written = 0u64;

        while let Some(chunk) = response.chunk().await? {
            writer.write_all(&chunk)?;
            written += chunk.len() as u64;
        }

        Ok(written)
    }

    /// GET `path` and decode the response
    pub async fn get<T>(&self, path: &str) -> RestResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let request = self.new_request(Method::GET, path, None::<&()>)?;
        self.execute(request).await
    }

    /// POST `body` as JSON to `path` and decode the response
    pub async fn post<B, T>(&self, path: &str, body: &B) -> RestResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let request = self.new_request(Method::POST, path, Some(body))?;
        self.execute(request).await
    }

    async fn send(&self, request: Request) -> RestResult<Response> {
        let method = request.method().clone();
        debug!(%method, path = request.url().path(), "Sending request");

        let response = self.http.execute(request).await?;
        check_response(&method, response).await
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Check a response for API errors
///
/// 2xx responses pass through untouched. Otherwise the body is read and, if
/// it decodes as an [`ErrorResponse`], its code picks the error variant; a body
/// that does not decode still yields a structured error carrying the status.
pub async fn check_response(method: &Method, response: Response) -> RestResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.bytes().await.unwrap_or_default();
    let payload: ErrorResponse = serde_json::from_slice(&body).unwrap_or_default();

    debug!(
        %method,
        status = status.as_u16(),
        code = %payload.api_error_code,
        "API returned an error"
    );

    Err(RestError::from_error_response(
        method.clone(),
        url,
        status.as_u16(),
        payload,
    ))
}

/// Append `options` to `path` as a query string
///
/// Leaves `path` unchanged when every option is unset.
pub fn with_query<Q>(path: &str, options: &Q) -> RestResult<String>
where
    Q: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(options)
        .map_err(|e| RestError::InvalidParameter(e.to_string()))?;

    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}

/// Percent-encode a caller-supplied value for use as one path segment
///
/// Empty values and dot segments are rejected, since URL resolution would
/// collapse them into a different path.
pub fn segment(value: &str) -> RestResult<String> {
    if matches!(value, "" | "." | "..") {
        return Err(RestError::InvalidParameter(format!(
            "invalid path segment {:?}",
            value
        )));
    }

    Ok(urlencoding::encode(value).into_owned())
}

fn tenant_base_url(host: &str, tenant_alias: &str) -> RestResult<Url> {
    let mut root = Url::parse(host)?;
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }

    Ok(root.join(&format!("api/v1/{}/", segment(tenant_alias)?))?)
}
