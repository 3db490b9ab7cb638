//! HTTP client for the Shade API.
//!
//! Two hosts are involved: the main API host, authenticated with the API key
//! sent verbatim as `Authorization`, and the filesystem host, authenticated
//! with a short-lived bearer token fetched per drive from the API host. The
//! lookup providers, folder and asset operations and the multipart upload
//! orchestrator are methods on [`ApiClient`] defined in the sibling modules.

pub mod asset;
pub mod folder;
pub mod lookup;
pub mod upload;

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shade_core::{ShadeConfig, ShadeError, ShadeResult};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP client for the Shade API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    api_base_url: String,
    fs_base_url: String,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.api_base_url)
            .field("fs_base_url", &self.fs_base_url)
            .finish()
    }
}

impl ApiClient {
    pub fn new(config: ShadeConfig) -> ShadeResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ShadeError::transport("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            fs_base_url: config.fs_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Create client from environment: SHADE_API_KEY, SHADE_API_URL, SHADE_FS_URL.
    pub fn from_env() -> ShadeResult<Self> {
        Self::new(ShadeConfig::from_env()?)
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn fs_base_url(&self) -> &str {
        &self.fs_base_url
    }

    /// URL on the API host. `path` may or may not start with a slash.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// URL on the filesystem host.
    pub fn build_fs_url(&self, path: &str) -> String {
        format!("{}/{}", self.fs_base_url, path.trim_start_matches('/'))
    }

    /// Authenticated call to the API host returning the parsed body.
    ///
    /// Non-JSON bodies come back as a JSON string and an empty body as `null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> ShadeResult<Value> {
        let url = self.build_url(path);
        tracing::debug!(method = %method, path = %path, "Sending Shade API request");

        let mut request = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.api_key.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShadeError::transport("Failed to send request", e))?;

        read_json(response).await
    }

    /// GET on the API host, deserialized into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ShadeResult<T> {
        let value = self.request(Method::GET, path, None, query).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST a JSON body to the API host and deserialize the response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ShadeResult<T> {
        let body = serde_json::to_value(body)?;
        let value = self.request(Method::POST, path, Some(body), &[]).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Call to the filesystem host with a bearer token. The API key is never sent there.
    pub async fn fs_request(
        &self,
        method: Method,
        path: &str,
        fs_token: &str,
        body: Option<Value>,
        query: &[(&str, String)],
    ) -> ShadeResult<Value> {
        let url = self.build_fs_url(path);
        tracing::debug!(method = %method, path = %path, "Sending Shade filesystem request");

        let mut request = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", fs_token));

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(serde_json::to_vec(&body)?);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ShadeError::transport("Failed to send filesystem request", e))?;

        read_json(response).await
    }

    /// Short-lived bearer token for the filesystem host, scoped to one drive.
    pub async fn fetch_fs_token(&self, drive_id: &str) -> ShadeResult<String> {
        let path = format!("workspaces/drives/{}/shade-fs-token", encode(drive_id));
        let value = self.request(Method::GET, &path, None, &[]).await?;

        match value {
            Value::String(token) if !token.is_empty() => Ok(token),
            Value::Object(ref map) => map
                .get("token")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .ok_or_else(|| {
                    ShadeError::Decode("Filesystem token response has no token".to_string())
                }),
            _ => Err(ShadeError::Decode(
                "Filesystem token response has no token".to_string(),
            )),
        }
    }

    /// PUT raw bytes to a presigned URL and return the `ETag` response header.
    pub async fn put_part(&self, url: &str, chunk: Bytes) -> ShadeResult<String> {
        let response = self
            .client
            .put(url)
            .header(CONTENT_LENGTH, chunk.len().to_string())
            .body(chunk)
            .send()
            .await
            .map_err(|e| ShadeError::transport("Failed to upload part", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ShadeError::Remote {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ShadeError::validation("No ETag returned from presigned URL upload"))
    }

    /// Check that the API key is accepted (`GET /workspaces`).
    pub async fn test_credentials(&self) -> ShadeResult<()> {
        self.request(Method::GET, "workspaces", None, &[]).await?;
        Ok(())
    }
}

/// Percent-encode one path segment.
pub(crate) fn encode(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}

async fn read_json(response: Response) -> ShadeResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ShadeError::Remote {
            status: status.as_u16(),
            body: error_text,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| ShadeError::transport("Failed to read response body", e))?;

    Ok(parse_body(&text))
}

fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(
            ShadeConfig::new("key")
                .with_api_base_url("http://api.test/")
                .with_fs_base_url("http://fs.test"),
        )
        .unwrap()
    }

    #[test]
    fn test_build_urls() {
        let client = client();
        assert_eq!(client.build_url("workspaces"), "http://api.test/workspaces");
        assert_eq!(client.build_url("/workspaces"), "http://api.test/workspaces");
        assert_eq!(
            client.build_fs_url("driveA/fs/listdir"),
            "http://fs.test/driveA/fs/listdir"
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("  \n"), Value::Null);
        assert_eq!(parse_body("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(parse_body("\"tok\""), json!("tok"));
        assert_eq!(
            parse_body("WEBVTT\n\n00:00.000 --> 00:01.000\nhi"),
            json!("WEBVTT\n\n00:00.000 --> 00:01.000\nhi")
        );
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = ApiClient::new(ShadeConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ShadeError::Config(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = ApiClient::new(ShadeConfig::new("secret-key-value")).unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-key-value"));
        assert!(rendered.contains("https://api.shade.inc"));
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode("drive 1/x"), "drive%201%2Fx");
        assert_eq!(encode("plain-id_123"), "plain-id_123");
    }
}
