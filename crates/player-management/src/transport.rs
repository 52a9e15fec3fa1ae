//! HTTP transport seam.
//!
//! The client hands a fully built [`RequestDescriptor`] to a [`Transport`]
//! and returns whatever comes back. The default transport wraps
//! `reqwest::Client`; tests inject their own.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::Error;
use crate::api::request::RequestDescriptor;

/// Executes one HTTP request.
///
/// Implementations report only transport-level failures as `Err`. An HTTP
/// response of any status is `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse, Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse, Error> {
        (**self).execute(request).await
    }
}

/// Raw HTTP response returned by every client operation.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Turn a non-2xx response into [`Error::Api`].
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_success() {
            return Ok(self);
        }
        Err(Error::Api {
            status: self.status.as_u16(),
            message: self.body,
        })
    }

    async fn from_reqwest(resp: reqwest::Response) -> Result<Self, Error> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }
}

/// Default transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(accept_invalid_certs: bool) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;
        Ok(Self { http })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RequestDescriptor) -> Result<ApiResponse, Error> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let resp = builder.send().await?;
        ApiResponse::from_reqwest(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_for_status_passes_success() {
        let resp = ApiResponse::new(StatusCode::OK, "{}");
        assert!(resp.is_success());
        assert!(resp.error_for_status().is_ok());
    }

    #[test]
    fn test_error_for_status_classifies_not_found() {
        let resp = ApiResponse::new(StatusCode::NOT_FOUND, r#"{"error_code":"NOT_FOUND"}"#);
        match resp.error_for_status() {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 404);
                assert!(message.contains("NOT_FOUND"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_json_body() {
        let resp = ApiResponse::new(StatusCode::OK, r#"{"items":[]}"#);
        let value: serde_json::Value = resp.json().unwrap();
        assert_eq!(value["items"], serde_json::json!([]));
    }
}
