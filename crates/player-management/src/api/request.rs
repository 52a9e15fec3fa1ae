use std::time::Instant;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;

use super::*;
use crate::transport::ApiResponse;

/// A fully resolved outbound request. Built fresh for every call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    /// Equivalent curl command, with sensitive header values masked.
    pub fn to_curl(&self) -> String {
        let mut cmd = format!("curl -X {}", self.method);
        for (name, value) in &self.headers {
            let shown = if value.is_sensitive() {
                "***"
            } else {
                value.to_str().unwrap_or("<binary>")
            };
            cmd.push_str(&format!(" -H '{name}: {shown}'"));
        }
        if let Some(body) = &self.body {
            cmd.push_str(&format!(" --data '{body}'"));
        }
        cmd.push_str(&format!(" '{}'", self.url));
        cmd
    }
}

impl<T: Transport> PlayerManagementClient<T> {
    /// Build a read request: custom headers plus the auth header.
    pub(super) fn read_request(&self, method: Method, path: &str) -> RequestDescriptor {
        let mut headers = self
            .custom_headers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        headers.insert(AUTHORIZATION, self.auth_header.clone());

        RequestDescriptor {
            method,
            url: format!("{}{path}", self.account_url),
            headers,
            body: None,
        }
    }

    /// Build a write request: a read request plus the JSON content type and body.
    pub(super) fn write_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> RequestDescriptor {
        let mut request = self.read_request(method, path);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.body = body;
        request
    }

    /// Send a request through the transport, tracing the curl form and elapsed time.
    pub(super) async fn dispatch(
        &self,
        operation: &'static str,
        request: RequestDescriptor,
    ) -> Result<ApiResponse, Error> {
        tracing::debug!(operation, curl = %request.to_curl(), "Sending request");
        let started = Instant::now();

        let result = self.transport.execute(request).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(resp) => tracing::debug!(
                operation,
                status = resp.status.as_u16(),
                elapsed_ms,
                "Response received"
            ),
            Err(e) => tracing::debug!(operation, elapsed_ms, error = %e, "Request failed"),
        }
        result
    }

    pub(super) async fn get(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = self.read_request(Method::GET, path);
        self.dispatch(operation, request).await
    }

    pub(super) async fn delete(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<ApiResponse, Error> {
        let request = self.read_request(Method::DELETE, path);
        self.dispatch(operation, request).await
    }

    /// Execute a write verb with an optional JSON body.
    pub(super) async fn write(
        &self,
        operation: &'static str,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<ApiResponse, Error> {
        let body = body.map(serde_json::to_value).transpose()?;
        let request = self.write_request(method, path, body);
        self.dispatch(operation, request).await
    }
}
