//! HTTP 请求封装模块
//!
//! 基于 `gloo-net` 实现核心库的 [`HttpClient`]，所有请求都以
//! `credentials: "include"` 发出，让浏览器带上会话 Cookie。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use rolegate::{AuthError, AuthResult, HttpClient, HttpRequest, HttpResponse};
use rolegate_shared::protocol::HttpMethod;
use web_sys::RequestCredentials;

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct BrowserHttpClient;

impl BrowserHttpClient {
    fn builder(req: &HttpRequest) -> RequestBuilder {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        if req.with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }
        builder
    }
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> AuthResult<HttpResponse> {
        let builder = Self::builder(&req);

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| AuthError::Network(format!("请求构建失败: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        // 响应体读取失败不影响状态码的判断
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
