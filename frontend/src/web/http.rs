//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心层的 `HttpClient`。
//! 所有请求都携带 Cookie，会话凭据只由浏览器保管。

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use vesta_panel::{HttpClient, HttpRequest, HttpResponse, PanelError, Result};

/// 基于浏览器 fetch 的客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

impl BrowserHttpClient {
    fn build(req: &HttpRequest) -> Result<Request> {
        let headers = Headers::new()
            .map_err(|e| PanelError::invalid_input(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| PanelError::invalid_input(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(RequestCredentials::Include);

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| PanelError::invalid_input(format!("{:?}", e)))
    }

    async fn read_text(response: &Response) -> Result<String> {
        let promise = response
            .text()
            .map_err(|e| PanelError::serialization(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| PanelError::serialization(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| PanelError::serialization("响应体无法转换为字符串"))
    }
}

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let request = Self::build(&req)?;

        let window =
            web_sys::window().ok_or_else(|| PanelError::network("无法获取 window 对象"))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| PanelError::network(format!("{:?}", e)))?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            PanelError::serialization(format!("Response 类型转换失败: {:?}", e))
        })?;

        let body = Self::read_text(&response).await?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
