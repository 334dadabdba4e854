//! 原生 Web API 封装模块
//!
//! 直接基于 `web_sys` 的轻量级封装：History 路由、fetch、LocalStorage、键盘监听。

pub mod hotkeys;
mod http;
pub mod router;
mod storage;

pub use http::BrowserHttpClient;
pub use storage::{LocalStorage, on_storage_change};

/// 设置浏览器标签页标题
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// 滚动到页面顶部
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
