//! LocalStorage 封装模块
//!
//! 面板配置 (`vesta_api_base`, `vesta_services`) 的读取来源。

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取字符串值，键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }
}

/// 监听其他标签页对 LocalStorage 的修改
///
/// 监听器在页面生命周期内一直存在，闭包被泄漏。
pub fn on_storage_change<F>(callback: F)
where
    F: Fn() + 'static,
{
    use wasm_bindgen::prelude::*;

    let closure = Closure::<dyn Fn()>::new(callback);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
