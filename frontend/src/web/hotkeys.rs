//! 键盘监听订阅
//!
//! `KeyListener` 在 document 上挂载 keyup 监听，被 drop 时自动移除。
//! 组件通过 `use_hotkeys` 订阅，组件卸载即取消订阅。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use super::router::use_router;
use vesta_panel::{HotkeyContext, HotkeyDispatcher, KeyInput, log_info, log_warn};

/// 当前是否有文本输入框持有焦点
fn text_field_focused() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map(|el| matches!(el.tag_name().to_ascii_uppercase().as_str(), "INPUT" | "TEXTAREA"))
        .unwrap_or(false)
}

/// 把浏览器键盘事件转换为平台无关的按键描述
pub fn key_input(ev: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key_code: ev.key_code(),
        ctrl: ev.ctrl_key(),
        alt: ev.alt_key(),
        meta: ev.meta_key(),
        text_focused: text_field_focused(),
    }
}

/// keyup 监听订阅
pub struct KeyListener {
    closure: Closure<dyn Fn(KeyboardEvent)>,
}

impl KeyListener {
    /// 挂载监听，document 不可用时返回 `None`
    pub fn subscribe<F>(callback: F) -> Option<Self>
    where
        F: Fn(KeyInput) + 'static,
    {
        let closure =
            Closure::<dyn Fn(KeyboardEvent)>::new(move |ev: KeyboardEvent| callback(key_input(&ev)));

        let document = web_sys::window()?.document()?;
        document
            .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { closure })
    }

    pub fn unsubscribe(&self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("keyup", self.closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// 在当前组件的生命周期内启用一组快捷键
pub fn use_hotkeys(dispatcher: HotkeyDispatcher) {
    let router = use_router();

    let listener = KeyListener::subscribe(move |input| {
        let cmd = router.location().with_untracked(|location| {
            router.origin().with_untracked(|origin| {
                dispatcher.dispatch(&input, &HotkeyContext::new(location, origin.as_deref()))
            })
        });
        if let Some(cmd) = cmd {
            log_info!("[Hotkeys] key {} -> {}", input.key_code, cmd.to);
            router.apply(cmd);
        }
    });

    if listener.is_none() {
        log_warn!("[Hotkeys] document unavailable, hotkeys disabled");
    }

    let stored = StoredValue::new_local(listener);
    on_cleanup(move || stored.dispose());
}
