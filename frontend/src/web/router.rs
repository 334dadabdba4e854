//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 地址、会话、路由表三者任一变化，守卫都会重新解析，
//! 解析出的重定向一律以 replace 方式执行。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use vesta_panel::guard::{self, Resolution};
use vesta_panel::{ClickInput, Location, NavCommand, ResolvedView, RouteTable, Session, log_info};

/// 获取当前浏览器地址（路径 + 查询串）
fn current_location() -> Location {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Location::parse("/");
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Location::parse(&format!("{}{}", path, search))
}

/// 当前 History 条目携带的来源地址
fn current_origin() -> Option<String> {
    web_sys::window()?.history().ok()?.state().ok()?.as_string()
}

fn write_history_state(state: &JsValue, url: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = if replace {
        history.replace_state_with_url(state, "", Some(url))
    } else {
        history.push_state_with_url(state, "", Some(url))
    };
}

/// 路由器服务
///
/// 当前地址与来源地址是唯一写入点，解析结果由 Memo 派生。
/// 会话与路由表以信号形式注入，与认证系统解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    location: RwSignal<Location>,
    /// 进入当前条目时携带的来源地址，预览关闭时使用
    origin: RwSignal<Option<String>>,
    resolution: Memo<Resolution>,
}

impl RouterService {
    fn new(session: Signal<Session>, routes: Memo<RouteTable>) -> Self {
        let location = RwSignal::new(current_location());
        let origin = RwSignal::new(current_origin());

        let resolution = Memo::new(move |_| {
            routes.with(|table| {
                session.with(|session| {
                    location.with(|location| guard::resolve(table, session, location))
                })
            })
        });

        Self {
            location,
            origin,
            resolution,
        }
    }

    pub fn location(&self) -> RwSignal<Location> {
        self.location
    }

    pub fn origin(&self) -> RwSignal<Option<String>> {
        self.origin
    }

    pub fn resolution(&self) -> Memo<Resolution> {
        self.resolution
    }

    /// 当前地址的 URL 形式，作为下一次导航的来源
    pub fn current_url(&self) -> String {
        self.location.with_untracked(Location::to_url)
    }

    /// 普通链接导航 (pushState)
    pub fn navigate(&self, to: &str) {
        self.apply(NavCommand::push(to));
    }

    /// 执行一条导航命令
    ///
    /// 来源地址写入 History 状态，前进/后退回到该条目时仍然可用。
    pub fn apply(&self, cmd: NavCommand) {
        let state = cmd
            .origin
            .as_deref()
            .map(JsValue::from_str)
            .unwrap_or(JsValue::NULL);
        write_history_state(&state, &cmd.to, cmd.replace);

        self.origin.set(cmd.origin);
        self.location.set(Location::parse(&cmd.to));
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let location = self.location;
        let origin = self.origin;

        let closure = Closure::<dyn Fn()>::new(move || {
            origin.set(current_origin());
            location.set(current_location());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 执行守卫给出的重定向
    ///
    /// 会话检查返回前守卫给出 `Pending`，此时不做任何跳转。
    fn setup_guard_redirect(&self) {
        let router = *self;

        Effect::new(move |_| match router.resolution.get() {
            Resolution::Redirect { to, replace } => {
                log_info!("[Router] {} -> {}", router.current_url(), to);
                router.apply(NavCommand {
                    to,
                    replace,
                    origin: None,
                });
            }
            Resolution::Pending | Resolution::Render(_) => {}
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: Signal<Session>, routes: Memo<RouteTable>) -> RouterService {
    let router = RouterService::new(session, routes);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 会话信号
    session: Signal<Session>,
    /// 路由表，随服务列表重新生成
    routes: Memo<RouteTable>,
    children: Children,
) -> impl IntoView {
    provide_router(session, routes);

    children()
}

/// 路由出口组件
///
/// 只渲染守卫解析出的唯一视图；会话检查期间渲染 `pending`，重定向期间不渲染任何内容。
#[component]
pub fn RouterOutlet(
    matcher: fn(ResolvedView) -> AnyView,
    pending: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.resolution().get() {
        Resolution::Pending => pending(),
        Resolution::Render(view) => matcher(view),
        Resolution::Redirect { .. } => ().into_any(),
    }
}

/// 站内链接，点击时走 pushState 而不是整页跳转
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: web_sys::MouseEvent| {
        let click = ClickInput {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        };
        if !click.is_in_app() {
            return;
        }
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
