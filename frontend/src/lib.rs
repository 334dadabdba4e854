//! Vesta 控制面板前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `vesta_panel`: 路由表、守卫、视图选择、快捷键映射（不依赖 DOM）
//! - `web::router`: 路由服务（History API 引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod login;
    pub mod preview;
    pub mod shell;
    pub mod views;
    pub mod web_logs;
}
pub(crate) mod web;

use crate::auth::{SessionContext, init_session};
use crate::components::login::LoginPage;
use crate::components::preview::PreviewPage;
use crate::components::shell::PanelShell;
use crate::components::views::{FileManagerPage, LoadingScreen, NotFoundPage, PlaceholderPage};
use crate::components::web_logs::WebLogsPage;

use leptos::prelude::*;

use vesta_panel::{Layout, PanelConfig, ResolvedView, RouteTable, ViewId, log_info};
use web::LocalStorage;
use web::router::{Router, RouterOutlet, use_router};

/// 视图匹配函数
///
/// 根据守卫解析出的视图返回对应的组件，面板视图包裹在外壳中。
fn view_matcher(view: ResolvedView) -> AnyView {
    let layout = view.layout();
    let page = match view {
        ResolvedView::Page(ViewId::Login) => view! { <LoginPage /> }.into_any(),
        ResolvedView::Page(ViewId::NotFound) => view! { <NotFoundPage /> }.into_any(),
        ResolvedView::Page(ViewId::FileManager) => view! { <FileManagerPage /> }.into_any(),
        ResolvedView::WebLogs(query) => view! { <WebLogsPage query=query /> }.into_any(),
        ResolvedView::Preview(target) => view! { <PreviewPage target=target /> }.into_any(),
        other => view! { <PlaceholderPage view=other /> }.into_any(),
    };

    match layout {
        Layout::Panel => view! { <PanelShell>{page}</PanelShell> }.into_any(),
        Layout::Bare => page,
    }
}

fn loading_view() -> AnyView {
    view! { <LoadingScreen /> }.into_any()
}

/// 页面标题随解析出的视图与本地化字符串更新
#[component]
fn DocumentTitle() -> impl IntoView {
    let router = use_router();
    let ctx = auth::use_session();

    Effect::new(move |_| {
        let title = router.resolution().with(|resolution| {
            resolution
                .view()
                .map(|view| ctx.session.with(|s| s.page_title(view.title_key())))
        });
        if let Some(title) = title {
            web::set_document_title(&title);
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取配置（LocalStorage 覆盖默认值）
    let config = PanelConfig::from_lookup(LocalStorage::get);

    // 2. 创建会话上下文并发起会话检查
    let session_ctx = SessionContext::new(config.api_base_url);
    provide_context(session_ctx);
    init_session(&session_ctx);

    // 3. 路由表由服务列表派生，服务列表在其他标签页修改配置后刷新
    let services = RwSignal::new(config.services);
    let routes = Memo::new(move |_| services.with(|s| RouteTable::new(s.as_slice())));
    web::on_storage_change(move || {
        let latest = PanelConfig::from_lookup(LocalStorage::get).services;
        if services.with_untracked(|current| *current != latest) {
            log_info!("[Router] Service list changed, rebuilding routes");
            services.set(latest);
        }
    });

    let session = session_ctx.session_signal();

    view! {
        <Router session=session routes=routes>
            <DocumentTitle />
            <RouterOutlet matcher=view_matcher pending=loading_view />
        </Router>
    }
}
