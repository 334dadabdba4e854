//! 通用视图：加载指示器、404、业务视图占位与文件管理器入口

use leptos::prelude::*;

use crate::auth::use_session;
use crate::web::router::{Link, use_router};
use vesta_panel::preview::{self, FILE_MANAGER_PATH};
use vesta_panel::{NavCommand, ResolvedView};

/// 会话检查返回前的全屏加载指示器
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let ctx = use_session();
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">{move || ctx.session.with(|s| s.t("Page not found").to_string())}</p>
            </div>
        </div>
    }
}

/// 查询参数转发给视图的值，按 (名称, 值) 列出
fn forwarded_params(view: &ResolvedView) -> Vec<(&'static str, String)> {
    match view {
        ResolvedView::AddDnsRecord { domain }
        | ResolvedView::DnsRecords { domain }
        | ResolvedView::AddMailAccount { domain }
        | ResolvedView::MailAccounts { domain } => vec![("domain", domain.clone())],
        ResolvedView::EditDnsRecord { domain, record_id } => {
            vec![("domain", domain.clone()), ("record_id", record_id.clone())]
        }
        ResolvedView::EditMailAccount { domain, account } => {
            vec![("domain", domain.clone()), ("account", account.clone())]
        }
        ResolvedView::BackupRestore { backup } => vec![("backup", backup.clone())],
        ResolvedView::Search { term } => vec![("q", term.clone())],
        ResolvedView::Service { name, .. } => vec![("service", name.clone())],
        _ => Vec::new(),
    }
}

/// 业务视图占位
///
/// 具体业务页面不在本层实现，这里展示解析结果与转发的参数。
#[component]
pub fn PlaceholderPage(view: ResolvedView) -> impl IntoView {
    let ctx = use_session();
    let title_key = view.title_key();
    let name = format!("{:?}", view.view_id());
    let params = forwarded_params(&view);

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{move || ctx.session.with(|s| s.t(title_key).to_string())}</h2>
                <p class="text-base-content/60 font-mono text-sm">{name}</p>
                <ul class="text-sm">
                    {params
                        .into_iter()
                        .map(|(key, value)| view! {
                            <li>
                                <span class="font-semibold">{key}</span>
                                ": "
                                <span class="font-mono">{value}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

/// 文件管理器
///
/// 打开预览时把当前目录作为来源随导航携带，关闭预览后回到这里。
#[component]
pub fn FileManagerPage() -> impl IntoView {
    let router = use_router();
    let ctx = use_session();

    let directory = move || {
        router
            .location()
            .with(|loc| loc.query.present("path").unwrap_or("/").to_string())
    };
    let (file_name, set_file_name) = signal(String::new());

    let on_open = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = file_name.get();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let dir = directory();
        let path = format!("{}/{}", dir.trim_end_matches('/'), name);
        router.apply(NavCommand::push(preview::preview_url(&path)).with_origin(router.current_url()));
    };

    view! {
        <div class="min-h-screen bg-base-200 p-6">
            <div class="flex items-center gap-4 mb-4">
                <h1 class="text-2xl font-bold">{move || ctx.session.with(|s| s.t("File Manager").to_string())}</h1>
                <span class="font-mono text-sm">{directory}</span>
                <button
                    class="btn btn-sm btn-ghost"
                    on:click=move |_| {
                        router.navigate(&preview::directory_url(preview::parent_directory(&directory())))
                    }
                >
                    ".."
                </button>
                <Link to=FILE_MANAGER_PATH class="btn btn-sm btn-ghost">"~"</Link>
            </div>
            <form class="join" on:submit=on_open>
                <input
                    class="input input-bordered join-item"
                    placeholder="index.html"
                    on:input=move |ev| set_file_name.set(event_target_value(&ev))
                    prop:value=file_name
                />
                <button class="btn btn-primary join-item">{move || ctx.session.with(|s| s.t("Open").to_string())}</button>
            </form>
        </div>
    }
}
