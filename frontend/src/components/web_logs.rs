//! 站点日志视图
//!
//! 每次请求领取一张代际票据；刷新或卸载后迟到的响应只记录日志，不写入状态。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_session;
use crate::web::BrowserHttpClient;
use crate::web::router::{Link, use_router};
use vesta_panel::weblog::{WEB_LIST_PATH, WebLogQuery};
use vesta_panel::{NavCommand, PanelGateway, RequestGeneration, log_error, log_info, log_warn};

#[component]
pub fn WebLogsPage(query: Option<WebLogQuery>) -> impl IntoView {
    let router = use_router();

    let Some(query) = query else {
        Effect::new(move |_| {
            log_warn!("[WebLogs] Missing domain, back to {}", WEB_LIST_PATH);
            router.apply(NavCommand::replace(WEB_LIST_PATH));
        });
        return ().into_any();
    };

    view! { <WebLogViewer query=query /> }.into_any()
}

#[component]
fn WebLogViewer(query: WebLogQuery) -> impl IntoView {
    let ctx = use_session();

    let (loading, set_loading) = signal(true);
    let (content, set_content) = signal(String::new());
    let (prefix, set_prefix) = signal(String::new());

    let generation = RequestGeneration::new();
    on_cleanup({
        let generation = generation.clone();
        move || generation.invalidate()
    });

    let fetch = {
        let query = query.clone();
        move || {
            let ticket = generation.begin();
            let generation = generation.clone();
            let query = query.clone();
            set_loading.set(true);

            spawn_local(async move {
                let client = BrowserHttpClient;
                let base = ctx.api_base();
                let gateway = PanelGateway::new(&client, &base);
                let result = gateway.fetch_web_log(&query.domain, query.kind).await;

                if !generation.is_current(ticket) {
                    log_info!("[WebLogs] Dropped stale response for {}", query.domain);
                    return;
                }

                match result {
                    Ok(log) => {
                        set_prefix.set(log.prefix);
                        set_content.set(log.data);
                    }
                    Err(e) => {
                        log_error!("[WebLogs] Fetch failed for {}: {}", query.domain, e);
                        set_content.set(String::new());
                        if e.is_unauthorized() {
                            ctx.expire();
                        }
                    }
                }
                set_loading.set(false);
            });
        }
    };
    fetch();

    let api_base = ctx.api_base();
    let menu = ctx.session.with_untracked(|s| query.menu_items(s));
    let downloads = ctx.session.with_untracked(|s| query.download_items(s));
    let active_route = query.route(query.kind);

    view! {
        <div class="min-h-screen bg-base-200 p-6">
            <div class="flex flex-wrap items-center gap-2 mb-4">
                <h1 class="text-2xl font-bold mr-4">{query.domain.clone()}</h1>
                {menu
                    .into_iter()
                    .map(|item| {
                        let class = if item.route == active_route {
                            "btn btn-sm btn-primary"
                        } else {
                            "btn btn-sm btn-ghost"
                        };
                        view! { <Link to=item.route class=class>{item.label}</Link> }
                    })
                    .collect_view()}
                {downloads
                    .into_iter()
                    .map(|item| {
                        let href = format!("{}{}", api_base, item.route);
                        view! { <a href=href class="btn btn-sm btn-outline">{item.label}</a> }
                    })
                    .collect_view()}
                <button class="btn btn-sm" on:click=move |_| fetch() disabled=move || loading.get()>
                    "↻"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
            >
                <p class="font-mono text-xs text-base-content/60">{move || prefix.get()}</p>
                <pre class="bg-base-100 p-4 rounded text-xs overflow-x-auto" inner_html=move || content.get()></pre>
            </Show>
        </div>
    }
}
