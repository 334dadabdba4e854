//! 文件预览
//!
//! 预览挂载期间启用 F10 关闭快捷键；关闭后回到进入预览时携带的来源地址。

use leptos::prelude::*;

use crate::auth::use_session;
use crate::web::hotkeys::use_hotkeys;
use crate::web::router::use_router;
use vesta_panel::preview::{self, PreviewKind, PreviewTarget};
use vesta_panel::{HotkeyDispatcher, NavCommand};

/// 原始文件内容的下载地址
fn raw_file_url(api_base: &str, path: &str) -> String {
    let url = vesta_panel::location::url_with_query(
        "/download/file/",
        &[("path", path), ("raw", "true")],
    );
    format!("{}{}", api_base, url)
}

#[component]
pub fn PreviewPage(target: Option<PreviewTarget>) -> impl IntoView {
    let router = use_router();
    let ctx = use_session();

    use_hotkeys(HotkeyDispatcher::preview());

    let on_close = move |_: leptos::ev::MouseEvent| {
        let to = router.origin().with_untracked(|origin| {
            router
                .location()
                .with_untracked(|loc| preview::close_target(origin.as_deref(), &loc.query))
        });
        router.apply(NavCommand::push(to));
    };

    let body = match target {
        None => view! {
            <p class="text-base-content/60">{move || ctx.session.with(|s| s.t("No file selected").to_string())}</p>
        }
        .into_any(),
        Some(target) => {
            let src = raw_file_url(&ctx.api_base(), &target.path);
            match target.kind {
                PreviewKind::Video => view! {
                    <video class="max-h-[80vh] mx-auto" src=src controls=true></video>
                }
                .into_any(),
                PreviewKind::Photo => view! {
                    <img class="max-h-[80vh] mx-auto" src=src alt=target.name.clone() />
                }
                .into_any(),
                PreviewKind::Editor => view! {
                    <iframe class="w-full h-[80vh] bg-base-100" src=src title=target.name.clone()></iframe>
                }
                .into_any(),
            }
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/80 flex flex-col p-4 z-40">
            <div class="flex justify-end mb-2">
                <button class="btn btn-sm" on:click=on_close>"✕ F10"</button>
            </div>
            <div class="flex-1 overflow-auto">{body}</div>
        </div>
    }
}
