//! 已认证面板外壳
//!
//! 主导航、搜索框、注销按钮、快捷键帮助浮层与“回到顶部”按钮。
//! 外壳挂载期间启用面板快捷键（数字键切换列表页，`A` 新建）。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{logout, use_session};
use crate::web::hotkeys::use_hotkeys;
use crate::web::router::{Link, use_router};
use crate::web::scroll_to_top;
use vesta_panel::hotkey::HOTKEY_HELP;
use vesta_panel::location::normalize_path;
use vesta_panel::route::{MAIN_NAV, search_url};
use vesta_panel::HotkeyDispatcher;

#[component]
fn MainNav() -> impl IntoView {
    let router = use_router();
    let ctx = use_session();

    let items = MAIN_NAV
        .iter()
        .map(|&(path, label)| {
            let active = move || {
                router
                    .location()
                    .with(|loc| loc.normalized_path().starts_with(normalize_path(path)))
            };
            let class = move || {
                if active() {
                    "btn btn-sm btn-primary"
                } else {
                    "btn btn-sm btn-ghost"
                }
            };
            view! {
                <span class=class>
                    <Link to=path>{move || ctx.session.with(|s| s.t(label).to_string())}</Link>
                </span>
            }
        })
        .collect_view();

    view! { <nav class="flex flex-wrap gap-1">{items}</nav> }
}

#[component]
fn SearchBox() -> impl IntoView {
    let router = use_router();
    let (term, set_term) = signal(String::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = term.get();
        if value.trim().is_empty() {
            return;
        }
        router.navigate(&search_url(&value));
    };

    view! {
        <form on:submit=on_submit>
            <input
                type="search"
                class="input input-sm input-bordered"
                on:input=move |ev| set_term.set(event_target_value(&ev))
                prop:value=term
            />
        </form>
    }
}

#[component]
fn HotkeysHelp(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_session();

    view! {
        <Show when=move || open.get()>
            <div class="fixed bottom-4 right-4 card bg-base-100 shadow-xl z-50">
                <div class="card-body p-4">
                    <div class="flex justify-between items-center">
                        <h3 class="font-bold">{move || ctx.session.with(|s| s.t("Shortcuts").to_string())}</h3>
                        <button class="btn btn-xs btn-ghost" on:click=move |_| open.set(false)>"✕"</button>
                    </div>
                    <ul class="text-sm">
                        {HOTKEY_HELP
                            .iter()
                            .map(|&(key, label)| view! {
                                <li>
                                    <kbd class="kbd kbd-sm">{key}</kbd>
                                    " "
                                    {move || ctx.session.with(|s| s.t(label).to_string())}
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn PanelShell(children: Children) -> impl IntoView {
    let ctx = use_session();
    let help_open = RwSignal::new(false);
    let (is_signing_out, set_is_signing_out) = signal(false);

    use_hotkeys(HotkeyDispatcher::panel());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        set_is_signing_out.set(true);
        spawn_local(async move {
            logout(&ctx).await;
            set_is_signing_out.set(false);
        });
    };

    let user_name = move || {
        ctx.session
            .with(|s| s.user_name().unwrap_or_default().to_string())
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow gap-4 px-4">
                <div class="flex-1">
                    <MainNav />
                </div>
                <SearchBox />
                <span class="font-semibold">{user_name}</span>
                <button class="btn btn-sm btn-ghost" on:click=move |_| help_open.update(|v| *v = !*v)>
                    "?"
                </button>
                <button class="btn btn-sm btn-outline" on:click=on_logout disabled=move || is_signing_out.get()>
                    {move || ctx.session.with(|s| s.t("Log out").to_string())}
                </button>
            </header>
            <main class="p-6">{children()}</main>
            <HotkeysHelp open=help_open />
            <button class="btn btn-circle btn-sm fixed bottom-4 left-4" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
        </div>
    }
}
