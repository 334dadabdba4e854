use crate::auth::{login, use_session};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use vesta_panel::route::RESET_PATH;

/// 登录页
///
/// 登录成功后不需要手动导航：会话写入后守卫把 `/login` 重定向到默认页面。
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_session();

    let (user, set_user) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let t = move |key: &'static str| move || ctx.session.with(|s| s.t(key).to_string());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if user.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some(ctx.session.with(|s| s.t("Fields are required").to_string())));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            if let Err(e) = login(&ctx, user.get_untracked(), password.get_untracked()).await {
                set_error_msg.set(Some(e.message));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Vesta"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || error_msg.get().map(|msg| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="user">
                                <span class="label-text">{t("Username")}</span>
                            </label>
                            <input
                                id="user"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| set_user.set(event_target_value(&ev))
                                prop:value=user
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{t("Password")}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    ctx.session.with(|s| s.t("Log in").to_string()).into_any()
                                }}
                            </button>
                        </div>
                        <Link to=RESET_PATH class="link link-hover text-sm">{t("forgot password")}</Link>
                    </form>
                </div>
            </div>
        </div>
    }
}
