//! 认证模块
//!
//! 管理会话状态，与路由系统解耦：路由服务只读取注入的会话信号，
//! 登录、注销后的跳转由守卫重新解析得出。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web::BrowserHttpClient;
use vesta_panel::session::check_auth;
use vesta_panel::{PanelError, PanelGateway, Session, log_info, log_warn};

/// 会话上下文
///
/// 会话只由检查、登录、注销三处写入，组件通过 Context 共享读信号。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    api_base: StoredValue<String>,
}

impl SessionContext {
    pub fn new(api_base: String) -> Self {
        let (session, set_session) = signal(Session::default());
        Self {
            session,
            set_session,
            api_base: StoredValue::new(api_base),
        }
    }

    /// 会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<Session> {
        self.session.into()
    }

    pub fn api_base(&self) -> String {
        self.api_base.get_value()
    }

    /// 数据请求返回 401/403 时调用，守卫随即跳转登录页
    pub fn expire(&self) {
        log_warn!("[Session] Session expired");
        self.set_session
            .update(|session| *session = session.signed_out());
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 页面加载时检查一次会话 Cookie
pub fn init_session(ctx: &SessionContext) {
    let ctx = *ctx;
    spawn_local(async move {
        let client = BrowserHttpClient;
        let base = ctx.api_base();
        let gateway = PanelGateway::new(&client, &base);
        let session = check_auth(&gateway).await;
        ctx.set_session.set(session);
    });
}

/// 提交登录凭据
///
/// 成功后写入会话，守卫随即把 `/login` 重定向到默认页面。
pub async fn login(ctx: &SessionContext, user: String, password: String) -> Result<(), PanelError> {
    let client = BrowserHttpClient;
    let base = ctx.api_base();
    let gateway = PanelGateway::new(&client, &base);

    let payload = gateway.login(&user, &password).await?;
    let session = Session::from_payload(payload);
    log_info!(
        "[Session] Logged in as {}",
        session.user_name().unwrap_or_default()
    );
    ctx.set_session.set(session);
    Ok(())
}

/// 注销并清除会话
///
/// 服务端注销失败时仍然清除本地会话。
pub async fn logout(ctx: &SessionContext) {
    let client = BrowserHttpClient;
    let base = ctx.api_base();
    let gateway = PanelGateway::new(&client, &base);

    if let Err(e) = gateway.logout().await {
        log_warn!("[Session] Logout request failed: {}", e);
    }
    ctx.set_session.update(|session| *session = session.signed_out());
    log_info!("[Session] Signed out");
}
