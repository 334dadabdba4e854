use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod protocol;

pub use protocol::{
    ApiRequest, CheckAuthRequest, HttpMethod, LoginRequest, LogoutRequest, WebLogRequest,
};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const PAGE_TITLE_PREFIX: &str = "Vesta";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 会话检查 / 登录接口的响应体
///
/// 后端在会话有效时返回 `userName` 和本地化字符串表；
/// 登录被拒绝时只带 `error` 字段。旧版后端使用 `user` 字段名，同样接受。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default, rename = "userName", alias = "user")]
    pub user: Option<String>,
    #[serde(default)]
    pub i18n: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthPayload {
    /// 非空用户名才算有效会话
    pub fn user_name(&self) -> Option<&str> {
        self.user.as_deref().filter(|u| !u.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebLogKind {
    #[default]
    Access,
    Error,
}

impl WebLogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WebLogKind::Access => "access",
            WebLogKind::Error => "error",
        }
    }

    /// 解析 `type` 查询参数，无法识别的值一律按访问日志处理
    pub fn from_param(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => WebLogKind::Error,
            _ => WebLogKind::Access,
        }
    }
}

/// 日志接口的响应：带标记的预格式化文本与显示标签
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebLog {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_payload_tolerates_missing_fields() {
        let payload: AuthPayload = serde_json::from_str(r#"{"i18n":{"DNS":"DNS"}}"#).unwrap();
        assert_eq!(payload.user_name(), None);
        assert_eq!(payload.i18n.get("DNS").map(String::as_str), Some("DNS"));
    }

    #[test]
    fn test_auth_payload_user_name_field() {
        let payload: AuthPayload =
            serde_json::from_str(r#"{"userName":"admin","i18n":{}}"#).unwrap();
        assert_eq!(payload.user_name(), Some("admin"));

        let payload: AuthPayload = serde_json::from_str(r#"{"user":"admin"}"#).unwrap();
        assert_eq!(payload.user_name(), Some("admin"));

        let json = serde_json::to_value(AuthPayload {
            user: Some("admin".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["userName"], "admin");
    }

    #[test]
    fn test_blank_user_is_not_a_user() {
        let payload = AuthPayload {
            user: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(payload.user_name(), None);
    }

    #[test]
    fn test_web_log_kind_param() {
        assert_eq!(WebLogKind::from_param("error"), WebLogKind::Error);
        assert_eq!(WebLogKind::from_param("ERROR"), WebLogKind::Error);
        assert_eq!(WebLogKind::from_param("access"), WebLogKind::Access);
        assert_eq!(WebLogKind::from_param("bogus"), WebLogKind::Access);
    }
}
