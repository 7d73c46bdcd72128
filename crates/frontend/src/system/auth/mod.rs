//! Учётные данные сессии. Вход и обновление токена делает внешний модуль,
//! консоль только читает результат из localStorage.

pub mod storage;

use leptos::prelude::*;

/// Tenant + token, которые уходят с каждым запросом
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Session {
    pub tenant_id: i64,
    pub access_token: Option<String>,
}

impl Session {
    pub fn auth_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.tenant_id > 0
    }
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}
