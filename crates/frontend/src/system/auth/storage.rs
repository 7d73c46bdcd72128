use super::Session;
use crate::shared::storage::KeyValueStorage;

const TENANT_ID_KEY: &str = "crm_tenant_id";
const ACCESS_TOKEN_KEY: &str = "crm_access_token";

/// Read the session from storage; a missing or malformed tenant id is 0
pub fn load_session(storage: &dyn KeyValueStorage) -> Session {
    let tenant_id = storage
        .get_item(TENANT_ID_KEY)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or_default();
    let access_token = storage
        .get_item(ACCESS_TOKEN_KEY)
        .filter(|token| !token.is_empty());
    Session {
        tenant_id,
        access_token,
    }
}

/// Clear all session keys
pub fn clear_session(storage: &dyn KeyValueStorage) {
    storage.remove_item(TENANT_ID_KEY);
    storage.remove_item(ACCESS_TOKEN_KEY);
}
