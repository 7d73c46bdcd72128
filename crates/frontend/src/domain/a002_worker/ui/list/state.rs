use contracts::domain::a002_worker::{InvitationRequest, Worker, WorkerFilterExtra, WorkerSortBy};

use crate::shared::collection::CollectionItem;
use crate::shared::errors::{require_fields, ApiError};
use crate::shared::state::FilterStore;

pub type WorkerFilterStore = FilterStore<WorkerSortBy, WorkerFilterExtra>;

pub fn create_filter() -> WorkerFilterStore {
    WorkerFilterStore::with_defaults()
}

impl CollectionItem for Worker {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn revision(&self) -> i64 {
        self.metadata.revision()
    }
}

impl FilterStore<WorkerSortBy, WorkerFilterExtra> {
    pub fn change_position(&self, position: String) {
        self.update_extra(|x| x.position = position);
    }

    pub fn change_active_only(&self, active_only: bool) {
        self.update_extra(|x| x.active_only = active_only);
    }
}

/// Проверить форму приглашения и собрать запрос
pub fn build_invitation(
    tenant_id: i64,
    name: &str,
    email: &str,
    position: &str,
) -> Result<InvitationRequest, ApiError> {
    require_fields(&[("Имя", name), ("Email", email)])?;
    if !email.contains('@') {
        return Err(ApiError::Validation(vec!["Некорректный email".to_string()]));
    }
    Ok(InvitationRequest {
        tenant_id,
        email: email.trim().to_string(),
        name: name.trim().to_string(),
        position: position.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_invitation_requires_fields() {
        let err = build_invitation(1, " ", "", "Мастер").unwrap_err();
        assert_eq!(err.messages().len(), 2);

        let err = build_invitation(1, "Пётр", "petr.example.com", "").unwrap_err();
        assert_eq!(err, ApiError::Validation(vec!["Некорректный email".to_string()]));

        let request = build_invitation(1, " Пётр ", "petr@example.com", "").unwrap();
        assert_eq!(request.name, "Пётр");
        assert_eq!(request.tenant_id, 1);
    }

    #[test]
    fn test_worker_filter_setters() {
        let filter = create_filter();
        filter.change_position("Мастер".to_string());
        filter.change_active_only(true);
        let snapshot = filter.snapshot();
        assert_eq!(snapshot.extra.position, "Мастер");
        assert!(snapshot.extra.active_only);
    }
}
