use thiserror::Error;

/// Ошибки обращения к API и клиентской проверки.
///
/// Все варианты несмертельны для экрана: пользователь повторяет действие вручную.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Ошибка сети: {0}")]
    Network(String),

    #[error("Сервер вернул HTTP {0}")]
    Http(u16),

    #[error("{}", .0.join("; "))]
    Application(Vec<String>),

    #[error("Не удалось разобрать ответ сервера: {0}")]
    Decode(String),

    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Сессия не авторизована")]
    Unauthenticated,
}

impl ApiError {
    /// Сообщения для канала уведомлений
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Application(messages) | ApiError::Validation(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// Ошибка проверки, если хотя бы одно обязательное поле пустое
pub fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| format!("Заполните поле «{}»", label))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_per_kind() {
        assert_eq!(
            ApiError::Application(vec!["a".into(), "b".into()]).messages(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            ApiError::Http(500).messages(),
            vec!["Сервер вернул HTTP 500".to_string()]
        );
    }

    #[test]
    fn test_require_fields() {
        assert!(require_fields(&[("Имя", "Иван")]).is_ok());
        let err = require_fields(&[("Имя", " "), ("Телефон", ""), ("Email", "a@b")]).unwrap_err();
        assert_eq!(err.messages().len(), 2);
    }
}
