//! Хлебные крошки при спуске по дереву категорий.
//! Пустой след - корень.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub id: i64,
    pub name: String,
}

impl Crumb {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Вход в категорию
pub fn push(trail: &[Crumb], crumb: Crumb) -> Vec<Crumb> {
    let mut next = trail.to_vec();
    next.push(crumb);
    next
}

/// Клик по предку: след обрезается до него включительно.
/// `None` - возврат в корень; неизвестный `id` оставляет след как есть.
pub fn truncate_to(trail: &[Crumb], id: Option<i64>) -> Vec<Crumb> {
    match id {
        None => Vec::new(),
        Some(id) => match trail.iter().position(|c| c.id == id) {
            Some(index) => trail[..=index].to_vec(),
            None => trail.to_vec(),
        },
    }
}

/// Категория, в которой сейчас находится пользователь
pub fn current(trail: &[Crumb]) -> Option<i64> {
    trail.last().map(|c| c.id)
}
