//! Канал уведомлений: очередь тостов с автоскрытием.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use log::{info, warn};
use thaw::*;

use super::errors::ApiError;

/// Получатель пользовательских сообщений. Отправка не блокирует и не падает
pub trait Notifier: Send + Sync {
    fn send_error(&self, message: String);
    fn send_success(&self, message: String);
    fn send_info(&self, message: String);
    fn send_error_list(&self, messages: Vec<String>);
}

/// Все классы ошибок уходят в один канал
pub fn report_error(notifier: &dyn Notifier, error: &ApiError) {
    let mut messages = error.messages();
    if messages.len() > 1 {
        notifier.send_error_list(messages);
    } else if let Some(message) = messages.pop() {
        notifier.send_error(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub messages: Vec<String>,
}

/// Очередь тостов (контекст приложения)
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl NotificationCenter {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Поставить тост в очередь без таймера, вернуть его id
    pub fn enqueue(&self, kind: ToastKind, messages: Vec<String>) -> u64 {
        let id = self
            .next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        self.toasts.update(|queue| queue.push(Toast { id, kind, messages }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| queue.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, messages: Vec<String>) {
        match kind {
            ToastKind::Error => warn!("Notification: {}", messages.join("; ")),
            _ => info!("Notification: {}", messages.join("; ")),
        }
        let id = self.enqueue(kind, messages);
        let center = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(center.duration_ms).await;
            center.dismiss(id);
        });
    }
}

impl Notifier for NotificationCenter {
    fn send_error(&self, message: String) {
        self.push(ToastKind::Error, vec![message]);
    }

    fn send_success(&self, message: String) {
        self.push(ToastKind::Success, vec![message]);
    }

    fn send_info(&self, message: String) {
        self.push(ToastKind::Info, vec![message]);
    }

    fn send_error_list(&self, messages: Vec<String>) {
        if !messages.is_empty() {
            self.push(ToastKind::Error, messages);
        }
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>().expect("NotificationCenter not found in component tree")
}

/// Стопка тостов в правом нижнем углу
#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_notifications();

    view! {
        <div class="toast-host" style="position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; max-width: 420px;">
            <For
                each=move || center.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let intent = match toast.kind {
                        ToastKind::Error => MessageBarIntent::Error,
                        ToastKind::Success => MessageBarIntent::Success,
                        ToastKind::Info => MessageBarIntent::Info,
                    };
                    let id = toast.id;
                    let lines = toast
                        .messages
                        .into_iter()
                        .map(|m| view! { <span>{m}</span> })
                        .collect_view();
                    view! {
                        <div on:click=move |_| center.dismiss(id) style="cursor: pointer;">
                            <MessageBar intent=intent>
                                <div style="display: flex; flex-direction: column; gap: 2px;">
                                    {lines}
                                </div>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn test_report_error_per_class() {
        let notifier = RecordingNotifier::default();
        report_error(&notifier, &ApiError::Network("timeout".into()));
        report_error(
            &notifier,
            &ApiError::Application(vec!["Нет доступа".into(), "Повторите позже".into()]),
        );
        report_error(&notifier, &ApiError::Validation(vec!["Заполните поле «Имя»".into()]));

        let events = notifier.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].1, vec!["Ошибка сети: timeout".to_string()]);
        assert_eq!(events[1].1.len(), 2);
        assert_eq!(events[2], (ToastKind::Error, vec!["Заполните поле «Имя»".to_string()]));
    }

    #[test]
    fn test_enqueue_and_dismiss() {
        let center = NotificationCenter::new(4000);
        let first = center.enqueue(ToastKind::Info, vec!["a".into()]);
        let second = center.enqueue(ToastKind::Error, vec!["b".into()]);
        assert_ne!(first, second);

        center.dismiss(first);
        let left = center.toasts.get_untracked();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, second);
    }
}
