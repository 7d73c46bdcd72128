//! Debounce и throttle для пользовательского ввода.
//!
//! Логика (`Debouncer`, `Throttle`) не знает о таймерах и тестируется
//! напрямую; браузерные обёртки `Debounced`/`Throttled` подключают к ней
//! `gloo-timers` и часы `js_sys::Date`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Отложенный вызов: каждый `call` перезапускает окно тишины.
///
/// `call` возвращает поколение; по истечении окна таймер вызывает `fire`
/// со своим поколением и получает аргументы только если он последний.
#[derive(Debug)]
pub struct Debouncer<A> {
    generation: u64,
    pending: Option<A>,
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<A> Debouncer<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call(&mut self, args: A) -> u64 {
        self.generation += 1;
        self.pending = Some(args);
        self.generation
    }

    pub fn fire(&mut self, generation: u64) -> Option<A> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Отменить ожидающий вызов (уже запущенные таймеры станут устаревшими)
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }
}

/// Первый вызов проходит сразу, следующие подавляются до конца окна.
/// Состояние своё у каждого экземпляра.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    window_ms: f64,
    blocked_until: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms: f64::from(window_ms),
            blocked_until: None,
        }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        match self.blocked_until {
            Some(until) if now_ms < until => false,
            _ => {
                self.blocked_until = Some(now_ms + self.window_ms);
                true
            }
        }
    }
}

/// Debounce поверх `Callback` для компонентов
pub struct Debounced<A>
where
    A: Send + Sync + 'static,
{
    state: StoredValue<Debouncer<A>>,
    delay_ms: u32,
    target: Callback<A>,
}

impl<A> Clone for Debounced<A>
where
    A: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Debounced<A> where A: Send + Sync + 'static {}

impl<A> Debounced<A>
where
    A: Send + Sync + 'static,
{
    pub fn new(delay_ms: u32, target: Callback<A>) -> Self {
        Self {
            state: StoredValue::new(Debouncer::new()),
            delay_ms,
            target,
        }
    }

    pub fn call(&self, args: A) {
        let Some(generation) = self.state.try_update_value(|d| d.call(args)) else {
            return;
        };
        let state = self.state;
        let target = self.target;
        let delay_ms = self.delay_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(args) = state.try_update_value(|d| d.fire(generation)).flatten() {
                target.run(args);
            }
        });
    }

    pub fn cancel(&self) {
        self.state.update_value(|d| d.cancel());
    }
}

/// Throttle поверх `Callback` для компонентов
pub struct Throttled<A>
where
    A: 'static,
{
    state: StoredValue<Throttle>,
    target: Callback<A>,
}

impl<A: 'static> Clone for Throttled<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: 'static> Copy for Throttled<A> {}

impl<A: 'static> Throttled<A> {
    pub fn new(window_ms: u32, target: Callback<A>) -> Self {
        Self {
            state: StoredValue::new(Throttle::new(window_ms)),
            target,
        }
    }

    /// `true`, если вызов прошёл
    pub fn call(&self, args: A) -> bool {
        let now = js_sys::Date::now();
        let passed = self
            .state
            .try_update_value(|t| t.try_acquire(now))
            .unwrap_or(false);
        if passed {
            self.target.run(args);
        }
        passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_fires_once_with_last_args() {
        let mut debouncer = Debouncer::new();
        let generations: Vec<u64> = ["i", "iv", "iva", "ivan", "ivanov"]
            .into_iter()
            .map(|q| debouncer.call(q.to_string()))
            .collect();

        let fired: Vec<String> = generations
            .iter()
            .filter_map(|g| debouncer.fire(*g))
            .collect();
        assert_eq!(fired, vec!["ivanov".to_string()]);
        assert_eq!(debouncer.fire(*generations.last().unwrap()), None);
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.call(1);
        assert_eq!(debouncer.fire(first), Some(1));
        let second = debouncer.call(2);
        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some(2));
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new();
        let generation = debouncer.call("x");
        debouncer.cancel();
        assert_eq!(debouncer.fire(generation), None);
    }

    #[test]
    fn test_throttle_window() {
        let mut throttle = Throttle::new(150);
        assert!(throttle.try_acquire(1000.0));
        assert!(!throttle.try_acquire(1010.0));
        assert!(!throttle.try_acquire(1149.0));
        assert!(throttle.try_acquire(1150.0));
        assert!(!throttle.try_acquire(1200.0));
    }

    #[test]
    fn test_throttles_are_independent() {
        let mut slider = Throttle::new(150);
        let mut other = Throttle::new(150);
        assert!(slider.try_acquire(0.0));
        assert!(other.try_acquire(10.0));
    }
}
