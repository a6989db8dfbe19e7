//! Кэш с ограничением по времени жизни и явными часами

use chrono::{DateTime, Duration, Utc};
use std::sync::{Mutex, MutexGuard};

/// Источник текущего времени. В тестах подменяется управляемыми часами.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Системные часы
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    value: T,
    fetched_at: DateTime<Utc>,
}

/// Одна запись кэша: ключ, значение, время загрузки и порог устаревания
#[derive(Debug)]
pub struct TimedCache<T> {
    key: String,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry<T>>>,
}

impl<T: Clone> TimedCache<T> {
    pub fn new(key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            key: key.into(),
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, Option<CacheEntry<T>>> {
        self.entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Значение, если оно загружено не раньше чем `ttl` назад
    pub fn get_fresh(&self, now: DateTime<Utc>) -> Option<T> {
        self.lock()
            .as_ref()
            .filter(|entry| now - entry.fetched_at < self.ttl)
            .map(|entry| entry.value.clone())
    }

    /// Значение независимо от возраста
    pub fn get_any(&self) -> Option<T> {
        self.lock().as_ref().map(|entry| entry.value.clone())
    }

    pub fn store(&self, value: T, now: DateTime<Utc>) {
        *self.lock() = Some(CacheEntry {
            value,
            fetched_at: now,
        });
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.lock().as_ref().map(|entry| entry.fetched_at)
    }

    pub fn invalidate(&self) {
        *self.lock() = None;
    }
}
