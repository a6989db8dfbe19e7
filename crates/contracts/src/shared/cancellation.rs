//! Отмена устаревших запросов по номеру поколения
//!
//! Каждый новый запуск получает токен с увеличенным номером; токены
//! предыдущих запусков после этого считаются отменёнными.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CancellationSource {
    generation: Arc<AtomicU64>,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выдать токен для нового запуска, отменив все предыдущие
    pub fn issue(&self) -> CancellationToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        CancellationToken {
            generation,
            current: Some(self.generation.clone()),
        }
    }

    /// Отменить все выданные токены
    pub fn cancel_all(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
pub struct CancellationToken {
    generation: u64,
    current: Option<Arc<AtomicU64>>,
}

impl CancellationToken {
    /// Токен, который нельзя отменить
    pub fn never() -> Self {
        Self {
            generation: 0,
            current: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.load(Ordering::SeqCst) != self.generation)
    }
}
