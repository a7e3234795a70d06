//! Scoped environment overrides for tests that read process-global config.
//!
//! Environment mutation is process-wide, so every [`ScopedEnv`] holds a
//! shared lock for its whole lifetime and restores previous values on drop.

use std::sync::{Mutex, MutexGuard, OnceLock};

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: writes only happen while the global env lock is held.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Exclusive handle over process environment overrides.
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Take the global env lock. A poisoned lock is recovered since the
    /// previous holder already restored its overrides while unwinding.
    pub fn lock() -> Self {
        let guard = env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Self {
            saved: Vec::new(),
            _lock: guard,
        }
    }

    /// Override `key` with `value` until this handle drops.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.remember(key);
        write_var(key, Some(value));
        self
    }

    /// Unset `key` until this handle drops.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        write_var(key, None);
        self
    }

    fn remember(&mut self, key: &str) {
        if self.saved.iter().any(|(saved, _)| saved == key) {
            return;
        }
        self.saved.push((key.to_string(), std::env::var(key).ok()));
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            write_var(&key, previous.as_deref());
        }
    }
}
