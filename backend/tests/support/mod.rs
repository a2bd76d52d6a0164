//! Helpers shared by the integration tests.

use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable `AppConfig::apply_env_overrides` reads.
pub const CONFIG_ENV_KEYS: [&str; 8] = [
    "HOST",
    "PORT",
    "MAX_UPLOAD_BYTES",
    "JWT_SECRET",
    "TOKEN_TTL_HOURS",
    "PBKDF2_ITERATIONS",
    "ADMIN_EMAIL",
    "ADMIN_PASSWORD",
];

/// Runs `f` with environment variables temporarily changed.
///
/// `Some(v)` sets a variable, `None` removes it. Tests calling this are
/// serialised on a process-wide lock, and the previous values come back even
/// if `f` panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

/// Like [`with_scoped_env`], but every config variable not named in
/// `changes` is removed first so the host environment cannot leak in.
pub fn with_config_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let mut all: Vec<(&str, Option<&str>)> = CONFIG_ENV_KEYS
        .iter()
        .filter(|key| !changes.iter().any(|(k, _)| *k == **key))
        .map(|key| (*key, None))
        .collect();
    all.extend_from_slice(changes);
    with_scoped_env(&all, f)
}

struct ScopedEnv {
    previous: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let previous = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for (key, value) in changes {
            set_or_remove(key, *value);
        }
        Self { previous }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            set_or_remove(&key, value.as_deref());
        }
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}
