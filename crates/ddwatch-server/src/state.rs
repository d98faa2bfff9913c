use ddwatch_core::config::Config;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state passed to all route handlers.
///
/// Everything here is built once at startup; only the trigger lock is ever
/// taken at request time.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub openapi: Arc<serde_json::Value>,
    /// Held by the blocking task for the whole ddclient run, even if the
    /// request that started it is dropped, so runs and their appended
    /// records never overlap.
    pub trigger_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            openapi: Arc::new(crate::openapi::document()),
            trigger_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn new_state_stores_config() {
        let config = Config {
            ddclient_log: PathBuf::from("/tmp/test.log"),
            ..Config::default()
        };
        let state = AppState::new(config.clone());
        assert_eq!(*state.config, config);
    }

    #[test]
    fn clones_share_the_same_document() {
        let state = AppState::new(Config::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.openapi, &cloned.openapi));
        assert!(Arc::ptr_eq(&state.trigger_lock, &cloned.trigger_lock));
    }
}
