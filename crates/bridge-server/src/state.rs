use std::sync::Arc;

use bridge_core::slack::{SlackConfig, SlackNotifier};

/// Shared application state passed to all route handlers.
///
/// Holds no request data; every call carries its own pod snapshot.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<SlackNotifier>,
}

impl AppState {
    pub fn new(config: SlackConfig) -> Self {
        Self {
            notifier: Arc::new(SlackNotifier::new(config)),
        }
    }
}
