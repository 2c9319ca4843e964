use crate::activity_log::ActivityLog;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub log: Arc<Mutex<ActivityLog>>,
}

impl AppState {
    pub fn new(log: ActivityLog) -> Self {
        Self {
            log: Arc::new(Mutex::new(log)),
        }
    }
}
