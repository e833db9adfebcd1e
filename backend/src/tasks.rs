use std::time::Duration;

use crate::state::session_remove_expired;

const CLEAN_INTERVAL: Duration = Duration::from_secs(60 * 60);

pub async fn run_tasks() {
    let mut interval_timer = tokio::time::interval(CLEAN_INTERVAL);
    loop {
        interval_timer.tick().await;
        let removed = session_remove_expired();
        if removed > 0 {
            tracing::info!("expired sessions removed: {removed}");
        }
    }
}
