use chrono::{DateTime, Local, Utc};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Stand-in for re-fetching report data: waits, performs no I/O.
pub async fn simulate_refresh(delay: Duration) -> DateTime<Utc> {
    tokio::time::sleep(delay).await;
    let refreshed_at = Utc::now();
    info!(delay_ms = delay.as_millis() as u64, "Report data refreshed");
    refreshed_at
}

/// Default location of an exported report: `<dir>/report-YYYYMMDD-HHMMSS.csv`.
pub fn default_export_path(dir: impl Into<PathBuf>) -> PathBuf {
    let mut path = dir.into();
    path.push(format!("report-{}.csv", Local::now().format("%Y%m%d-%H%M%S")));
    path
}
