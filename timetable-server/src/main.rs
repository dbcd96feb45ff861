use tracing::{info, warn};

use timetable_server::config::ServerConfig;
use timetable_server::loader::{load_records, read_records, sample_records};
use timetable_server::logging::init_logging;
use timetable_server::timetable::Timetable;
use timetable_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    init_logging();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Load train records (fail fast on an unreadable file)
    let records = match &config.data_path {
        Some(path) => {
            info!(path = %path.display(), "reading train records");
            read_records(path).expect("Failed to read train records")
        }
        None => {
            info!("no record file configured, using sample trains");
            sample_records()
        }
    };

    // Build the timetable
    let mut timetable = Timetable::new();
    let report = load_records(&mut timetable, &records);
    if !report.is_complete() {
        warn!(
            rejected = report.rejected.len(),
            "some trains were not added to the timetable"
        );
    }

    for line in timetable.render_text() {
        info!("{line}");
    }

    let app = create_router(AppState::new(timetable));

    let addr = config.addr;
    info!("Timetable listening on http://{addr}");
    info!("  GET  /               - Timetable page");
    info!("  GET  /health         - Health check");
    info!("  GET  /api/timetable  - Timetable as JSON");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
