use pihole_exporter_application::use_cases::GetPiholeStatsUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_stats: Arc<GetPiholeStatsUseCase>,
}

impl AppState {
    pub fn new(get_stats: Arc<GetPiholeStatsUseCase>) -> Self {
        Self { get_stats }
    }
}
