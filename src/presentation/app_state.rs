// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::search_service::SearchService;
use crate::application::streaming_service::StreamingDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub search_service: SearchService,
    pub streaming_service: StreamingDashboardService,
    /// City shown by `GET /dashboards`
    pub default_city: String,
}
