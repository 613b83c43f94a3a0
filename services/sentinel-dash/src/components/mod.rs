// services/sentinel-dash/src/components/mod.rs
//
// Sentinel Console - UI Components
//

mod charts;
mod dashboard;
mod feeds;
mod header;
mod login;
mod maintenance;
mod map;
mod threats;
mod weather;

pub use charts::{ActivityTrend, LocationBars, SeverityDonut};
pub use dashboard::DashboardPage;
pub use feeds::FeedGrid;
pub use header::Header;
pub use login::LoginPage;
pub use maintenance::MaintenancePanel;
pub use map::RouteMap;
pub use threats::ThreatIntelPanel;
pub use weather::WeatherPatrolPanel;
