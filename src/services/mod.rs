pub mod analytics;
pub mod auth;
pub mod calendar;
pub mod error_handling;
pub mod notification_service;
pub mod project_service;
pub mod report_export;
pub mod reports;
pub mod task_service;
pub mod team_service;
pub mod validation;

pub use analytics::AnalyticsSummary;
pub use auth::{AuthMode, AuthOutcome, AuthProvider, AuthService};
pub use error_handling::{BoardError, BoardResult, UserErrorFormatter};
pub use notification_service::NotificationService;
pub use project_service::ProjectService;
pub use task_service::TaskService;
pub use team_service::TeamService;
