pub mod auth_view;
pub mod calendar_view;
pub mod dashboard;
pub mod not_found;
pub mod project_details;
pub mod reports_view;
pub mod tasks_view;
pub mod team_view;

pub use auth_view::AuthView;
pub use calendar_view::CalendarView;
pub use dashboard::Dashboard;
pub use not_found::NotFound;
pub use project_details::ProjectDetails;
pub use reports_view::ReportsView;
pub use tasks_view::TasksView;
pub use team_view::TeamView;
