pub mod analytics_dashboard;
pub mod badges;
pub mod notification_center;
pub mod sidebar;
pub mod toast_stack;

pub use analytics_dashboard::AnalyticsDashboard;
pub use badges::{PriorityBadge, ProgressBar, StatusPill};
pub use notification_center::NotificationCenter;
pub use sidebar::{Shell, Sidebar};
pub use toast_stack::ToastStack;
