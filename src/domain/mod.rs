pub mod notification;
pub mod priority;
pub mod project;
pub mod task;
pub mod team_member;
pub mod toast;

/// A record kept in the shared store, addressed by its string id.
pub trait Entity: Clone {
    /// Human readable kind, used in errors and logs.
    const KIND: &'static str;
    /// Prefix for generated ids (`task-1718000000000`).
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
}
