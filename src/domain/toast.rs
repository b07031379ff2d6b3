/// Transient feedback shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

impl ToastLevel {
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            ToastLevel::Success => ("#14532d", "#dcfce7"),
            ToastLevel::Info => ("#1e3a8a", "#dbeafe"),
            ToastLevel::Error => ("#7f1d1d", "#fee2e2"),
        }
    }
}

/// Ordered queue of visible toasts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, title: Option<String>, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            level,
            title,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, None, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, None, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, None, message)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
