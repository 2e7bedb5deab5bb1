use chrono::{DateTime, Utc};

/// Settings that affect the serialized package but not the laid-out model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Creation timestamp recorded in the package properties. Left unset,
    /// two renders of the same input produce identical bytes.
    pub created: Option<DateTime<Utc>>,
}

impl RenderOptions {
    /// Options stamped with the current time.
    pub fn now() -> Self {
        Self {
            created: Some(Utc::now()),
        }
    }
}
