//! Soft-delete lifecycle shared by every catalog entity.
//!
//! The only transition is `Active -> Inactive`. It is one-way: nothing in the
//! service layer reactivates a record. The state is persisted as the
//! `is_active` boolean column.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Active,
    Inactive,
}

impl Lifecycle {
    pub fn is_active(self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// Soft delete. Deactivating an already inactive record is a no-op.
    #[must_use]
    pub fn deactivate(self) -> Self {
        Lifecycle::Inactive
    }
}

impl From<bool> for Lifecycle {
    fn from(is_active: bool) -> Self {
        if is_active {
            Lifecycle::Active
        } else {
            Lifecycle::Inactive
        }
    }
}

impl From<Lifecycle> for bool {
    fn from(lifecycle: Lifecycle) -> Self {
        lifecycle.is_active()
    }
}
