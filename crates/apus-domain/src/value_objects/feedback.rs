//! Haptic feedback vocabulary

/// Strength of an impact feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Soft,
    Rigid,
}

/// Outcome signalled by a notification feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}
