//! Haptic Feedback Port

use crate::value_objects::{ImpactStyle, NotificationKind};

/// Haptic feedback generator
///
/// Only the three primitives are required; the named feedbacks map onto
/// them and can be overridden.
pub trait HapticFeedback: Send + Sync {
    fn impact(&self, style: ImpactStyle);

    fn notification(&self, kind: NotificationKind);

    fn selection(&self);

    fn button_tap(&self) {
        self.impact(ImpactStyle::Light);
    }

    fn action_feedback(&self) {
        self.impact(ImpactStyle::Medium);
    }

    fn strong_feedback(&self) {
        self.impact(ImpactStyle::Heavy);
    }

    fn success(&self) {
        self.notification(NotificationKind::Success);
    }

    fn warning(&self) {
        self.notification(NotificationKind::Warning);
    }

    fn error(&self) {
        self.notification(NotificationKind::Error);
    }

    fn selection_changed(&self) {
        self.selection();
    }
}
