//! Haptic feedback provider

use apus_domain::ports::HapticFeedback;
use apus_domain::value_objects::{ImpactStyle, NotificationKind};
use tracing::debug;

/// Haptics for hosts without a haptic engine: every feedback becomes a
/// `tracing` event under the `apus::haptics` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHaptics;

impl HapticFeedback for TracingHaptics {
    fn impact(&self, style: ImpactStyle) {
        debug!(target: "apus::haptics", ?style, "impact");
    }

    fn notification(&self, kind: NotificationKind) {
        debug!(target: "apus::haptics", ?kind, "notification");
    }

    fn selection(&self) {
        debug!(target: "apus::haptics", "selection");
    }
}
