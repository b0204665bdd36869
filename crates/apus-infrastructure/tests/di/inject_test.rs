//! Injection Accessor Tests

use std::sync::Arc;

use apus_domain::ports::HapticFeedback;
use apus_domain::value_objects::{AppSettings, ImpactStyle};
use apus_infrastructure::config::AppConfig;
use apus_infrastructure::di::{CapabilityId, Injected, OptionalInjected, Registry};
use apus_infrastructure::fakes::{FakeHaptics, HapticEvent};

#[test]
fn test_injected_resolves_on_every_read() {
    let registry = Registry::new();
    let haptics: Injected<dyn HapticFeedback> = Injected::new(&registry);

    let first = Arc::new(FakeHaptics::default());
    registry.register_instance::<dyn HapticFeedback>(first.clone());
    haptics.get().button_tap();

    let second = Arc::new(FakeHaptics::default());
    registry.register_instance::<dyn HapticFeedback>(second.clone());
    haptics.get().button_tap();

    assert_eq!(first.events(), vec![HapticEvent::Impact(ImpactStyle::Light)]);
    assert_eq!(second.events(), vec![HapticEvent::Impact(ImpactStyle::Light)]);
}

#[test]
fn test_optional_injected_tracks_registration() {
    let registry = Registry::new();
    let settings: OptionalInjected<AppSettings> = OptionalInjected::new(&registry);
    assert!(settings.get().is_none());

    registry.register_instance(Arc::new(AppSettings::new(false)));
    assert_eq!(
        settings.get().map(|s| s.is_object_detection_enabled()),
        Some(false)
    );

    registry.clear();
    assert!(settings.get().is_none());
}

#[test]
#[should_panic(expected = "is not registered")]
fn test_injected_panics_once_capability_is_cleared() {
    let registry = Registry::new();
    registry.register_instance::<dyn HapticFeedback>(Arc::new(FakeHaptics::default()));
    let haptics: Injected<dyn HapticFeedback> = Injected::new(&registry);
    haptics.get().selection();

    registry.clear();
    haptics.get().selection();
}

#[test]
fn test_default_binds_to_shared_registry() {
    let config: Injected<AppConfig> = Injected::default();

    assert_eq!(config.capability(), CapabilityId::of::<AppConfig>());
    assert_eq!(config.registry().profile_name(), Some("production"));
    assert_eq!(*config.get(), AppConfig::default());
}
