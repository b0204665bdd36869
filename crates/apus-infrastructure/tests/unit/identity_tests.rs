//! Capability Identity Tests

use apus_domain::ports::{CameraManager, HapticFeedback};
use apus_domain::value_objects::AppSettings;
use apus_infrastructure::di::CapabilityId;

#[test]
fn test_identity_is_stable() {
    assert_eq!(
        CapabilityId::of::<dyn HapticFeedback>(),
        CapabilityId::of::<dyn HapticFeedback>()
    );
}

#[test]
fn test_distinct_capabilities_have_distinct_identities() {
    assert_ne!(
        CapabilityId::of::<dyn HapticFeedback>(),
        CapabilityId::of::<dyn CameraManager>()
    );
    assert_ne!(
        CapabilityId::of::<AppSettings>(),
        CapabilityId::of::<dyn CameraManager>()
    );
}

#[test]
fn test_identity_names_the_type() {
    let id = CapabilityId::of::<dyn HapticFeedback>();
    assert!(id.name().contains("HapticFeedback"));
    assert_eq!(id.to_string(), id.name());
}

#[test]
fn test_type_id_matches_std() {
    use std::any::TypeId;

    assert_eq!(CapabilityId::of::<String>().type_id(), TypeId::of::<String>());
}
