//! Permission vocabulary tests

use apus_domain::value_objects::{PermissionKind, PermissionStatus};

#[test]
fn test_permission_serde_names() {
    assert_eq!(
        serde_json::to_string(&PermissionKind::PhotoLibrary).unwrap(),
        "\"photo_library\""
    );
    let status: PermissionStatus = serde_json::from_str("\"not_determined\"").unwrap();
    assert_eq!(status, PermissionStatus::NotDetermined);
}

#[test]
fn test_only_authorized_is_authorized() {
    assert!(PermissionStatus::Authorized.is_authorized());
    for status in [
        PermissionStatus::Denied,
        PermissionStatus::NotDetermined,
        PermissionStatus::Restricted,
    ] {
        assert!(!status.is_authorized());
    }
    assert_eq!(PermissionStatus::default(), PermissionStatus::NotDetermined);
    assert_eq!(PermissionKind::ALL.len(), 3);
}
