//! Registry Resolution Tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use apus_infrastructure::di::{CapabilityId, Registry, RegistryError};

trait Logger: Send + Sync {
    fn id(&self) -> usize;
}

struct CountingLogger {
    id: usize,
}

impl Logger for CountingLogger {
    fn id(&self) -> usize {
        self.id
    }
}

trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

fn counting_factory(registry: &Registry) -> Arc<AtomicUsize> {
    let counter = Arc::new(AtomicUsize::new(0));
    let next = Arc::clone(&counter);
    registry.register_factory::<dyn Logger, _>(move || {
        let id = next.fetch_add(1, Ordering::SeqCst) + 1;
        Arc::new(CountingLogger { id })
    });
    counter
}

#[test]
fn test_logger_factory_then_pinned_instance() {
    let registry = Registry::new();
    counting_factory(&registry);

    let first = registry.resolve::<dyn Logger>();
    let second = registry.resolve::<dyn Logger>();
    assert_eq!(first.id(), 1);
    assert_eq!(second.id(), 2);
    assert!(!Arc::ptr_eq(&first, &second));

    let pinned: Arc<dyn Logger> = Arc::new(CountingLogger { id: 42 });
    registry.register_instance::<dyn Logger>(Arc::clone(&pinned));

    let third = registry.resolve::<dyn Logger>();
    let fourth = registry.resolve::<dyn Logger>();
    assert!(Arc::ptr_eq(&third, &pinned));
    assert!(Arc::ptr_eq(&third, &fourth));
}

#[test]
fn test_factory_runs_on_every_resolve() {
    let registry = Registry::new();
    let counter = counting_factory(&registry);

    for _ in 0..5 {
        registry.resolve::<dyn Logger>();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn test_instance_shadows_factory_without_removing_it() {
    let registry = Registry::new();
    let counter = counting_factory(&registry);
    registry.register_instance::<dyn Logger>(Arc::new(CountingLogger { id: 7 }));

    assert_eq!(registry.resolve::<dyn Logger>().id(), 7);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(registry.factory_count(), 1);
    assert_eq!(registry.instance_count(), 1);
    assert_eq!(registry.capabilities().len(), 1);
}

#[test]
fn test_later_registration_replaces_earlier() {
    let registry = Registry::new();
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(1)));
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(2)));
    assert_eq!(registry.resolve::<dyn Clock>().now(), 2);

    registry.register_factory::<dyn Logger, _>(|| Arc::new(CountingLogger { id: 1 }));
    registry.register_factory::<dyn Logger, _>(|| Arc::new(CountingLogger { id: 2 }));
    assert_eq!(registry.resolve::<dyn Logger>().id(), 2);
    assert_eq!(registry.factory_count(), 1);
}

#[test]
fn test_capabilities_are_independent() {
    let registry = Registry::new();
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(9)));

    assert!(registry.contains::<dyn Clock>());
    assert!(!registry.contains::<dyn Logger>());
    assert!(registry.resolve_optional::<dyn Logger>().is_none());
}

#[test]
fn test_concrete_and_trait_object_keys_differ() {
    let registry = Registry::new();
    registry.register_instance(Arc::new(FixedClock(3)));

    assert!(registry.contains::<FixedClock>());
    assert!(!registry.contains::<dyn Clock>());
    assert_eq!(registry.resolve::<FixedClock>().now(), 3);
}

#[test]
#[should_panic(expected = "is not registered")]
fn test_required_resolve_of_unregistered_panics() {
    let registry = Registry::new();
    let _ = registry.resolve::<dyn Logger>();
}

#[test]
fn test_optional_resolve_of_unregistered_is_none() {
    let registry = Registry::new();
    assert!(registry.resolve_optional::<dyn Logger>().is_none());
}

#[test]
fn test_try_resolve_reports_missing_capability() {
    let registry = Registry::new();
    let err = registry.try_resolve::<dyn Clock>().err();

    assert_eq!(
        err,
        Some(RegistryError::NotRegistered {
            capability: CapabilityId::of::<dyn Clock>()
        })
    );
    let message = err.map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("Clock"));
}

#[test]
fn test_clear_empties_both_tables() {
    let registry = Registry::new();
    counting_factory(&registry);
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(0)));

    registry.clear();

    assert_eq!(registry.instance_count(), 0);
    assert_eq!(registry.factory_count(), 0);
    assert!(registry.resolve_optional::<dyn Logger>().is_none());
    assert!(registry.resolve_optional::<dyn Clock>().is_none());
}

#[test]
fn test_reset_without_profile_leaves_registry_empty() {
    let registry = Registry::new();
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(0)));

    registry.reset();

    assert!(registry.capabilities().is_empty());
    assert_eq!(registry.profile_name(), None);
}

#[test]
fn test_clones_share_tables() {
    let registry = Registry::new();
    let handle = registry.clone();
    handle.register_instance::<dyn Clock>(Arc::new(FixedClock(5)));

    assert_eq!(registry.resolve::<dyn Clock>().now(), 5);
}

#[test]
fn test_factory_may_resolve_other_capabilities() {
    let registry = Registry::new();
    registry.register_instance::<dyn Clock>(Arc::new(FixedClock(11)));

    let weak = registry.downgrade();
    registry.register_factory::<dyn Logger, _>(move || {
        let clock = weak.resolve::<dyn Clock>();
        Arc::new(CountingLogger {
            id: usize::try_from(clock.now()).unwrap_or_default(),
        })
    });

    assert_eq!(registry.resolve::<dyn Logger>().id(), 11);
}
