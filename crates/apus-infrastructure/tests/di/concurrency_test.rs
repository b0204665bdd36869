//! Concurrent Access Tests

use std::sync::Arc;
use std::thread;

use apus_infrastructure::di::Registry;

trait Counter: Send + Sync {
    fn value(&self) -> usize;
}

struct Fixed(usize);

impl Counter for Fixed {
    fn value(&self) -> usize {
        self.0
    }
}

#[test]
fn test_concurrent_registration_and_resolution() {
    let registry = Registry::new();
    registry.register_instance::<dyn Counter>(Arc::new(Fixed(0)));

    thread::scope(|scope| {
        for worker in 0..8 {
            let registry = registry.clone();
            scope.spawn(move || {
                for round in 0..200 {
                    if round % 10 == 0 {
                        registry.register_instance::<dyn Counter>(Arc::new(Fixed(worker)));
                    }
                    assert!(registry.resolve::<dyn Counter>().value() < 8);
                }
            });
        }
    });

    assert!(registry.resolve::<dyn Counter>().value() < 8);
}

#[test]
fn test_factory_resolving_under_contention() {
    let registry = Registry::new();
    registry.register_instance::<usize>(Arc::new(3));
    let weak = registry.downgrade();
    registry.register_factory::<dyn Counter, _>(move || {
        Arc::new(Fixed(*weak.resolve::<usize>()))
    });

    thread::scope(|scope| {
        for _ in 0..4 {
            let registry = registry.clone();
            scope.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(registry.resolve::<dyn Counter>().value(), 3);
                }
            });
        }
    });
}
