//! Recording Fakes
//!
//! Test doubles for every capability port. They never touch the platform,
//! return whatever a test primes them with, and record what consumers asked
//! of them. The test profile registers them as singleton instances.

pub mod camera;
pub mod results;
pub mod services;
pub mod vision;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use camera::FakeCameraManager;
pub use results::FakeDetectionResults;
pub use services::{
    FakeErrorReporter, FakeHaptics, FakePermissionService, FakePhotoLibrary, HapticEvent,
};
pub use vision::{
    FakeBarcodeDetector, FakeContourDetector, FakeImageClassifier, FakeObjectDetector,
    FakeTextRecognizer, FakeUnifiedObjectDetector,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
