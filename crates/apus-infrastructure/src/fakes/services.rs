//! Fake platform services

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use apus_domain::error::Error;
use apus_domain::ports::{ErrorReporter, HapticFeedback, PermissionService, PhotoLibraryService};
use apus_domain::value_objects::{
    AppError, ErrorPresentation, Image, ImpactStyle, NotificationKind, PermissionKind,
    PermissionStatus, PhotoLibraryError,
};

use super::lock;

// ============================================================================
// Haptics
// ============================================================================

/// One feedback played through [`FakeHaptics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticEvent {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

/// Haptics recording every feedback
#[derive(Debug, Default)]
pub struct FakeHaptics {
    events: Mutex<Vec<HapticEvent>>,
}

impl FakeHaptics {
    pub fn events(&self) -> Vec<HapticEvent> {
        lock(&self.events).clone()
    }

    pub fn clear(&self) {
        lock(&self.events).clear();
    }
}

impl HapticFeedback for FakeHaptics {
    fn impact(&self, style: ImpactStyle) {
        lock(&self.events).push(HapticEvent::Impact(style));
    }

    fn notification(&self, kind: NotificationKind) {
        lock(&self.events).push(HapticEvent::Notification(kind));
    }

    fn selection(&self) {
        lock(&self.events).push(HapticEvent::Selection);
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Permission service with test-controlled statuses
///
/// Undetermined permissions are granted on request unless
/// [`set_grant_on_request`](Self::set_grant_on_request) says otherwise.
#[derive(Debug)]
pub struct FakePermissionService {
    statuses: Mutex<HashMap<PermissionKind, PermissionStatus>>,
    grant_on_request: Mutex<bool>,
    requests: Mutex<Vec<PermissionKind>>,
    settings_opened: AtomicUsize,
}

impl Default for FakePermissionService {
    fn default() -> Self {
        Self {
            statuses: Mutex::new(HashMap::new()),
            grant_on_request: Mutex::new(true),
            requests: Mutex::new(Vec::new()),
            settings_opened: AtomicUsize::new(0),
        }
    }
}

impl FakePermissionService {
    pub fn set_status(&self, kind: PermissionKind, status: PermissionStatus) {
        lock(&self.statuses).insert(kind, status);
    }

    pub fn set_grant_on_request(&self, grant: bool) {
        *lock(&self.grant_on_request) = grant;
    }

    /// Every kind passed to `request_permission`, in order
    pub fn requests(&self) -> Vec<PermissionKind> {
        lock(&self.requests).clone()
    }

    pub fn settings_opened(&self) -> usize {
        self.settings_opened.load(Ordering::SeqCst)
    }
}

impl PermissionService for FakePermissionService {
    fn request_permission(&self, kind: PermissionKind) -> PermissionStatus {
        lock(&self.requests).push(kind);
        let grant = *lock(&self.grant_on_request);
        let mut statuses = lock(&self.statuses);
        let status = statuses.entry(kind).or_default();
        if *status == PermissionStatus::NotDetermined {
            *status = if grant {
                PermissionStatus::Authorized
            } else {
                PermissionStatus::Denied
            };
        }
        *status
    }

    fn permission_status(&self, kind: PermissionKind) -> PermissionStatus {
        lock(&self.statuses).get(&kind).copied().unwrap_or_default()
    }

    fn open_app_settings(&self) {
        self.settings_opened.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Photo library
// ============================================================================

#[derive(Debug)]
struct LibraryState {
    status: PermissionStatus,
    failure: Option<PhotoLibraryError>,
    saved: Vec<Image>,
}

/// In-memory photo library, authorized by default
#[derive(Debug)]
pub struct FakePhotoLibrary {
    state: Mutex<LibraryState>,
}

impl Default for FakePhotoLibrary {
    fn default() -> Self {
        Self {
            state: Mutex::new(LibraryState {
                status: PermissionStatus::Authorized,
                failure: None,
                saved: Vec::new(),
            }),
        }
    }
}

impl FakePhotoLibrary {
    pub fn set_status(&self, status: PermissionStatus) {
        lock(&self.state).status = status;
    }

    /// Make every following save fail with `error`
    pub fn fail_with(&self, error: Option<PhotoLibraryError>) {
        lock(&self.state).failure = error;
    }

    pub fn saved(&self) -> Vec<Image> {
        lock(&self.state).saved.clone()
    }
}

impl PhotoLibraryService for FakePhotoLibrary {
    fn request_permission(&self) -> bool {
        lock(&self.state).status.is_authorized()
    }

    fn save_image(&self, image: &Image) -> Result<PathBuf, PhotoLibraryError> {
        let mut state = lock(&self.state);
        if !state.status.is_authorized() {
            return Err(PhotoLibraryError::PermissionDenied);
        }
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        state.saved.push(image.clone());
        Ok(PathBuf::from(format!("fake-library/{}", state.saved.len())))
    }

    fn permission_status(&self) -> PermissionStatus {
        lock(&self.state).status
    }
}

// ============================================================================
// Error reporting
// ============================================================================

/// Error reporter keeping every reported error
#[derive(Debug, Default)]
pub struct FakeErrorReporter {
    reported: Mutex<Vec<AppError>>,
    current: Mutex<Option<ErrorPresentation>>,
    settings_opened: AtomicUsize,
}

impl FakeErrorReporter {
    /// Every error handled, in order, including cleared ones
    pub fn reported(&self) -> Vec<AppError> {
        lock(&self.reported).clone()
    }

    pub fn settings_opened(&self) -> usize {
        self.settings_opened.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for FakeErrorReporter {
    fn current_error(&self) -> Option<ErrorPresentation> {
        lock(&self.current).clone()
    }

    fn handle_error(&self, error: &Error) {
        self.handle_app_error(AppError::from(error));
    }

    fn handle_app_error(&self, error: AppError) {
        *lock(&self.current) = Some(ErrorPresentation::from(&error));
        lock(&self.reported).push(error);
    }

    fn clear_error(&self) {
        *lock(&self.current) = None;
    }

    fn open_settings(&self) {
        self.settings_opened.fetch_add(1, Ordering::SeqCst);
        self.clear_error();
    }
}
