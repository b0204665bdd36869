//! Error reporter provider

use std::sync::{Arc, PoisonError, RwLock};

use apus_domain::error::Error;
use apus_domain::ports::{ErrorReporter, PermissionService};
use apus_domain::value_objects::{AppError, ErrorPresentation};
use tracing::{debug, warn};

/// The error currently shown to the user
#[derive(Debug, Default)]
pub struct ErrorSlot {
    current: RwLock<Option<ErrorPresentation>>,
}

impl ErrorSlot {
    fn get(&self) -> Option<ErrorPresentation> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, presentation: Option<ErrorPresentation>) {
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = presentation;
    }
}

/// Error reporter presenting one error at a time
///
/// A new error replaces the one currently shown.
#[derive(Clone)]
pub struct PresentingErrorReporter {
    slot: Arc<ErrorSlot>,
    permissions: Arc<dyn PermissionService>,
}

impl PresentingErrorReporter {
    pub fn new(slot: Arc<ErrorSlot>, permissions: Arc<dyn PermissionService>) -> Self {
        Self { slot, permissions }
    }
}

impl std::fmt::Debug for PresentingErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresentingErrorReporter")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

impl ErrorReporter for PresentingErrorReporter {
    fn current_error(&self) -> Option<ErrorPresentation> {
        self.slot.get()
    }

    fn handle_error(&self, error: &Error) {
        self.handle_app_error(AppError::from(error));
    }

    fn handle_app_error(&self, error: AppError) {
        warn!(error = %error, settings = error.should_show_settings(), "Presenting error");
        self.slot.set(Some(ErrorPresentation::from(&error)));
    }

    fn clear_error(&self) {
        self.slot.set(None);
        debug!("Error dismissed");
    }

    fn open_settings(&self) {
        self.permissions.open_app_settings();
        self.clear_error();
    }
}
