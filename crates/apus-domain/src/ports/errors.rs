//! Error Reporting Port

use crate::error::Error;
use crate::value_objects::{AppError, ErrorPresentation};

/// Turns failures into something the user can act on
pub trait ErrorReporter: Send + Sync {
    /// The error currently presented, if any
    fn current_error(&self) -> Option<ErrorPresentation>;

    fn handle_error(&self, error: &Error);

    fn handle_app_error(&self, error: AppError);

    fn clear_error(&self);

    /// Send the user to the system settings and dismiss the error
    fn open_settings(&self);
}
