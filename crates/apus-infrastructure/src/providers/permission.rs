//! Permission provider
//!
//! Permission state is process-wide, so it lives in a [`GrantTable`] shared
//! by every [`PolicyPermissionService`] the registry produces.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use apus_domain::ports::PermissionService;
use apus_domain::value_objects::{PermissionKind, PermissionStatus};
use dashmap::DashMap;
use tracing::info;

use crate::config::PermissionsConfig;

/// Current permission statuses plus the policy for undetermined requests
#[derive(Debug, Default)]
pub struct GrantTable {
    statuses: DashMap<PermissionKind, PermissionStatus>,
    auto_grant: bool,
    settings_opened: AtomicUsize,
}

impl GrantTable {
    pub fn from_config(config: &PermissionsConfig) -> Self {
        let statuses = DashMap::new();
        for (kind, status) in &config.initial {
            statuses.insert(*kind, *status);
        }
        Self {
            statuses,
            auto_grant: config.auto_grant,
            settings_opened: AtomicUsize::new(0),
        }
    }

    pub fn status(&self, kind: PermissionKind) -> PermissionStatus {
        self.statuses.get(&kind).map(|s| *s).unwrap_or_default()
    }

    /// Overwrite a status, as the user would in the system settings
    pub fn set_status(&self, kind: PermissionKind, status: PermissionStatus) {
        self.statuses.insert(kind, status);
    }

    /// How many times the user was sent to the system settings
    pub fn settings_opened(&self) -> usize {
        self.settings_opened.load(Ordering::Relaxed)
    }
}

/// Permission service answering from a [`GrantTable`]
///
/// A request for an undetermined permission is decided once by the policy;
/// later requests return the recorded decision.
#[derive(Debug, Clone)]
pub struct PolicyPermissionService {
    grants: Arc<GrantTable>,
}

impl PolicyPermissionService {
    pub fn new(grants: Arc<GrantTable>) -> Self {
        Self { grants }
    }
}

impl PermissionService for PolicyPermissionService {
    fn request_permission(&self, kind: PermissionKind) -> PermissionStatus {
        let decided = if self.grants.auto_grant {
            PermissionStatus::Authorized
        } else {
            PermissionStatus::Denied
        };
        let status = *self
            .grants
            .statuses
            .entry(kind)
            .and_modify(|status| {
                if *status == PermissionStatus::NotDetermined {
                    *status = decided;
                }
            })
            .or_insert(decided);
        info!(?kind, ?status, "Permission requested");
        status
    }

    fn permission_status(&self, kind: PermissionKind) -> PermissionStatus {
        self.grants.status(kind)
    }

    fn open_app_settings(&self) {
        self.grants.settings_opened.fetch_add(1, Ordering::Relaxed);
        info!("Opening app settings");
    }
}
