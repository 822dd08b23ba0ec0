//! Platform service gateways.
//!
//! The hosting platform owns remote data access, navigation, toast
//! notifications and device geolocation. This module defines the trait
//! seams for those collaborators; trait objects let the hosting
//! integration supply real implementations while tests substitute mocks.

use async_trait::async_trait;

use crate::errors::BoatConsoleError;
use crate::models::{BoatId, BoatRecord, BoatTypeId, BoatUpdate, GeoPosition, ObjectSchema, Review};

/// Read behaviour for boat collection fetches.
///
/// `CachedOk` is the ordinary reactive read; `BypassCache` forces the
/// service to re-fetch, as used by an explicit refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    CachedOk,
    BypassCache,
}

/// Remote boat data service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoatDataService: Send + Sync {
    /// Fetch all reviews for the given boat.
    async fn fetch_reviews(&self, boat_id: &BoatId) -> Result<Vec<Review>, BoatConsoleError>;

    /// Fetch boats matching the type filter.
    async fn fetch_boats(
        &self,
        filter: &BoatTypeId,
        policy: FetchPolicy,
    ) -> Result<Vec<BoatRecord>, BoatConsoleError>;

    /// Fetch boats near a position, restricted to the type filter.
    async fn fetch_boats_near_location(
        &self,
        latitude: f64,
        longitude: f64,
        filter: &BoatTypeId,
    ) -> Result<Vec<BoatRecord>, BoatConsoleError>;

    /// Batched upsert of draft edits.
    async fn update_boats(&self, edits: &[BoatUpdate]) -> Result<(), BoatConsoleError>;

    /// One-shot object schema lookup.
    async fn object_schema(&self, object: &str) -> Result<ObjectSchema, BoatConsoleError>;
}

/// Device geolocation source.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the device's current position.
    async fn current_position(&self) -> Result<GeoPosition, BoatConsoleError>;
}

/// Platform record navigation. Fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate_to_record(&self, record_id: &BoatId);
}

/// Toast notification surface.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Error,
}

/// User-visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: NotificationVariant::Error,
        }
    }
}
