//! Near-me map component.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::BoatConsoleError;
use crate::models::{BoatRecord, BoatTypeId, GeoPosition, MapMarker};
use crate::platform::{BoatDataService, LocationProvider, Notification, Notifier};
use crate::wire::WiredInput;

const LABEL_YOU_ARE_HERE: &str = "You are here!";
const ICON_STANDARD_USER: &str = "standard:user";
const ERROR_TITLE: &str = "Error loading Boats Near Me";

/// Map of boats near the device, one marker per boat plus a fixed "self"
/// marker at the device position.
///
/// The device position is resolved once, on the first render. Until it
/// resolves no fetch fires and the component stays in its initial loading
/// state; when geolocation is unavailable it stays there indefinitely.
/// Known degenerate case, kept as-is and pinned by a test.
pub struct NearMeMap {
    service: Arc<dyn BoatDataService>,
    location: Arc<dyn LocationProvider>,
    notifier: Arc<dyn Notifier>,
    boat_type: WiredInput<BoatTypeId>,
    position: WiredInput<GeoPosition>,
    markers: Vec<MapMarker>,
    error: Option<BoatConsoleError>,
    loading: bool,
    rendered: bool,
}

impl NearMeMap {
    pub fn new(
        service: Arc<dyn BoatDataService>,
        location: Arc<dyn LocationProvider>,
        notifier: Arc<dyn Notifier>,
        boat_type: BoatTypeId,
    ) -> Self {
        Self {
            service,
            location,
            notifier,
            boat_type: WiredInput::with_value("boat_type", boat_type),
            position: WiredInput::new("position"),
            markers: Vec::new(),
            error: None,
            loading: true,
            rendered: false,
        }
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn position(&self) -> Option<GeoPosition> {
        self.position.get().copied()
    }

    pub fn error(&self) -> Option<&BoatConsoleError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// First-render hook. Resolves the device position exactly once; a
    /// resolved position is a wired input of the nearby-boat fetch, so
    /// the fetch fires as soon as the position lands.
    pub async fn handle_render(&mut self) {
        if self.rendered {
            return;
        }
        self.rendered = true;

        match self.location.current_position().await {
            Ok(pos) => {
                debug!(
                    latitude = pos.latitude,
                    longitude = pos.longitude,
                    "device position resolved"
                );
                if self.position.set(pos) {
                    self.dispatch_fetch().await;
                }
            }
            Err(e) => {
                warn!("device position unavailable: {}", e);
                self.error = Some(e);
            }
        }
    }

    /// Update the type filter; re-fetches when it changed and a position
    /// is present.
    pub async fn set_boat_type(&mut self, filter: BoatTypeId) {
        if self.boat_type.set(filter) && self.position.get().is_some() {
            self.dispatch_fetch().await;
        }
    }

    /// Fetch boats near the resolved position and rebuild the markers.
    ///
    /// On failure the existing markers are left untouched; no partial
    /// marker list is ever shown.
    async fn dispatch_fetch(&mut self) {
        let Some(pos) = self.position.get().copied() else {
            return;
        };
        let filter = self.boat_type.get().cloned().unwrap_or_default();

        match self
            .service
            .fetch_boats_near_location(pos.latitude, pos.longitude, &filter)
            .await
        {
            Ok(boats) => {
                self.markers = Self::build_markers(pos, &boats);
                self.loading = false;
            }
            Err(e) => {
                warn!(filter = filter.as_str(), "nearby boat fetch failed: {}", e);
                self.notifier
                    .notify(Notification::error(ERROR_TITLE, e.service_message()));
                self.loading = false;
            }
        }
    }

    /// Self marker first, then one marker per boat in input order.
    fn build_markers(origin: GeoPosition, boats: &[BoatRecord]) -> Vec<MapMarker> {
        let mut markers = Vec::with_capacity(boats.len() + 1);
        markers.push(MapMarker {
            title: LABEL_YOU_ARE_HERE.to_string(),
            icon: Some(ICON_STANDARD_USER.to_string()),
            location: origin,
        });
        markers.extend(boats.iter().map(|boat| MapMarker {
            title: boat.name.clone(),
            icon: None,
            location: GeoPosition {
                latitude: boat.latitude,
                longitude: boat.longitude,
            },
        }));
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoatId;

    fn boat(id: &str, name: &str, lat: f64, lon: f64) -> BoatRecord {
        BoatRecord {
            id: BoatId::from(id),
            name: name.to_string(),
            description: String::new(),
            length: 20.0,
            price: 10_000.0,
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn self_marker_is_always_first() {
        let origin = GeoPosition {
            latitude: 60.19,
            longitude: 24.94,
        };
        let boats = vec![
            boat("b1", "Gallifrey Falls", 60.2, 24.9),
            boat("b2", "Sunseeker", 60.3, 25.0),
        ];

        let markers = NearMeMap::build_markers(origin, &boats);

        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].title, "You are here!");
        assert_eq!(markers[0].icon.as_deref(), Some("standard:user"));
        assert_eq!(markers[0].location, origin);
        assert_eq!(markers[1].title, "Gallifrey Falls");
        assert_eq!(markers[2].title, "Sunseeker");
        assert!(markers[1].icon.is_none());
    }

    #[test]
    fn empty_result_yields_only_self_marker() {
        let origin = GeoPosition {
            latitude: 60.19,
            longitude: 24.94,
        };

        let markers = NearMeMap::build_markers(origin, &[]);

        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].title, "You are here!");
    }
}
