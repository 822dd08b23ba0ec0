//! Search results grid component.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::bus::{LoadEvent, MessageBus};
use crate::models::{BoatId, BoatRecord, BoatTypeId, BoatUpdate, ObjectSchema};
use crate::platform::{BoatDataService, FetchPolicy, Notification, Notifier};
use crate::wire::WiredInput;

const SUCCESS_TITLE: &str = "Success";
const MESSAGE_SHIP_IT: &str = "Ship it!";
const ERROR_TITLE: &str = "Error";

/// Ring size for the per-grid load event channel.
const EVENT_CAPACITY: usize = 16;

/// Column kind used by the grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Currency,
}

/// Descriptor for one editable grid column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub label: String,
    pub field: String,
    pub kind: ColumnKind,
    pub editable: bool,
}

/// Editable grid of boats matching the active type filter.
///
/// Edits are staged as drafts keyed by boat id and committed as one
/// batched update; tile selection is broadcast on the shared bus.
pub struct SearchResultsGrid {
    service: Arc<dyn BoatDataService>,
    notifier: Arc<dyn Notifier>,
    bus: MessageBus,
    events: broadcast::Sender<LoadEvent>,
    boat_type: WiredInput<BoatTypeId>,
    boats: Vec<BoatRecord>,
    columns: Vec<ColumnDescriptor>,
    selected_boat_id: Option<BoatId>,
    drafts: Vec<BoatUpdate>,
    loading: bool,
}

impl SearchResultsGrid {
    /// Connect the grid, deriving the column descriptors from the object
    /// schema. The schema is looked up exactly once per grid.
    pub async fn connect(
        service: Arc<dyn BoatDataService>,
        notifier: Arc<dyn Notifier>,
        bus: MessageBus,
        boat_object: &str,
    ) -> Result<Self, crate::errors::BoatConsoleError> {
        let schema = service.object_schema(boat_object).await?;
        let columns = Self::build_columns(&schema);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            service,
            notifier,
            bus,
            events,
            boat_type: WiredInput::new("boat_type"),
            boats: Vec::new(),
            columns,
            selected_boat_id: None,
            drafts: Vec::new(),
            loading: false,
        })
    }

    /// Subscribe to this grid's `Loading`/`DoneLoading` events.
    pub fn subscribe_load_events(&self) -> broadcast::Receiver<LoadEvent> {
        self.events.subscribe()
    }

    pub fn boats(&self) -> &[BoatRecord] {
        &self.boats
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn selected_boat_id(&self) -> Option<&BoatId> {
        self.selected_boat_id.as_ref()
    }

    pub fn drafts(&self) -> &[BoatUpdate] {
        &self.drafts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Update the active type filter and fetch the matching boats.
    ///
    /// An unchanged filter settles immediately without a remote call.
    pub async fn search_boats(&mut self, filter: BoatTypeId) {
        self.loading = true;
        self.notify_loading(true);
        if self.boat_type.set(filter) {
            self.dispatch_fetch(FetchPolicy::CachedOk).await;
        } else {
            self.loading = false;
            self.notify_loading(false);
        }
    }

    /// Force a re-fetch of the current collection, bypassing any cache.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.notify_loading(true);
        self.dispatch_fetch(FetchPolicy::BypassCache).await;
    }

    /// Record a tile selection and broadcast it on the shared channel.
    pub fn select_tile(&mut self, boat_id: BoatId) {
        self.selected_boat_id = Some(boat_id.clone());
        self.bus.publish_boat_selected(boat_id);
    }

    /// Stage a draft edit, merging with any staged draft for the same
    /// boat.
    pub fn stage_edit(&mut self, edit: BoatUpdate) {
        if let Some(existing) = self.drafts.iter_mut().find(|d| d.id == edit.id) {
            existing.merge(edit);
        } else {
            self.drafts.push(edit);
        }
    }

    /// Commit the staged drafts as one batched update.
    ///
    /// The staged drafts are cleared exactly once per invocation, whether
    /// the write succeeds or fails. On success a fixed success toast is
    /// shown before the triggered refresh completes; on failure the
    /// service message is surfaced verbatim and the displayed boats are
    /// left untouched.
    pub async fn save(&mut self) {
        self.notify_loading(true);
        let drafts = std::mem::take(&mut self.drafts);

        match self.service.update_boats(&drafts).await {
            Ok(()) => {
                info!(count = drafts.len(), "boat update saved");
                self.notifier
                    .notify(Notification::success(SUCCESS_TITLE, MESSAGE_SHIP_IT));
                self.refresh().await;
            }
            Err(e) => {
                warn!("boat update failed: {}", e);
                self.notifier
                    .notify(Notification::error(ERROR_TITLE, e.service_message()));
                self.notify_loading(false);
            }
        }
    }

    /// Emit `Loading` when true, `DoneLoading` when false.
    pub fn notify_loading(&self, is_loading: bool) {
        let event = if is_loading {
            LoadEvent::Loading
        } else {
            LoadEvent::DoneLoading
        };
        let _ = self.events.send(event);
    }

    /// Run the boat fetch for the current filter and settle.
    ///
    /// A failed read never leaves stale rows behind: the collection is
    /// cleared. Both paths clear the loading flag and emit `DoneLoading`.
    async fn dispatch_fetch(&mut self, policy: FetchPolicy) {
        let filter = self.boat_type.get().cloned().unwrap_or_default();
        match self.service.fetch_boats(&filter, policy).await {
            Ok(boats) => {
                debug!(
                    filter = filter.as_str(),
                    count = boats.len(),
                    "fetched boats"
                );
                self.boats = boats;
            }
            Err(e) => {
                warn!(filter = filter.as_str(), "boat fetch failed: {}", e);
                self.boats.clear();
            }
        }
        self.loading = false;
        self.notify_loading(false);
    }

    /// Four editable columns; labels come from the schema metadata,
    /// falling back to a capitalised field name.
    fn build_columns(schema: &ObjectSchema) -> Vec<ColumnDescriptor> {
        [
            ("name", ColumnKind::Text),
            ("length", ColumnKind::Number),
            ("price", ColumnKind::Currency),
            ("description", ColumnKind::Text),
        ]
        .into_iter()
        .map(|(field, kind)| ColumnDescriptor {
            label: schema
                .label_for(field)
                .map(str::to_string)
                .unwrap_or_else(|| capitalise(field)),
            field: field.to_string(),
            kind,
            editable: true,
        })
        .collect()
    }
}

fn capitalise(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
