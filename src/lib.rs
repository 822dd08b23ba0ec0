//! Boat management console components.
//!
//! Component logic for a boat-management UI: a review panel, an editable
//! search results grid, and a near-me map, coordinated over an in-process
//! message bus. Platform services (remote data, navigation, toasts,
//! geolocation) sit behind the trait gateways in [`platform`].

pub mod bus;
pub mod config;
pub mod errors;
pub mod map;
pub mod models;
pub mod platform;
pub mod reviews;
pub mod search;
pub mod wire;
