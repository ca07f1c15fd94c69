//! Core data model and relationship store for Orbit.
//!
//! [`Store`] owns contacts, interactions, energy history and reminders, and
//! saves a [`Snapshot`](model::Snapshot) through an injected
//! [`Persistence`](storage::Persistence) after every mutation.

pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;

pub use config::OrbitConfig;
pub use error::CoreError;
pub use store::{Applied, ContactWithInteractions, Opened, Stats, Store};
