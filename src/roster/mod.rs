//! Student roster: record model, remote client and local cache.

mod client;
mod error;
mod record;
mod store;

pub use client::{collection_url, ClientBuildError, HttpRosterClient, RosterApi};
pub use error::{Operation, RosterError};
pub use record::{Draft, DraftField, RecordId, StudentRecord};
pub use store::{RosterIntent, RosterReducer, RosterStore};
