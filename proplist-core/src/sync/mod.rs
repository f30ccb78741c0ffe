//! Synchronization between the client-held property list and the server.
//!
//! - [`store`] - the remote persistence contract ([`PropertyStore`])
//! - [`rest`] - the `reqwest`-backed implementation ([`RestClient`])
//! - [`engine`] - the optimistic two-phase engine ([`ListSync`])
//! - [`cancel`] - late-response suppression ([`CancellationToken`])
//! - [`error`] - structured sync errors

pub mod cancel;
pub mod engine;
pub mod error;
pub mod rest;
pub mod store;

pub use cancel::CancellationToken;
pub use engine::{ListSync, SyncOutcome};
pub use error::{SyncError, SyncResult};
pub use rest::RestClient;
pub use store::PropertyStore;
