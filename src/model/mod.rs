//! Domain models: the desired-state template and the remote-state snapshot.

pub mod snapshot;
pub mod template;
