//! Platform adapters implementing the port traits in [`crate::app::ports`].

pub mod time;
