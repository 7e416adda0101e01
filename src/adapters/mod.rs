//! Adapters implementing the domain ports against real backends.

pub mod providers;
pub mod sqlite;
