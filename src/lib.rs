//! goodthings - a "one good thing" journal
//!
//! Short timestamped entries kept newest-first, mirrored wholesale into a
//! local key-value slot after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::GoodThingsError;
