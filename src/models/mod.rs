//! Data models for stored address book entries.

pub mod record;

pub use record::Record;
