//! Database access layer

pub mod queries;
