//! HTTP route handlers outside the quoting module

pub mod admin;
pub mod health;
