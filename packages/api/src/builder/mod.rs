//! Fluent builder API
//!
//! Collects options and collaborators and binds a proxy onto a client.

pub mod configuration;
pub mod core;
pub mod execution;

pub use self::core::ProxyBuilder;
