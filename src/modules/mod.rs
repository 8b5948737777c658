//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence adapters the feature services are built on.

pub mod store;
