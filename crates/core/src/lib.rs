//! Domain layer for the roster role service.
//!
//! Holds the role entity, the storage port that persistence adapters
//! implement, and the [`manager::RoleManager`] service that applies the
//! role lifecycle rules on top of any [`store::RoleStore`].

pub mod error;
pub mod manager;
pub mod memory;
pub mod role;
pub mod store;
pub mod types;
