use roster_core::manager::RoleManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the manager keeps its store behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Role lifecycle service over the configured store.
    pub roles: RoleManager,
}
