// Catalog Store: role -> required skills, plus the compiled-in learning resource table.
// Loaded once in main and shared read-only through AppState.

pub mod handlers;
pub mod loader;
pub mod model;
pub mod resources;
