// Library exports for integration tests and reusable components

pub mod collection;
pub mod config;
pub mod search;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;
