//! Configuration module for the coin board application.

// Can all be private now because we have a public re-export.
mod debug;
mod endpoint;
mod persistence;
mod plot;
mod table;

// Re-export commonly used items
pub use debug::DF;
pub use endpoint::{ENDPOINT, EndpointConfig};
pub use persistence::{PERSISTENCE, StorageKeys};
pub use plot::PLOT_CONFIG;
pub use table::{SearchConfig, TABLE, TableConfig};
