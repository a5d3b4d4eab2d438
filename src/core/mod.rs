/*!
 * Core Module
 * Error handling, configuration, and fixed limits shared by the heap
 */

pub mod config;
pub mod errors;
pub mod limits;

// Re-export for convenience
pub use config::HeapConfig;
pub use errors::*;
