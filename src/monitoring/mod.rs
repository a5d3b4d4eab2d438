/*!
 * Monitoring Module
 * Tracing subscriber setup
 */

pub mod tracer;

pub use tracer::{init_tracing, try_init_tracing};
