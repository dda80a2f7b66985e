//! Task Command Wrappers
//!
//! Fire-and-forget bindings from UI events to the mutation coordinator,
//! organized by domain.

mod dialog;
mod task;

// Re-export all public items
pub use dialog::*;
pub use task::*;
