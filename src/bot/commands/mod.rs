//! Discord command implementations organized by category.

/// Commands that write expense rows
pub mod expense;

/// General utility commands
pub mod general;

// Export commands
pub use expense::*;
pub use general::*;
