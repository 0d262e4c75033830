//! Core checks over interferogram collections

pub mod epochs;
pub mod extents;

// Re-export main types
pub use epochs::{get_epochs, EpochList};
pub use extents::{check_xy_extents, prepare_ifgs};
