//! ifgprep: configuration ingestion and consistency checks for InSAR
//! interferogram batches.
//!
//! Parses processing config files and interferogram name lists, derives the
//! acquisition epochs of a batch and validates that interferograms share a
//! common extent before further processing.

pub mod types;
pub mod io;
pub mod core;

// Re-export main types and functions for easier access
pub use types::{
    ExtentField, IfgError, IfgHeader, IfgResult, Interferogram, ParamValue
};

pub use io::{parse_config_file, parse_namelist, CropOption, Parameters, ProcessingParams};
pub use crate::core::{check_xy_extents, get_epochs, prepare_ifgs, EpochList};
