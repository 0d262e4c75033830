//! I/O modules for reading config files and interferogram name lists

pub mod config;
pub mod namelist;

pub use config::{parse_config_file, CropOption, Parameters, ProcessingParams};
pub use namelist::parse_namelist;
