use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Typed value held in the parameter table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => write!(f, "{}", s),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Geometry attributes compared across interferograms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtentField {
    XFirst,
    YFirst,
    Width,
    FileLength,
    XStep,
    YStep,
}

impl ExtentField {
    /// Fields in the order they are checked
    pub const ALL: [ExtentField; 6] = [
        ExtentField::XFirst,
        ExtentField::YFirst,
        ExtentField::Width,
        ExtentField::FileLength,
        ExtentField::XStep,
        ExtentField::YStep,
    ];

    /// Header attribute name
    pub fn name(&self) -> &'static str {
        match self {
            ExtentField::XFirst => "X_FIRST",
            ExtentField::YFirst => "Y_FIRST",
            ExtentField::Width => "WIDTH",
            ExtentField::FileLength => "FILE_LENGTH",
            ExtentField::XStep => "X_STEP",
            ExtentField::YStep => "Y_STEP",
        }
    }
}

impl std::fmt::Display for ExtentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read-only view of an interferogram as needed by epoch and extent checks
pub trait Interferogram {
    /// Acquisition date of the first (master) scene
    fn master(&self) -> NaiveDate;

    /// Acquisition date of the second (slave) scene
    fn slave(&self) -> NaiveDate;

    /// Value of one geometry attribute
    fn extent(&self, field: ExtentField) -> f64;
}

/// Interferogram header metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfgHeader {
    pub master: NaiveDate,
    pub slave: NaiveDate,

    // Geometry
    pub x_first: f64,       // origin longitude / easting
    pub y_first: f64,       // origin latitude / northing
    pub width: usize,       // samples per line
    pub file_length: usize, // number of lines
    pub x_step: f64,
    pub y_step: f64,
}

impl IfgHeader {
    /// Create a header with the given acquisition pair and empty geometry
    pub fn new(master: NaiveDate, slave: NaiveDate) -> Self {
        Self {
            master,
            slave,
            x_first: 0.0,
            y_first: 0.0,
            width: 0,
            file_length: 0,
            x_step: 0.0,
            y_step: 0.0,
        }
    }

    /// Set origin, raster size and pixel steps
    pub fn with_geometry(
        mut self,
        origin: (f64, f64),
        size: (usize, usize),
        step: (f64, f64),
    ) -> Self {
        self.x_first = origin.0;
        self.y_first = origin.1;
        self.width = size.0;
        self.file_length = size.1;
        self.x_step = step.0;
        self.y_step = step.1;
        self
    }
}

impl Interferogram for IfgHeader {
    fn master(&self) -> NaiveDate {
        self.master
    }

    fn slave(&self) -> NaiveDate {
        self.slave
    }

    fn extent(&self, field: ExtentField) -> f64 {
        match field {
            ExtentField::XFirst => self.x_first,
            ExtentField::YFirst => self.y_first,
            ExtentField::Width => self.width as f64,
            ExtentField::FileLength => self.file_length as f64,
            ExtentField::XStep => self.x_step,
            ExtentField::YStep => self.y_step,
        }
    }
}

/// Error types for interferogram preparation
#[derive(Debug, thiserror::Error)]
pub enum IfgError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("Cannot convert '{value}' for parameter '{key}' to {expected}")]
    Conversion {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("{0} unequal for supplied interferograms")]
    ExtentMismatch(ExtentField),

    #[error("Parameter error: {0}")]
    Parameter(String),
}

/// Result type for interferogram operations
pub type IfgResult<T> = Result<T, IfgError>;
