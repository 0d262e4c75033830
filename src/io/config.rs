use crate::types::{IfgError, IfgResult, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// Parameter keys
pub const OBS_DIR: &str = "obsdir";
pub const IFG_FILE_LIST: &str = "ifgfilelist";
pub const OUT_DIR: &str = "outdir";
pub const NUM_SETS: &str = "nsets";
pub const SIM_DIR: &str = "simdir";
pub const AMPLITUDE_FLAG: &str = "ampflag";
pub const PERP_BASELINE_FLAG: &str = "basepflag";

/// 1: minimum, 2: maximum, 3: customize, 4: all ifgs already same size
pub const IFG_CROP_OPT: &str = "ifgcropopt";
pub const IFG_LKSX: &str = "ifglksx";
pub const IFG_LKSY: &str = "ifglksy";

pub const IFG_XFIRST: &str = "ifgxfirst";
pub const IFG_XLAST: &str = "ifgxlast";
pub const IFG_YFIRST: &str = "ifgyfirst";
pub const IFG_YLAST: &str = "ifgylast";

/// How a raw config string is turned into a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    None,
    Bool,
    Int,
    Float,
}

impl Conversion {
    fn expected(&self) -> &'static str {
        match self {
            Conversion::None => "string",
            Conversion::Bool => "boolean",
            Conversion::Int => "integer",
            Conversion::Float => "float",
        }
    }

    /// Convert a raw value for `key`
    pub fn apply(&self, key: &str, raw: &str) -> IfgResult<ParamValue> {
        let converted = match self {
            Conversion::None => Some(ParamValue::Str(raw.to_string())),
            Conversion::Bool => parse_bool(raw).map(ParamValue::Bool),
            Conversion::Int => raw.parse::<i64>().ok().map(ParamValue::Int),
            Conversion::Float => raw.parse::<f64>().ok().map(ParamValue::Float),
        };

        converted.ok_or_else(|| IfgError::Conversion {
            key: key.to_string(),
            value: raw.to_string(),
            expected: self.expected(),
        })
    }
}

/// Default entry for a recognized key
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Absent,
    Str(&'static str),
    Bool(bool),
    Int(i64),
}

impl DefaultValue {
    fn to_value(self) -> Option<ParamValue> {
        match self {
            DefaultValue::Absent => None,
            DefaultValue::Str(s) => Some(ParamValue::Str(s.to_string())),
            DefaultValue::Bool(b) => Some(ParamValue::Bool(b)),
            DefaultValue::Int(i) => Some(ParamValue::Int(i)),
        }
    }
}

/// Recognized keys with their conversion and default value
pub const PARAM_CONVERSION: [(&str, Conversion, DefaultValue); 13] = [
    (OBS_DIR, Conversion::None, DefaultValue::Str("obs")),
    (IFG_FILE_LIST, Conversion::None, DefaultValue::Str("ifg.list")),
    (OUT_DIR, Conversion::None, DefaultValue::Str("out")),
    (PERP_BASELINE_FLAG, Conversion::Bool, DefaultValue::Bool(true)),
    (AMPLITUDE_FLAG, Conversion::Bool, DefaultValue::Bool(false)),
    (NUM_SETS, Conversion::Int, DefaultValue::Int(1)),
    (IFG_CROP_OPT, Conversion::Int, DefaultValue::Absent),
    (IFG_LKSX, Conversion::Int, DefaultValue::Int(0)),
    (IFG_LKSY, Conversion::Int, DefaultValue::Int(0)),
    (IFG_XFIRST, Conversion::Float, DefaultValue::Absent),
    (IFG_XLAST, Conversion::Float, DefaultValue::Absent),
    (IFG_YFIRST, Conversion::Float, DefaultValue::Absent),
    (IFG_YLAST, Conversion::Float, DefaultValue::Absent),
];

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Parsed parameter table.
///
/// A key mapped to `None` is a recognized parameter with no value and no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    values: BTreeMap<String, Option<ParamValue>>,
}

impl Parameters {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key).and_then(|v| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ParamValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(ParamValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(ParamValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(ParamValue::Float(x)) => Some(*x),
            _ => None,
        }
    }
}

/// Parse a config file into a parameter table
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> IfgResult<Parameters> {
    log::info!("Reading config file: {}", path.as_ref().display());

    let content = fs::read_to_string(&path)?;
    parse_config_str(&content)
}

/// Parse config text into a parameter table
pub fn parse_config_str(content: &str) -> IfgResult<Parameters> {
    let mut raw: BTreeMap<String, String> = BTreeMap::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.starts_with('%') || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(IfgError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        let key = tokens[0].strip_suffix(':').unwrap_or(tokens[0]);
        if raw.insert(key.to_string(), tokens[1].to_string()).is_some() {
            log::warn!("Parameter '{}' given more than once, using last value", key);
        }
    }

    parse_pars(raw)
}

/// Convert recognized parameters and fill in defaults
fn parse_pars(raw: BTreeMap<String, String>) -> IfgResult<Parameters> {
    let mut values: BTreeMap<String, Option<ParamValue>> = raw
        .into_iter()
        .map(|(k, v)| (k, Some(ParamValue::Str(v))))
        .collect();

    for (key, conversion, default) in PARAM_CONVERSION.iter() {
        match values.get_mut(*key) {
            Some(slot) => {
                if let Some(ParamValue::Str(raw_value)) = slot {
                    let converted = conversion.apply(key, raw_value)?;
                    log::debug!("{} = {}", key, converted);
                    *slot = Some(converted);
                }
            }
            None => {
                log::debug!("{} not set, using default {:?}", key, default);
                values.insert(key.to_string(), default.to_value());
            }
        }
    }

    Ok(Parameters { values })
}

/// Crop option for bringing interferograms to a common extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropOption {
    Minimum,
    Maximum,
    Custom,
    AllSameSize,
}

impl TryFrom<i64> for CropOption {
    type Error = IfgError;

    fn try_from(value: i64) -> IfgResult<Self> {
        match value {
            1 => Ok(CropOption::Minimum),
            2 => Ok(CropOption::Maximum),
            3 => Ok(CropOption::Custom),
            4 => Ok(CropOption::AllSameSize),
            other => Err(IfgError::Parameter(format!(
                "Invalid {} value: {} (expected 1-4)",
                IFG_CROP_OPT, other
            ))),
        }
    }
}

/// Typed processing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub obs_dir: PathBuf,
    pub ifg_file_list: PathBuf,
    pub out_dir: PathBuf,
    /// Use perpendicular baselines
    pub perp_baseline_flag: bool,
    /// Amplitude data is present
    pub amplitude_flag: bool,
    pub num_sets: i64,
    pub crop_option: Option<CropOption>,
    /// Multilook factor in x (0 = no multilooking)
    pub ifg_looks_x: i64,
    /// Multilook factor in y
    pub ifg_looks_y: i64,
    // Custom crop extent
    pub x_first: Option<f64>,
    pub x_last: Option<f64>,
    pub y_first: Option<f64>,
    pub y_last: Option<f64>,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            obs_dir: PathBuf::from("obs"),
            ifg_file_list: PathBuf::from("ifg.list"),
            out_dir: PathBuf::from("out"),
            perp_baseline_flag: true,
            amplitude_flag: false,
            num_sets: 1,
            crop_option: None,
            ifg_looks_x: 0,
            ifg_looks_y: 0,
            x_first: None,
            x_last: None,
            y_first: None,
            y_last: None,
        }
    }
}

impl ProcessingParams {
    /// Read and convert a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> IfgResult<Self> {
        let params = parse_config_file(path)?;
        Self::from_parameters(&params)
    }

    /// Build typed parameters from a parsed table
    pub fn from_parameters(params: &Parameters) -> IfgResult<Self> {
        let defaults = Self::default();

        let crop_option = match optional(params, IFG_CROP_OPT, Parameters::get_int)? {
            Some(value) => Some(CropOption::try_from(value)?),
            None => None,
        };

        Ok(Self {
            obs_dir: optional(params, OBS_DIR, Parameters::get_str)?
                .map(PathBuf::from)
                .unwrap_or(defaults.obs_dir),
            ifg_file_list: optional(params, IFG_FILE_LIST, Parameters::get_str)?
                .map(PathBuf::from)
                .unwrap_or(defaults.ifg_file_list),
            out_dir: optional(params, OUT_DIR, Parameters::get_str)?
                .map(PathBuf::from)
                .unwrap_or(defaults.out_dir),
            perp_baseline_flag: optional(params, PERP_BASELINE_FLAG, Parameters::get_bool)?
                .unwrap_or(defaults.perp_baseline_flag),
            amplitude_flag: optional(params, AMPLITUDE_FLAG, Parameters::get_bool)?
                .unwrap_or(defaults.amplitude_flag),
            num_sets: optional(params, NUM_SETS, Parameters::get_int)?
                .unwrap_or(defaults.num_sets),
            crop_option,
            ifg_looks_x: optional(params, IFG_LKSX, Parameters::get_int)?
                .unwrap_or(defaults.ifg_looks_x),
            ifg_looks_y: optional(params, IFG_LKSY, Parameters::get_int)?
                .unwrap_or(defaults.ifg_looks_y),
            x_first: optional(params, IFG_XFIRST, Parameters::get_float)?,
            x_last: optional(params, IFG_XLAST, Parameters::get_float)?,
            y_first: optional(params, IFG_YFIRST, Parameters::get_float)?,
            y_last: optional(params, IFG_YLAST, Parameters::get_float)?,
        })
    }
}

/// Typed lookup; a value of the wrong type is an error
fn optional<'a, T>(
    params: &'a Parameters,
    key: &str,
    getter: fn(&'a Parameters, &str) -> Option<T>,
) -> IfgResult<Option<T>> {
    match params.get(key) {
        None => Ok(None),
        Some(value) => getter(params, key).map(Some).ok_or_else(|| {
            IfgError::Parameter(format!("Unexpected value for {}: {:?}", key, value))
        }),
    }
}
