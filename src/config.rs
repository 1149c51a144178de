//! Input layer: built-in defaults, TOML configuration file and validation.
//!
//! Every key of the file is optional and overrides the default it names:
//!
//! ```toml
//! [request.first]
//! name = "Produk A"
//! unit_profit = 30
//!
//! [request.time]
//! per_unit_first = 2
//! per_unit_second = 1
//! available = 100
//!
//! [output]
//! currency = "Rp"
//! chart = "feasible_region.svg"
//! samples = 100
//! ```
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::boundary::DEFAULT_SAMPLES;
use crate::problem::{ProductSpec, ProductionRequest, ResourceConstraint};
use crate::report::DEFAULT_CURRENCY;

/// Chart file written when none is configured
pub const DEFAULT_CHART: &str = "feasible_region.svg";

/// A value entered by the user that cannot be used
#[derive(Error, Debug, PartialEq, Clone)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: String, value: f64 },

    #[error("{field} cannot be negative, got {value}")]
    Negative { field: String, value: f64 },

    #[error("{field} cannot be empty")]
    EmptyName { field: String },

    #[error("at least 2 samples are needed to plot a line, got {samples}")]
    TooFewSamples { samples: usize },
}

/// An error while loading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] InputError),
}

pub type Result<T, E = InputError> = std::result::Result<T, E>;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn validate_finite(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(InputError::NonFinite {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_non_negative(field: &str, value: f64) -> Result<()> {
    validate_finite(field, value)?;
    if value < 0. {
        return Err(InputError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InputError::EmptyName {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Profits may be negative (a product sold at a loss), resource amounts may not.
impl Validate for ProductionRequest {
    fn validate(&self) -> Result<()> {
        for (key, product) in [("first", &self.first), ("second", &self.second)] {
            validate_name(&format!("request.{}.name", key), &product.name)?;
            validate_finite(&format!("request.{}.unit_profit", key), product.unit_profit)?;
        }
        for (key, resource) in [("time", &self.time), ("material", &self.material)] {
            validate_name(&format!("request.{}.name", key), &resource.name)?;
            validate_non_negative(
                &format!("request.{}.per_unit_first", key),
                resource.per_unit_first,
            )?;
            validate_non_negative(
                &format!("request.{}.per_unit_second", key),
                resource.per_unit_second,
            )?;
            validate_non_negative(&format!("request.{}.available", key), resource.available)?;
        }
        Ok(())
    }
}

/// How results are presented
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Symbol printed before amounts of money
    pub currency: String,
    /// Where to write the SVG chart, `None` to skip it
    pub chart: Option<PathBuf>,
    /// Number of points sampled along each constraint boundary
    pub samples: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            currency: DEFAULT_CURRENCY.to_string(),
            chart: Some(PathBuf::from(DEFAULT_CHART)),
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// The resolved configuration of one run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub request: ProductionRequest,
    pub output: OutputConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.request.validate()?;
        if self.output.samples < 2 {
            return Err(InputError::TooFewSamples {
                samples: self.output.samples,
            });
        }
        Ok(())
    }
}

impl Config {
    /// Defaults overridden by a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }

    /// Defaults overridden by a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overrides: Overrides = toml::from_str(content)?;
        let mut config = Config::default();
        config.apply(overrides);
        Ok(config)
    }

    /// Replace every value that is set in `overrides`
    pub fn apply(&mut self, overrides: Overrides) {
        overrides.request.apply_to(&mut self.request);
        let OutputOverrides {
            currency,
            chart,
            samples,
        } = overrides.output;
        set(&mut self.output.currency, currency);
        if let Some(chart) = chart {
            self.output.chart = Some(chart);
        }
        set(&mut self.output.samples, samples);
    }
}

fn set<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Partial configuration, as read from a file or from the command line
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub request: RequestOverrides,
    pub output: OutputOverrides,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestOverrides {
    pub first: ProductOverrides,
    pub second: ProductOverrides,
    pub time: ResourceOverrides,
    pub material: ResourceOverrides,
}

impl RequestOverrides {
    fn apply_to(self, request: &mut ProductionRequest) {
        self.first.apply_to(&mut request.first);
        self.second.apply_to(&mut request.second);
        self.time.apply_to(&mut request.time);
        self.material.apply_to(&mut request.material);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductOverrides {
    pub name: Option<String>,
    pub unit_profit: Option<f64>,
}

impl ProductOverrides {
    fn apply_to(self, product: &mut ProductSpec) {
        set(&mut product.name, self.name);
        set(&mut product.unit_profit, self.unit_profit);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceOverrides {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub per_unit_first: Option<f64>,
    pub per_unit_second: Option<f64>,
    pub available: Option<f64>,
}

impl ResourceOverrides {
    fn apply_to(self, resource: &mut ResourceConstraint) {
        set(&mut resource.name, self.name);
        set(&mut resource.unit, self.unit);
        set(&mut resource.per_unit_first, self.per_unit_first);
        set(&mut resource.per_unit_second, self.per_unit_second);
        set(&mut resource.available, self.available);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOverrides {
    pub currency: Option<String>,
    pub chart: Option<PathBuf>,
    pub samples: Option<usize>,
}
