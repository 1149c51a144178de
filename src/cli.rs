//! Command line interface: every field of the input form is a flag.
use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    Config, ConfigError, OutputOverrides, Overrides, ProductOverrides, RequestOverrides,
    ResourceOverrides, Validate,
};

/// Find the production mix of two products that maximizes profit under time and material limits
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "production-mix", version, about)]
pub struct Cli {
    /// TOML configuration file; flags take precedence over its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first product
    #[arg(long)]
    pub first_name: Option<String>,

    /// Name of the second product
    #[arg(long)]
    pub second_name: Option<String>,

    /// Profit per unit of the first product
    #[arg(long, allow_negative_numbers = true)]
    pub first_profit: Option<f64>,

    /// Profit per unit of the second product
    #[arg(long, allow_negative_numbers = true)]
    pub second_profit: Option<f64>,

    /// Time needed by one unit of the first product
    #[arg(long, allow_negative_numbers = true)]
    pub time_first: Option<f64>,

    /// Time needed by one unit of the second product
    #[arg(long, allow_negative_numbers = true)]
    pub time_second: Option<f64>,

    /// Total time available
    #[arg(long, allow_negative_numbers = true)]
    pub time_available: Option<f64>,

    /// Material needed by one unit of the first product
    #[arg(long, allow_negative_numbers = true)]
    pub material_first: Option<f64>,

    /// Material needed by one unit of the second product
    #[arg(long, allow_negative_numbers = true)]
    pub material_second: Option<f64>,

    /// Total material available
    #[arg(long, allow_negative_numbers = true)]
    pub material_available: Option<f64>,

    /// Currency symbol printed before the profit
    #[arg(long)]
    pub currency: Option<String>,

    /// Where to write the SVG chart of the feasible region
    #[arg(long, conflicts_with = "no_chart")]
    pub chart: Option<PathBuf>,

    /// Do not draw the chart
    #[arg(long)]
    pub no_chart: bool,

    /// Number of points sampled along each constraint boundary
    #[arg(long)]
    pub samples: Option<usize>,

    /// Log debug information
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The values given on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            request: RequestOverrides {
                first: ProductOverrides {
                    name: self.first_name.clone(),
                    unit_profit: self.first_profit,
                },
                second: ProductOverrides {
                    name: self.second_name.clone(),
                    unit_profit: self.second_profit,
                },
                time: ResourceOverrides {
                    per_unit_first: self.time_first,
                    per_unit_second: self.time_second,
                    available: self.time_available,
                    ..Default::default()
                },
                material: ResourceOverrides {
                    per_unit_first: self.material_first,
                    per_unit_second: self.material_second,
                    available: self.material_available,
                    ..Default::default()
                },
            },
            output: OutputOverrides {
                currency: self.currency.clone(),
                chart: self.chart.clone(),
                samples: self.samples,
            },
        }
    }

    /// Defaults, then the configuration file, then the flags. The result is validated.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply(self.overrides());
        if self.no_chart {
            config.output.chart = None;
        }
        config.validate()?;
        Ok(config)
    }
}
