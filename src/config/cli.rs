use crate::core::report::ReportFormat;
use crate::domain::model::Dog;
use crate::utils::error::{KennelError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kennel")]
#[command(about = "Build dogs and hear them bark")]
pub struct CliConfig {
    /// Name of a single dog
    #[arg(conflicts_with = "roster")]
    pub name: Option<String>,

    /// Color of the single dog
    #[arg(long, requires = "name")]
    pub color: Option<String>,

    /// TOML file listing dogs under [[dogs]]
    #[arg(long)]
    pub roster: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The dog described by the positional arguments, if any.
    pub fn single_dog(&self) -> Option<Dog> {
        self.name
            .as_ref()
            .map(|name| Dog::from_parts(name.clone(), self.color.clone()))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // clap rejects a name combined with --roster before this runs.
        if self.name.is_some() {
            return Ok(());
        }
        let roster = validate_required_field("a dog name or --roster", &self.roster)?;
        validate_path("roster", roster)
    }
}
