use crate::domain::model::Dog;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// The three derived views of a dog, captured for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogReport {
    pub name: String,
    pub color: Option<String>,
    pub shout: String,
}

impl From<&Dog> for DogReport {
    fn from(dog: &Dog) -> Self {
        Self {
            name: dog.get_name(),
            color: dog.get_color().map(str::to_owned),
            shout: dog.shout(),
        }
    }
}

impl DogReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "name:  {}", self.name);
        if let Some(color) = &self.color {
            let _ = writeln!(out, "color: {}", color);
        }
        let _ = writeln!(out, "shout: {}", self.shout);
        out
    }
}

pub fn render(dogs: &[Dog], format: ReportFormat) -> Result<String> {
    let reports: Vec<DogReport> = dogs.iter().map(DogReport::from).collect();
    tracing::debug!("Rendering {} dog(s) as {:?}", reports.len(), format);

    match format {
        ReportFormat::Text => Ok(reports
            .iter()
            .map(DogReport::to_text)
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&reports)?),
    }
}
