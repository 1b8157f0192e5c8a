use crate::domain::model::RouteEntry;
use crate::utils::error::{GraphError, Result};
use std::fmt;
use std::str::FromStr;

const HEADER: [&str; 5] = ["origin", "destination", "company", "time", "price"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn default_filename(self) -> &'static str {
        match self {
            ExportFormat::Csv => "routes.csv",
            ExportFormat::Tsv => "routes.tsv",
            ExportFormat::Json => "routes.json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(GraphError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: csv, tsv, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        };
        f.write_str(name)
    }
}

pub fn render_routes(entries: &[RouteEntry], format: ExportFormat) -> Result<String> {
    tracing::debug!("Rendering {} routes as {}", entries.len(), format);
    match format {
        ExportFormat::Csv => render_delimited(entries, b','),
        ExportFormat::Tsv => render_delimited(entries, b'\t'),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

fn render_delimited(entries: &[RouteEntry], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for entry in entries {
        let price = format!("{:.2}", entry.price);
        writer.write_record([
            entry.origin.as_str(),
            entry.destination.as_str(),
            entry.company.as_str(),
            entry.time.as_str(),
            price.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| GraphError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| GraphError::ExportError {
        message: e.to_string(),
    })
}
