use crate::config::dataset::DatasetConfig;
use crate::core::export::ExportFormat;
use crate::core::graph::RouteGraph;
use crate::core::sample::SampleDataset;
use crate::core::{DatasetSource, Storage};
use crate::domain::model::{RouteFilter, Selector};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Parser)]
#[command(name = "bus-routes")]
#[command(about = "Manage and query a small network of intercity bus routes")]
pub struct CliConfig {
    /// TOML dataset to load instead of the built-in sample data
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Start from an empty network instead of the sample data
    #[arg(long, global = true, conflicts_with = "dataset")]
    pub no_sample: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List cities with their number of outbound routes
    Cities,
    /// List every company that operates at least one route
    Companies,
    /// Show routes matching the given filters
    Routes(FilterArgs),
    /// Write the matching routes to a file
    Export(ExportArgs),
    /// Start an interactive session
    Shell,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[arg(long, default_value = "any")]
    pub origin: Selector,

    #[arg(long, default_value = "any")]
    pub destination: Selector,

    #[arg(long, default_value = "any")]
    pub company: Selector,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RouteFilter {
        RouteFilter {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            company: self.company.clone(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    #[arg(long, default_value = "./output")]
    pub output: String,

    /// File name inside the output directory (defaults to routes.<format>)
    #[arg(long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

impl ExportArgs {
    pub fn file_name(&self) -> &str {
        self.file
            .as_deref()
            .unwrap_or_else(|| self.format.default_filename())
    }
}

impl CliConfig {
    /// A dataset file takes the place of the sample data; `--no-sample`
    /// starts from an empty network.
    pub fn build_graph(&self) -> Result<RouteGraph> {
        let mut graph = RouteGraph::new();

        if let Some(path) = &self.dataset {
            tracing::info!("📁 Loading dataset from: {}", path);
            let dataset = DatasetConfig::from_file(path)?;
            dataset.load_into(&mut graph)?;
        } else if !self.no_sample {
            let report = SampleDataset.load_into(&mut graph)?;
            tracing::debug!("Sample data: {:?}", report);
        }

        Ok(graph)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dataset) = &self.dataset {
            validation::validate_path("dataset", dataset)?;
            validation::validate_file_extension("dataset", dataset, &["toml"])?;
        }

        if let Command::Export(args) = &self.command {
            validation::validate_path("output", &args.output)?;
            validation::validate_non_empty_string("file", args.file_name())?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_routes_command() {
        let config = CliConfig::parse_from([
            "bus-routes",
            "routes",
            "--origin",
            "Colatina",
            "--company",
            "all",
        ]);
        match config.command {
            Command::Routes(args) => {
                let filter = args.to_filter();
                assert_eq!(filter.origin, Selector::exact("Colatina"));
                assert!(filter.destination.is_any());
                assert!(filter.company.is_any());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_export_defaults() {
        let config = CliConfig::parse_from(["bus-routes", "export", "--format", "json"]);
        match &config.command {
            Command::Export(args) => {
                assert_eq!(args.format, ExportFormat::Json);
                assert_eq!(args.file_name(), "routes.json");
                assert_eq!(args.output, "./output");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dataset_must_be_toml() {
        let config = CliConfig::parse_from(["bus-routes", "--dataset", "routes.json", "cities"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["bus-routes", "cities", "--dataset", "routes.toml"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_build_graph_seeds_sample_by_default() {
        let config = CliConfig::parse_from(["bus-routes", "cities"]);
        let graph = config.build_graph().unwrap();
        assert_eq!(graph.city_count(), 3);
        assert_eq!(graph.route_count(), 8);
    }

    #[test]
    fn test_build_graph_without_sample() {
        let config = CliConfig::parse_from(["bus-routes", "--no-sample", "cities"]);
        let graph = config.build_graph().unwrap();
        assert_eq!(graph.city_count(), 0);
    }

    #[test]
    fn test_build_graph_dataset_replaces_sample() {
        let temp_dir = TempDir::new().unwrap();
        let dataset_path = temp_dir.path().join("coast.toml");
        std::fs::write(
            &dataset_path,
            r#"
cities = ["Serra", "Aracruz"]

[dataset]
name = "coast"
"#,
        )
        .unwrap();

        let config = CliConfig::parse_from([
            "bus-routes",
            "--dataset",
            dataset_path.to_str().unwrap(),
            "cities",
        ]);
        let graph = config.build_graph().unwrap();
        assert_eq!(graph.cities(), vec!["Serra", "Aracruz"]);
        assert_eq!(graph.route_count(), 0);
    }

    #[test]
    fn test_no_sample_conflicts_with_dataset() {
        let result = CliConfig::try_parse_from([
            "bus-routes",
            "--no-sample",
            "--dataset",
            "coast.toml",
            "cities",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_local_storage_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        let written = storage.write_file("routes.csv", b"origin").unwrap();
        assert!(written.ends_with("routes.csv"));
        assert_eq!(std::fs::read(base.join("routes.csv")).unwrap(), b"origin");
    }
}
