use crate::core::graph::RouteGraph;
use crate::domain::model::{AddRouteOutcome, LoadReport};
use crate::domain::ports::DatasetSource;
use crate::utils::error::{GraphError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub cities: Vec<String>,
    pub dataset: DatasetMeta,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMeta {
    pub name: String,
    pub description: Option<String>,
    pub include_sample: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    pub destination: String,
    pub company: String,
    pub time: String,
    pub price: f64,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is a valid regex")
    })
}

impl DatasetConfig {
    /// 從 TOML 檔案載入資料集
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析資料集
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| GraphError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPERATOR_NAME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn include_sample(&self) -> bool {
        self.dataset.include_sample.unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dataset.name", &self.dataset.name)?;

        for (index, city) in self.cities.iter().enumerate() {
            validation::validate_non_empty_string(&format!("cities[{}]", index), city)?;
        }

        for (index, route) in self.routes.iter().enumerate() {
            route
                .validate()
                .map_err(|e| GraphError::ConfigValidationError {
                    field: format!("routes[{}]", index),
                    message: e.user_friendly_message(),
                })?;
        }

        Ok(())
    }
}

impl Validate for DatasetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl Validate for RouteRecord {
    fn validate(&self) -> Result<()> {
        let origin = validation::require_input("Origin", &self.origin)?;
        let destination = validation::require_input("Destination", &self.destination)?;
        validation::require_input("Company", &self.company)?;
        validation::require_input("Departure time", &self.time)?;
        validation::validate_price(self.price)?;
        validation::validate_distinct_endpoints(origin, destination)
    }
}

impl DatasetSource for DatasetConfig {
    fn name(&self) -> &str {
        &self.dataset.name
    }

    fn load_into(&self, graph: &mut RouteGraph) -> Result<LoadReport> {
        self.validate_config()?;

        let mut report = if self.include_sample() {
            tracing::info!("🌱 Seeding sample data before dataset '{}'", self.dataset.name);
            crate::core::sample::seed(graph)
        } else {
            LoadReport::default()
        };

        for city in &self.cities {
            let name = city.trim();
            if graph.add_city(name).is_added() {
                report.cities_added += 1;
            } else {
                tracing::warn!("⚠️ City '{}' already exists, skipping", name);
                report.cities_skipped += 1;
            }
        }

        for route in &self.routes {
            let origin = route.origin.trim();
            let destination = route.destination.trim();
            match graph.add_route(
                origin,
                destination,
                route.company.trim(),
                route.time.trim(),
                route.price,
            ) {
                AddRouteOutcome::Added => report.routes_added += 1,
                AddRouteOutcome::UnknownEndpoint(missing) => {
                    tracing::warn!(
                        "⚠️ Route {} → {} rejected: {:?} city not registered",
                        origin,
                        destination,
                        missing
                    );
                    report.routes_rejected += 1;
                }
            }
        }

        tracing::info!(
            "📦 Dataset '{}' loaded: {} cities, {} routes ({} rejected)",
            self.dataset.name,
            report.cities_added,
            report.routes_added,
            report.routes_rejected
        );
        Ok(report)
    }
}
