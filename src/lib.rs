pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LocalStorage};

pub use app::{Notice, NoticeLevel, RouteForm, RouteSession, RouteShell};
pub use config::DatasetConfig;
pub use core::{export::ExportFormat, graph::RouteGraph, sample::SampleDataset};
pub use domain::model::{
    AddCityOutcome, AddRouteOutcome, LoadReport, MissingEndpoint, Route, RouteEntry, RouteFilter,
    Selector, ANY,
};
pub use utils::error::{GraphError, Result};
