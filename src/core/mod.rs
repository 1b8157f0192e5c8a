pub mod export;
pub mod graph;
pub mod sample;

pub use crate::domain::model::{
    AddCityOutcome, AddRouteOutcome, LoadReport, MissingEndpoint, Route, RouteEntry, RouteFilter,
    Selector,
};
pub use crate::domain::ports::{DatasetSource, Storage};
pub use crate::utils::error::Result;
