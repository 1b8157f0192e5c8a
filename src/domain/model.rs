use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Wildcard token accepted by [`Selector`]. `"all"` is accepted as well.
pub const ANY: &str = "any";

/// A directed edge stored under its origin city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub destination: String,
    pub company: String,
    pub time: String,
    pub price: f64,
}

/// A route flattened together with the city it leaves from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub origin: String,
    pub destination: String,
    pub company: String,
    pub time: String,
    pub price: f64,
}

impl RouteEntry {
    pub fn new(origin: &str, route: &Route) -> Self {
        Self {
            origin: origin.to_string(),
            destination: route.destination.clone(),
            company: route.company.clone(),
            time: route.time.clone(),
            price: route.price,
        }
    }
}

impl fmt::Display for RouteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} | {} | {} | R$ {:.2}",
            self.origin, self.destination, self.company, self.time, self.price
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    Any,
    Exact(String),
}

impl Selector {
    pub fn exact(value: impl Into<String>) -> Self {
        Selector::Exact(value.into())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selector::Any => true,
            Selector::Exact(expected) => expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == ANY || trimmed == "all" {
            Ok(Selector::Any)
        } else {
            Ok(Selector::Exact(trimmed.to_string()))
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Any => f.write_str(ANY),
            Selector::Exact(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteFilter {
    pub origin: Selector,
    pub destination: Selector,
    pub company: Selector,
}

impl RouteFilter {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Selector::exact(origin);
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Selector::exact(destination);
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Selector::exact(company);
        self
    }

    pub fn matches(&self, route: &Route) -> bool {
        self.destination.matches(&route.destination) && self.company.matches(&route.company)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddCityOutcome {
    Added,
    AlreadyExists,
}

impl AddCityOutcome {
    pub fn is_added(self) -> bool {
        self == AddCityOutcome::Added
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEndpoint {
    Origin,
    Destination,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddRouteOutcome {
    Added,
    UnknownEndpoint(MissingEndpoint),
}

impl AddRouteOutcome {
    pub fn is_added(self) -> bool {
        self == AddRouteOutcome::Added
    }
}

/// Counters produced when a dataset is applied to a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub cities_added: usize,
    pub cities_skipped: usize,
    pub routes_added: usize,
    pub routes_rejected: usize,
}
