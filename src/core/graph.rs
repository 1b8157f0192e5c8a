use crate::domain::model::{
    AddCityOutcome, AddRouteOutcome, MissingEndpoint, Route, RouteEntry, RouteFilter, Selector,
};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct CityNode {
    name: String,
    routes: Vec<Route>,
}

/// Directed multigraph of bus routes keyed by city name.
///
/// Cities and the routes under each city keep their insertion order. Lookups
/// are linear scans, which is fine for the handful of cities a user enters.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    cities: Vec<CityNode>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, name: &str) -> Option<&CityNode> {
        self.cities.iter().find(|city| city.name == name)
    }

    fn node_mut(&mut self, name: &str) -> Option<&mut CityNode> {
        self.cities.iter_mut().find(|city| city.name == name)
    }

    /// Registers a city. Names are compared as-is, callers trim beforehand.
    pub fn add_city(&mut self, name: impl Into<String>) -> AddCityOutcome {
        let name = name.into();
        if self.contains_city(&name) {
            tracing::debug!("City '{}' already exists", name);
            return AddCityOutcome::AlreadyExists;
        }

        tracing::debug!("Adding city '{}'", name);
        self.cities.push(CityNode {
            name,
            routes: Vec::new(),
        });
        AddCityOutcome::Added
    }

    /// Appends a route under `origin`. Both endpoints must be registered;
    /// nothing else about the route is checked here.
    pub fn add_route(
        &mut self,
        origin: &str,
        destination: &str,
        company: impl Into<String>,
        time: impl Into<String>,
        price: f64,
    ) -> AddRouteOutcome {
        let missing = match (self.contains_city(origin), self.contains_city(destination)) {
            (true, true) => None,
            (false, true) => Some(MissingEndpoint::Origin),
            (true, false) => Some(MissingEndpoint::Destination),
            (false, false) => Some(MissingEndpoint::Both),
        };
        if let Some(missing) = missing {
            tracing::debug!(
                "Rejecting route {} -> {}: {:?} not registered",
                origin,
                destination,
                missing
            );
            return AddRouteOutcome::UnknownEndpoint(missing);
        }

        let route = Route {
            destination: destination.to_string(),
            company: company.into(),
            time: time.into(),
            price,
        };
        tracing::debug!(
            "Adding route {} -> {} ({}, {}, {:.2})",
            origin,
            destination,
            route.company,
            route.time,
            route.price
        );

        match self.node_mut(origin) {
            Some(city) => {
                city.routes.push(route);
                AddRouteOutcome::Added
            }
            None => AddRouteOutcome::UnknownEndpoint(MissingEndpoint::Origin),
        }
    }

    pub fn routes(&self, city: &str) -> &[Route] {
        self.node(city).map(|c| c.routes.as_slice()).unwrap_or(&[])
    }

    pub fn cities(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    /// Distinct company names, in the order they are first seen.
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.cities
            .iter()
            .flat_map(|city| city.routes.iter())
            .map(|route| route.company.as_str())
            .filter(|company| seen.insert(*company))
            .collect()
    }

    /// Flattens the matching routes, grouped by origin in city order.
    /// An unknown origin simply yields nothing.
    pub fn filter_routes(&self, filter: &RouteFilter) -> Vec<RouteEntry> {
        let origins: Vec<&CityNode> = match &filter.origin {
            Selector::Any => self.cities.iter().collect(),
            Selector::Exact(name) => self.node(name).into_iter().collect(),
        };

        origins
            .into_iter()
            .flat_map(|city| {
                city.routes
                    .iter()
                    .filter(move |route| filter.matches(route))
                    .map(move |route| RouteEntry::new(&city.name, route))
            })
            .collect()
    }

    pub fn count_routes(&self, city: &str) -> usize {
        self.routes(city).len()
    }

    pub fn contains_city(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn route_count(&self) -> usize {
        self.cities.iter().map(|c| c.routes.len()).sum()
    }

    /// Seeds the built-in example network.
    ///
    /// Calling this twice keeps the three cities but appends the eight
    /// routes again, since routes carry no uniqueness constraint.
    pub fn load_sample_data(&mut self) {
        crate::core::sample::seed(self);
    }
}
