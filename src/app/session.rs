use crate::core::graph::RouteGraph;
use crate::domain::model::{
    AddCityOutcome, AddRouteOutcome, MissingEndpoint, RouteEntry, RouteFilter, Selector,
};
use crate::utils::error::Result;
use crate::utils::validation;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// User-facing feedback for a single action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.level {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
            NoticeLevel::Info => "ℹ️",
        };
        write!(f, "{} {}", icon, self.message)
    }
}

/// Raw values of the "add route" form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteForm {
    pub origin: String,
    pub destination: String,
    pub company: String,
    pub time: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
struct ValidRoute<'a> {
    origin: &'a str,
    destination: &'a str,
    company: &'a str,
    time: &'a str,
    price: f64,
}

impl RouteForm {
    fn validate(&self) -> Result<ValidRoute<'_>> {
        let origin = validation::require_input("Origin", &self.origin)?;
        let destination = validation::require_input("Destination", &self.destination)?;
        let company = validation::require_input("Company", &self.company)?;
        let time = validation::require_input("Departure time", &self.time)?;
        let price = validation::parse_price(&self.price)?;
        validation::validate_distinct_endpoints(origin, destination)?;

        Ok(ValidRoute {
            origin,
            destination,
            company,
            time,
            price,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitySummary {
    pub name: String,
    pub route_count: usize,
}

impl CitySummary {
    pub fn label(&self) -> String {
        if self.route_count == 1 {
            "1 route".to_string()
        } else {
            format!("{} routes", self.route_count)
        }
    }
}

/// Presentation state wrapped around a graph: input handling, the active
/// filter and the derived lists a front end renders.
#[derive(Debug, Clone, Default)]
pub struct RouteSession {
    graph: RouteGraph,
    filter: RouteFilter,
}

impl RouteSession {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            graph,
            filter: RouteFilter::any(),
        }
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    pub fn submit_city(&mut self, raw_name: &str) -> Notice {
        let name = match validation::require_input("City name", raw_name) {
            Ok(name) => name,
            Err(e) => return Notice::error(e.user_friendly_message()),
        };

        match self.graph.add_city(name) {
            AddCityOutcome::Added => {
                tracing::info!("🏙️ City '{}' added", name);
                self.refresh_filter();
                Notice::success(format!("City {} added successfully", name))
            }
            AddCityOutcome::AlreadyExists => Notice::error(format!("City {} already exists", name)),
        }
    }

    pub fn submit_route(&mut self, form: &RouteForm) -> Notice {
        let route = match form.validate() {
            Ok(route) => route,
            Err(e) => return Notice::error(e.user_friendly_message()),
        };

        match self.graph.add_route(
            route.origin,
            route.destination,
            route.company,
            route.time,
            route.price,
        ) {
            AddRouteOutcome::Added => {
                tracing::info!("🚌 Route {} → {} added", route.origin, route.destination);
                self.refresh_filter();
                Notice::success(format!(
                    "Route {} → {} added successfully",
                    route.origin, route.destination
                ))
            }
            AddRouteOutcome::UnknownEndpoint(missing) => {
                let which = match missing {
                    MissingEndpoint::Origin => "origin",
                    MissingEndpoint::Destination => "destination",
                    MissingEndpoint::Both => "origin and destination",
                };
                Notice::error(format!("Could not add route: unknown {}", which))
            }
        }
    }

    pub fn filter(&self) -> &RouteFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: RouteFilter) {
        self.filter = filter;
    }

    pub fn visible_routes(&self) -> Vec<RouteEntry> {
        self.graph.filter_routes(&self.filter)
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            cities: self.graph.cities().into_iter().map(String::from).collect(),
            companies: self
                .graph
                .companies()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Keeps each selected value only while it is still offered as an option.
    pub fn refresh_filter(&mut self) {
        let options = self.filter_options();
        retain_if_offered(&mut self.filter.origin, &options.cities);
        retain_if_offered(&mut self.filter.destination, &options.cities);
        retain_if_offered(&mut self.filter.company, &options.companies);
    }

    pub fn city_summaries(&self) -> Vec<CitySummary> {
        self.graph
            .cities()
            .into_iter()
            .map(|name| CitySummary {
                name: name.to_string(),
                route_count: self.graph.count_routes(name),
            })
            .collect()
    }

    /// Preselected origin and destination for a new route: the first two
    /// cities, or the only one twice.
    pub fn default_endpoints(&self) -> Option<(String, String)> {
        let cities = self.graph.cities();
        let origin = cities.first()?;
        let destination = cities.get(1).unwrap_or(origin);
        Some((origin.to_string(), destination.to_string()))
    }
}

fn retain_if_offered(selector: &mut Selector, offered: &[String]) {
    let still_offered = match &*selector {
        Selector::Any => true,
        Selector::Exact(value) => offered.iter().any(|option| option == value),
    };
    if !still_offered {
        tracing::debug!("Filter value '{}' no longer offered, resetting", selector);
        *selector = Selector::Any;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(origin: &str, destination: &str, company: &str, time: &str, price: &str) -> RouteForm {
        RouteForm {
            origin: origin.to_string(),
            destination: destination.to_string(),
            company: company.to_string(),
            time: time.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn test_submit_city_trims_and_reports() {
        let mut session = RouteSession::default();
        let notice = session.submit_city("  Serra ");
        assert_eq!(notice, Notice::success("City Serra added successfully"));
        assert_eq!(session.graph().cities(), vec!["Serra"]);

        let notice = session.submit_city("Serra");
        assert_eq!(notice, Notice::error("City Serra already exists"));
    }

    #[test]
    fn test_submit_blank_city() {
        let mut session = RouteSession::default();
        let notice = session.submit_city("   ");
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "City name is required");
        assert_eq!(session.graph().city_count(), 0);
    }

    #[test]
    fn test_submit_route_rejections_leave_graph_unchanged() {
        let mut graph = RouteGraph::new();
        graph.load_sample_data();
        let mut session = RouteSession::new(graph);

        let cases = [
            form("Colatina", "Colatina", "Co", "08:00", "10"),
            form("Colatina", "Vitória", "  ", "08:00", "10"),
            form("Colatina", "Vitória", "Co", "", "10"),
            form("Colatina", "Vitória", "Co", "08:00", "ten"),
            form("Colatina", "Serra", "Co", "08:00", "10"),
        ];
        for case in &cases {
            let notice = session.submit_route(case);
            assert_eq!(notice.level, NoticeLevel::Error, "{:?}", case);
        }
        assert_eq!(session.graph().route_count(), 8);
    }

    #[test]
    fn test_submit_route_messages() {
        let mut session = RouteSession::default();
        session.submit_city("A");
        session.submit_city("B");

        let notice = session.submit_route(&form("A", "A", "Co", "08:00", "1"));
        assert_eq!(notice.message, "Origin and destination cannot be the same");

        let notice = session.submit_route(&form("A", "C", "Co", "08:00", "1"));
        assert_eq!(notice.message, "Could not add route: unknown destination");

        let notice = session.submit_route(&form("A", "B", " Co ", "08:00", "12.5"));
        assert_eq!(notice, Notice::success("Route A → B added successfully"));
        assert_eq!(session.graph().routes("A")[0].company, "Co");
        assert_eq!(session.graph().routes("A")[0].price, 12.5);
    }

    #[test]
    fn test_refresh_filter_keeps_valid_selection() {
        let mut graph = RouteGraph::new();
        graph.load_sample_data();
        let mut session = RouteSession::new(graph);

        session.set_filter(
            RouteFilter::any()
                .origin("Colatina")
                .company("Viação Inexistente"),
        );
        session.refresh_filter();

        assert_eq!(session.filter().origin, Selector::exact("Colatina"));
        assert!(session.filter().company.is_any());
        assert_eq!(session.visible_routes().len(), 4);
    }

    #[test]
    fn test_filter_options_and_summaries() {
        let mut graph = RouteGraph::new();
        graph.load_sample_data();
        graph.add_city("Serra");
        let session = RouteSession::new(graph);

        let options = session.filter_options();
        assert_eq!(options.cities.len(), 4);
        assert_eq!(options.companies.len(), 3);

        let labels: Vec<String> = session.city_summaries().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["4 routes", "2 routes", "2 routes", "0 routes"]);
    }

    #[test]
    fn test_default_endpoints() {
        let mut session = RouteSession::default();
        assert_eq!(session.default_endpoints(), None);

        session.submit_city("A");
        assert_eq!(
            session.default_endpoints(),
            Some(("A".to_string(), "A".to_string()))
        );

        session.submit_city("B");
        assert_eq!(
            session.default_endpoints(),
            Some(("A".to_string(), "B".to_string()))
        );
    }

    #[test]
    fn test_single_route_label() {
        let summary = CitySummary {
            name: "A".to_string(),
            route_count: 1,
        };
        assert_eq!(summary.label(), "1 route");
    }
}
