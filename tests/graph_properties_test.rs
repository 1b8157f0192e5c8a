use bus_routes::{
    AddCityOutcome, AddRouteOutcome, MissingEndpoint, RouteEntry, RouteFilter, RouteGraph,
};

fn sample_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.load_sample_data();
    graph
}

#[test]
fn test_duplicate_city_is_rejected_once() {
    let mut graph = RouteGraph::new();
    for name in ["Colatina", "São Mateus", "", "colatina"] {
        assert_eq!(graph.add_city(name), AddCityOutcome::Added);
        assert_eq!(graph.add_city(name), AddCityOutcome::AlreadyExists);
        assert_eq!(graph.cities().iter().filter(|c| **c == name).count(), 1);
    }
    assert_eq!(graph.city_count(), 4);
}

#[test]
fn test_route_between_unregistered_cities_changes_nothing() {
    let mut graph = sample_graph();
    let before = graph.routes("Serra").to_vec();

    assert_eq!(
        graph.add_route("Serra", "Guarapari", "Co", "08:00", 10.0),
        AddRouteOutcome::UnknownEndpoint(MissingEndpoint::Both)
    );
    assert_eq!(graph.routes("Serra"), before.as_slice());
    assert_eq!(graph.route_count(), 8);
}

#[test]
fn test_single_route_round_trip() {
    let mut graph = RouteGraph::new();
    graph.add_city("X");
    graph.add_city("Y");
    assert!(graph.add_route("X", "Y", "Co", "08:00", 10.0).is_added());

    let routes = graph.routes("X");
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].destination, "Y");
    assert_eq!(routes[0].company, "Co");
    assert_eq!(routes[0].time, "08:00");
    assert_eq!(routes[0].price, 10.0);
    assert_eq!(graph.count_routes("X"), 1);
    assert_eq!(graph.count_routes("Y"), 0);
}

#[test]
fn test_unfiltered_query_matches_concatenated_routes() {
    let graph = sample_graph();

    let expected: Vec<RouteEntry> = graph
        .cities()
        .into_iter()
        .flat_map(|city| {
            graph
                .routes(city)
                .iter()
                .map(move |route| RouteEntry::new(city, route))
        })
        .collect();

    assert_eq!(graph.filter_routes(&RouteFilter::any()), expected);
}

#[test]
fn test_filter_by_unregistered_origin_is_empty() {
    let graph = sample_graph();
    assert!(graph
        .filter_routes(&RouteFilter::any().origin("Guarapari"))
        .is_empty());
}

#[test]
fn test_filter_combinations() {
    let graph = sample_graph();

    let to_vitoria = graph.filter_routes(&RouteFilter::any().destination("Vitória"));
    let times: Vec<&str> = to_vitoria.iter().map(|e| e.time.as_str()).collect();
    assert_eq!(times, vec!["08:00", "09:30", "15:00", "06:30"]);

    let narrowed = graph.filter_routes(
        &RouteFilter::any()
            .origin("Colatina")
            .destination("Vitória")
            .company("Viação Águia Branca"),
    );
    let prices: Vec<f64> = narrowed.iter().map(|e| e.price).collect();
    assert_eq!(prices, vec![35.0, 38.0]);
}

#[test]
fn test_sample_data_twice_doubles_routes_only() {
    let mut graph = RouteGraph::new();
    graph.load_sample_data();
    graph.load_sample_data();

    // Cities deduplicate, routes do not: left as-is on purpose.
    assert_eq!(graph.city_count(), 3);
    assert_eq!(graph.route_count(), 16);
    assert_eq!(graph.count_routes("Colatina"), 8);
}

#[test]
fn test_repeated_company_listed_once() {
    let mut graph = RouteGraph::new();
    graph.add_city("A");
    graph.add_city("B");
    graph.add_route("A", "B", "Viação União", "08:00", 10.0);
    graph.add_route("B", "A", "Viação União", "18:00", 10.0);

    assert_eq!(graph.companies(), vec!["Viação União"]);
}

#[test]
fn test_self_loop_allowed_in_core() {
    let mut graph = RouteGraph::new();
    graph.add_city("A");
    assert!(graph.add_route("A", "A", "Circular", "12:00", 0.0).is_added());
    assert_eq!(
        graph.filter_routes(&RouteFilter::any().destination("A")).len(),
        1
    );
}
