use crate::core::graph::RouteGraph;
use crate::domain::model::LoadReport;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;

pub const SAMPLE_CITIES: [&str; 3] = ["Colatina", "Vitória", "Linhares"];

// (origin, destination, company, time, price)
pub const SAMPLE_ROUTES: [(&str, &str, &str, &str, f64); 8] = [
    ("Colatina", "Vitória", "Viação Águia Branca", "08:00", 35.00),
    ("Colatina", "Vitória", "Viação União", "09:30", 30.00),
    ("Colatina", "Vitória", "Viação Águia Branca", "15:00", 38.00),
    ("Colatina", "Linhares", "Viação São Geraldo", "10:00", 25.00),
    ("Vitória", "Colatina", "Viação Águia Branca", "07:00", 35.00),
    ("Vitória", "Linhares", "Viação União", "11:30", 28.00),
    ("Linhares", "Vitória", "Viação São Geraldo", "06:30", 28.00),
    ("Linhares", "Colatina", "Viação Águia Branca", "14:15", 25.00),
];

pub(crate) fn seed(graph: &mut RouteGraph) -> LoadReport {
    let mut report = LoadReport::default();

    for city in SAMPLE_CITIES {
        if graph.add_city(city).is_added() {
            report.cities_added += 1;
        } else {
            report.cities_skipped += 1;
        }
    }

    for (origin, destination, company, time, price) in SAMPLE_ROUTES {
        if graph
            .add_route(origin, destination, company, time, price)
            .is_added()
        {
            report.routes_added += 1;
        } else {
            report.routes_rejected += 1;
        }
    }

    tracing::debug!("Sample data loaded: {:?}", report);
    report
}

/// The built-in example network, usable wherever a dataset is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataset;

impl DatasetSource for SampleDataset {
    fn name(&self) -> &str {
        "sample"
    }

    fn load_into(&self, graph: &mut RouteGraph) -> Result<LoadReport> {
        Ok(seed(graph))
    }
}
