use crate::core::graph::RouteGraph;
use crate::domain::model::LoadReport;
use crate::utils::error::Result;

/// Something that can seed a graph with cities and routes.
pub trait DatasetSource {
    fn name(&self) -> &str;
    fn load_into(&self, graph: &mut RouteGraph) -> Result<LoadReport>;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}
