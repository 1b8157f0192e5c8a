// Domain layer: value types and ports. Only std/serde here.

pub mod model;
pub mod ports;
