// Domain layer: food values and the Food capability. No dependencies beyond std/serde.

pub mod model;
pub mod ports;
