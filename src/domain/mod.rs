// Domain layer: the Dog model. No dependencies beyond std/serde.

pub mod model;
