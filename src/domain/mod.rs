// Domain layer: core models and ports (interfaces). No filesystem access
// here beyond the path types in signatures.

pub mod model;
pub mod ports;
