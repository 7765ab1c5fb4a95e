// Domain layer: the employee records on both sides of the facade and the ports it talks through.

pub mod model;
pub mod ports;
