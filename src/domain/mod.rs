// Domain layer: copy outcomes and the ports the copier is written against.

pub mod model;
pub mod ports;
