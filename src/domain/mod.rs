// Domain layer: the GTIN value type and the tags derived from it. No I/O.

pub mod model;
