pub mod bbox;
pub mod group;
pub mod extents;
pub mod interval;
pub mod cylinder;
pub mod proxy;
pub mod numeric;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;
