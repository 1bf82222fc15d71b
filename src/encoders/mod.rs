pub mod algorithms;
pub mod integer;
