//! SeaORM entity models for the park and trail tables.

pub mod prelude;

pub mod park;
pub mod trail;
