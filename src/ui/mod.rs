//! Terminal presentation layer for the Roadie binary.

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
