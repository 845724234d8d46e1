pub mod config;
pub mod games;
pub mod id_generator;
pub mod identifiers;
pub mod logger;
pub mod store;

pub use identifiers::*;
