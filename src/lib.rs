// src/lib.rs

#[macro_use]
pub mod macros;

pub mod core;
pub mod specs;

pub mod error;
pub mod nbapi;
pub mod normalize;
pub mod params;
pub mod server;
pub mod teams;
