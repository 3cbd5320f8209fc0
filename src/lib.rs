// src/lib.rs
pub mod domain;
pub mod persistence;
pub mod report;

pub use domain::*;
