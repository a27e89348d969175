//! Request-scoped configuration and data shapes shared by both Lambdas

pub mod config;
pub mod models;
