//! Movie recommendation client: search, recommendations and their poster and
//! streaming enrichment, driven through a typed page model.

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod ui;
