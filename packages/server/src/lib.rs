//! LeadPrep API server core.
//!
//! Wires the leadscout extraction pipeline and the interview searcher
//! behind a small JSON API: `POST /analyze`, `POST /search-interviews`,
//! `GET /health`.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::Config;
