//! Core client logic for the BioID Web Service live-detection endpoint.
//! This crate contains the configuration model, image encoding, request
//! construction and response processing, all behind a transport trait so
//! that nothing here depends on a real network.  The `cli` crate supplies
//! the argument parsing, the blocking HTTP transport and the process exit
//! handling around these functions.

pub mod api;
pub mod config;
pub mod error;
pub mod image;
pub mod model;
pub mod report;

pub use error::Error;
