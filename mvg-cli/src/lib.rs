//! Munich public transport from the terminal.
//!
//! A command-line client for the MVG API: "when does the next U-Bahn
//! leave from here?" and "how do I get from A to B?", with transport
//! filters, departure-time selection and station aliases.

pub mod app;
pub mod cli;
pub mod config;
pub mod display;
pub mod domain;
pub mod favorites;
pub mod mvg;
pub mod stations;
