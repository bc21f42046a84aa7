#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod agent;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod guardrails;
#[doc(hidden)]
pub mod http;
pub mod models;
pub mod picker;
pub mod push;
pub mod review;
pub mod sources;
pub mod store;
pub mod ui;
pub mod utils;
pub mod wiki;

pub use config::Config;
pub use error::{Result, WikiCiteError};
