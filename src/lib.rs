pub mod config;
pub mod contact_client;
pub mod domain;
pub mod form;
mod routes;
mod startup;
pub mod telemetry;
mod util;

pub use startup::run;
