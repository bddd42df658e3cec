pub mod config;
pub mod routes;
pub mod startup;

pub use startup::run;
