pub mod auth;
pub mod data;
pub mod errors;
pub mod filter;
pub mod geo;
pub mod sim;
pub mod types;
