pub mod client;
pub mod constants;
pub mod operations;
pub mod queries;

pub use client::GkeClient;
