#![forbid(unsafe_code)]

pub mod config;
pub mod session;

pub use session::Session;
