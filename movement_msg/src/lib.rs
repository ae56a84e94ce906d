#![no_std]

pub mod command;
pub mod error;
pub mod header;
pub mod message;
pub mod report;
pub mod serialize;
pub mod telemetry;

pub use serialize::*;
