//! Tesla owner API adapter.

mod client;
mod dto;

pub use client::TeslaClient;
