//! Adapters implementing the [`port`](crate::port) traits.

pub mod tesla;
