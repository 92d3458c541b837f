#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]

//! Compiles log forwarder output specifications into Vector pipeline
//! configuration.
//!
//! Each output adapter turns one [`config::OutputSpec`] into an ordered list of
//! [`template::Element`]s. The composer in [`template`] renders those elements
//! into a single document and refuses to emit anything when two elements claim
//! the same identity with different bodies.

#[macro_use]
extern crate tracing;

#[macro_use]
pub mod internal_events;

pub mod cli;
pub mod config;
pub mod elements;
pub mod generate;
pub mod secrets;
pub mod sinks;
pub mod template;
pub mod trace;

pub use generate::{GenerateError, generate_conf};

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;
