//! Single-zone thermostat library.
//!
//! The state machine lives in [`fsm`]; [`app`] wraps it in a single-owner
//! service with port traits, and [`adapters`] provides host
//! implementations of those ports.  Nothing here performs I/O except the
//! adapters.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;

pub use error::{Error, Result};
pub use fsm::{FanSpeed, Mode, Outcome, Rejection, ThermostatState};
