//! Simulation harness for Dialink.
//!
//! Provides [`SimDriver`], a scripted, channel-free [`Driver`] with virtual
//! time and a fixed calendar date. Tests enqueue inputs up front, run the
//! generic runtime to completion, and then assert on the recorded outputs
//! (sent frames, render snapshots, sleeps, connect attempts).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod sim_driver;

pub use sim_driver::{SimDriver, SimDriverError};
