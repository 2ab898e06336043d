//! Host binding utilities for the `smooth-scroll` crate.
//!
//! The `smooth-scroll` crate is UI-agnostic and only simulates. This crate connects it to a
//! host environment:
//!
//! - [`Host`]: the collaborator interface (layout query, touch probe, event subscriptions,
//!   frame scheduling, render sinks)
//! - [`Controller`]: start/stop lifecycle, event routing and the per-frame loop
//! - [`SimHost`]: an in-memory host with a fake clock, for tests and headless simulations
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod host;
mod sim;


pub use controller::Controller;
pub use event::{EventKind, HostEvent, Propagation};
pub use host::{FrameHandle, Host, ListenerId};
pub use sim::SimHost;
