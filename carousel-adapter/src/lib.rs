//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only holds state and math. This crate provides the
//! framework-neutral glue an adapter needs around a real paging widget:
//!
//! - A [`PagingWidget`] trait describing the scroll list the carousel drives
//! - A [`Controller`] that binds the widget, routes its callbacks and forwards autoplay commands
//! - Throttling of the scroll-offset stream and end-of-list detection from raw offsets
//! - A [`Frame`] description covering the empty placeholder and the page indicator
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod end_reached;
mod frame;
mod throttle;
mod widget;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use end_reached::{DEFAULT_END_REACHED_THRESHOLD, EndReachedDetector};
pub use frame::{Frame, PaginationFrame};
pub use throttle::{DEFAULT_SCROLL_EVENT_THROTTLE_MS, ScrollThrottle};
pub use widget::{PagingWidget, WidgetBinding};
