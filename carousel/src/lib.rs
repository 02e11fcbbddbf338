//! A headless paging carousel engine.
//!
//! For wiring to a concrete scroll widget (throttling, placeholder frames), see the
//! `carousel-adapter` crate.
//!
//! The crate tracks which page of a horizontally paging list is current, reconciles it with the
//! widget's "end reached" signal, drives autoplay from a single timer and computes the page
//! indicator highlight from the raw scroll offset.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll offsets along the paging axis
//! - viewability and end-of-list callbacks (or offsets plus a viewport length)
//! - a clock (`now_ms`) for autoplay
//! - a way to execute the returned [`ScrollCommand`]s
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod error;
mod layout;
mod options;
mod pagination;
mod state;
mod types;
mod viewability;


pub use autoplay::{AutoplayConfig, AutoplayScheduler};
pub use carousel::Carousel;
pub use error::CarouselError;
pub use layout::{ItemLayout, ItemLayoutCalculator, item_layout};
pub use options::{CarouselOptions, GetCurrentIndexCallback, OnSnapToItemCallback};
pub use pagination::{DEFAULT_PAGINATION_COLOR, DotVisual, PaginationIndicator, dot_intensity};
pub use state::{IndexState, Transition};
pub use types::{PaginationType, ScrollCommand, ViewToken, ViewabilityEvent};
pub use viewability::{ViewabilityConfig, ViewabilityTracker};
