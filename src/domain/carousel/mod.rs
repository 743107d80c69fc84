// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.
//!
//! Policy values shared by the carousel widget and the configuration layer,
//! independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{AutoplayInterval, DragThreshold, TransitionDuration};
