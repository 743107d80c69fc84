// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and business rules. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`carousel`]: Carousel policy values ([`AutoplayInterval`](carousel::AutoplayInterval),
//!   [`DragThreshold`](carousel::DragThreshold), [`TransitionDuration`](carousel::TransitionDuration))

pub mod carousel;
