// SPDX-License-Identifier: MPL-2.0
//! Presentation state for the playback overlay.
//!
//! This module holds what the overlay shows and when, following the
//! "state down, messages up" pattern: input and timer messages go in,
//! an [`OverlayView`](overlay::OverlayView) snapshot comes out. Drawing it is
//! left to the host front-end.
//!
//! - [`overlay`] - Controls visibility, pulse, focus routing and the session
//! - [`progress_format`] - Time labels and seeker fraction

pub mod overlay;
pub mod progress_format;
