// SPDX-License-Identifier: MPL-2.0
//! Playback overlay components.
//!
//! - [`controls`]: Controls visibility with auto-hide
//! - [`pulse`]: Transient feedback icon
//! - [`router`]: D-pad policy and focus
//! - [`session`]: Lifecycle and timer dispatch for one playback
//! - [`view`]: Render snapshot read by the front-end

pub mod controls;
pub mod pulse;
pub mod router;
pub mod session;
pub mod view;

pub use controls::ControlsController;
pub use pulse::PulseIndicator;
pub use router::{FocusRouter, RouteOutcome};
pub use session::OverlaySession;
pub use view::OverlayView;
