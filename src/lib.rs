// SPDX-License-Identifier: MPL-2.0
//! `playback_overlay` is the platform-neutral core of a remote-control
//! playback overlay.
//!
//! It decides when the transport controls are visible, which control has
//! D-pad focus, what a press does to the playback engine, which transient
//! feedback icon to pulse, and how position and duration are shown. Rendering
//! and media decoding stay with the host; the engine and the timer facility
//! are reached through the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/playback_overlay/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
mod test_utils;
