#![forbid(unsafe_code)]

//! Core: viewport metrics, watcher state tracking, edge-triggered events.
//!
//! # Role in floatnav
//! `floatnav-core` is the state-tracking layer. It owns the scroll monitor:
//! a fixed set of watched document regions checked against the visible
//! viewport and the viewport's vertical middle line on every scroll or
//! resize notification, with an event fired exactly once per boolean flip.
//!
//! # Primary responsibilities
//! - **ViewportSource / RegionBounds**: narrow capability contracts the
//!   host implements over its real scrolling surface and document nodes.
//! - **ScrollMonitor**: per-tick recomputation, cached region geometry
//!   gated on document-extent changes, edge-triggered emission.
//! - **EventKind / HandlerRegistry**: typed event taxonomy and observer
//!   registration.
//!
//! # How it fits in the system
//! The panel layer (`floatnav-panel`) builds a monitor over its anchor
//! targets and reacts to events by toggling link highlights and showing or
//! hiding itself. This crate knows nothing about panels, links, or markup.

pub mod error;
pub mod event;
pub mod geometry;
pub mod monitor;
pub mod region;
pub mod viewport;

pub use error::{MonitorError, Result};
pub use event::{EventKind, HandlerId, HandlerRegistry, MonitorEvent};
pub use geometry::Span;
pub use monitor::{EdgeState, MonitorConfig, ScrollMonitor, WatchState};
pub use region::RegionBounds;
pub use viewport::{Notice, ViewportMetrics, ViewportSource};
