#![forbid(unsafe_code)]

//! Floating navigation panel on top of `floatnav-core`.
//!
//! # Role in floatnav
//! `floatnav-panel` is the presentation layer: it turns a scanned heading
//! list into panel markup, computes the panel's fixed placement, and runs
//! a [`FloatingPanel`] controller that reacts to scroll-monitor events by
//! highlighting the link for the section in view and showing or hiding
//! the panel at the top of the document.
//!
//! # Primary responsibilities
//! - **Anchors**: heading scan to ordered `{id, title}` pairs.
//! - **Markup**: the panel's inner markup from the anchor list.
//! - **Placement**: fixed-position math from alignment configuration.
//! - **FloatingPanel**: monitor wiring, highlight toggling, show/hide.
//!
//! # How it fits in the system
//! Hosts implement the small capability traits ([`HeadingSource`],
//! [`NavLink`], [`PanelSurface`], plus the core's `ViewportSource` and
//! `RegionBounds`) over their real document, and forward scroll and
//! resize notifications into the controller.

pub mod anchors;
pub mod markup;
pub mod panel;
pub mod placement;

pub use anchors::{Anchor, Heading, HeadingSource, collect_anchors};
pub use markup::{MarkupConfig, render_markup};
pub use panel::{AnchorBinding, AnchorTarget, FloatingPanel, NavLink, PanelConfig, PanelSurface};
pub use placement::{Edge, Horizontal, Placement, PlacementConfig, Vertical};
