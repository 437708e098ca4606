#![forbid(unsafe_code)]

//! The floating panel controller.
//!
//! Wires a [`ScrollMonitor`] over the panel's anchor targets and reacts to
//! its events: the link whose target sits under the middle line gets the
//! active highlight, and with `hide_at_top` set the panel hides itself
//! while the document is scrolled to the top.
//!
//! The controller never touches a real surface; hosts hand it [`NavLink`]
//! and [`PanelSurface`] capabilities and forward scroll/resize
//! notifications through [`FloatingPanel::on_scroll`] and
//! [`FloatingPanel::on_resize`].

use std::rc::Rc;

use ahash::AHashMap;
use floatnav_core::{
    EventKind, HandlerRegistry, MonitorConfig, Notice, RegionBounds, Result, ScrollMonitor, Span,
    ViewportSource,
};

/// Highlight capability for one navigation link.
pub trait NavLink {
    /// Toggle the link's active highlight.
    fn set_active(&self, active: bool);
}

/// Show/hide capability for the panel surface.
pub trait PanelSurface {
    fn show(&self);
    fn hide(&self);
}

/// A watched region tagged with its anchor id.
///
/// This is the handle the monitor passes back as event payload; the
/// controller matches the id against its link map.
#[derive(Debug, Clone)]
pub struct AnchorTarget<T> {
    pub id: String,
    pub region: T,
}

impl<T: RegionBounds> RegionBounds for AnchorTarget<T> {
    fn bounds(&self) -> Option<Span> {
        self.region.bounds()
    }
}

/// One navigation entry: the anchor id, the link to highlight, and the
/// document region the link points at.
#[derive(Debug, Clone)]
pub struct AnchorBinding<L, T> {
    pub id: String,
    pub link: L,
    pub target: T,
}

/// Panel behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelConfig {
    /// Highlight from the middle-line pair (default) or, when `false`,
    /// from the viewport visibility pair.
    pub active_on_middle: bool,
    /// Hide the panel while the document is scrolled to the top.
    pub hide_at_top: bool,
    /// Middle-line offset forwarded to the monitor.
    pub middle_offset: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            active_on_middle: true,
            hide_at_top: false,
            middle_offset: 0.0,
        }
    }
}

/// A floating navigation panel bound to one viewport.
pub struct FloatingPanel<L, S, T, V> {
    monitor: ScrollMonitor<AnchorTarget<T>, V>,
    // The link map and surface live inside the monitor's handlers; the
    // fields here only pin the capability types.
    _marker: std::marker::PhantomData<(L, S)>,
}

impl<L, S, T, V> FloatingPanel<L, S, T, V>
where
    L: NavLink + 'static,
    S: PanelSurface + 'static,
    T: RegionBounds + Clone + 'static,
    V: ViewportSource,
{
    /// Build the panel and run the monitor's baseline tick, so the
    /// initial highlight and visibility state are correct immediately.
    pub fn new(
        viewport: V,
        surface: S,
        bindings: Vec<AnchorBinding<L, T>>,
        config: PanelConfig,
    ) -> Result<Self> {
        Self::new_with(viewport, surface, bindings, config, |_| {})
    }

    /// Like [`new`](Self::new), additionally letting the host subscribe to
    /// monitor events (e.g. to forward them outward) before the baseline
    /// tick fires.
    pub fn new_with(
        viewport: V,
        surface: S,
        bindings: Vec<AnchorBinding<L, T>>,
        config: PanelConfig,
        setup: impl FnOnce(&mut HandlerRegistry<AnchorTarget<T>>),
    ) -> Result<Self> {
        let mut links = AHashMap::with_capacity(bindings.len());
        let mut targets = Vec::with_capacity(bindings.len());
        for binding in bindings {
            links.insert(binding.id.clone(), binding.link);
            targets.push(AnchorTarget {
                id: binding.id,
                region: binding.target,
            });
        }
        let links = Rc::new(links);
        let surface = Rc::new(surface);

        let (activate, deactivate) = if config.active_on_middle {
            (EventKind::EnteredMiddle, EventKind::ExitedMiddle)
        } else {
            (EventKind::EnteredViewport, EventKind::ExitedViewport)
        };

        let monitor = ScrollMonitor::new_with(
            viewport,
            targets,
            MonitorConfig::default().middle_offset(config.middle_offset),
            |registry| {
                let on_enter = Rc::clone(&links);
                registry.on(activate, move |event| {
                    if let Some(target) = &event.region {
                        if let Some(link) = on_enter.get(&target.id) {
                            link.set_active(true);
                        }
                    }
                });

                let on_exit = Rc::clone(&links);
                registry.on(deactivate, move |event| {
                    if let Some(target) = &event.region {
                        if let Some(link) = on_exit.get(&target.id) {
                            link.set_active(false);
                        }
                    }
                });

                if config.hide_at_top {
                    let on_top = Rc::clone(&surface);
                    registry.on(EventKind::ReachedTop, move |_| on_top.hide());
                    let off_top = Rc::clone(&surface);
                    registry.on(EventKind::LeftTop, move |_| off_top.show());
                }

                setup(registry);
            },
        )?;

        tracing::debug!(
            anchors = monitor.watcher_count(),
            hide_at_top = config.hide_at_top,
            "floating panel created"
        );
        Ok(Self {
            monitor,
            _marker: std::marker::PhantomData,
        })
    }

    /// Forward a scroll notification from the host.
    pub fn on_scroll(&mut self) {
        self.monitor.handle(Notice::Scrolled);
    }

    /// Forward a resize notification from the host.
    pub fn on_resize(&mut self) {
        self.monitor.handle(Notice::Resized);
    }

    /// Release the monitor's subscriptions. Idempotent; safe under
    /// repeated construct/teardown cycles.
    pub fn teardown(&mut self) {
        if !self.monitor.is_detached() {
            tracing::debug!("floating panel torn down");
        }
        self.monitor.detach();
    }

    /// Whether [`teardown`](Self::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.monitor.is_detached()
    }

    /// The underlying monitor, for state introspection.
    pub fn monitor(&self) -> &ScrollMonitor<AnchorTarget<T>, V> {
        &self.monitor
    }
}
