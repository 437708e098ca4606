#![forbid(unsafe_code)]

//! The scroll monitor: watcher bookkeeping and edge-triggered emission.
//!
//! # How a tick works
//!
//! 1. Capture [`ViewportMetrics`] from the source (always; cheap).
//! 2. If the document extent changed since the last tick, re-measure every
//!    watcher's cached bounding interval. Pure scrolls never re-measure;
//!    the extent change is a coarse heuristic for "layout changed".
//! 3. Recompute the global edge state and emit an event for every bit that
//!    just became set.
//! 4. Recompute each watcher's state, in registration order, and emit an
//!    event for every bit that just became set, with the watcher's region
//!    handle as payload.
//!
//! All previous-tick state starts from the all-false neutral baseline, so
//! the construction-time tick fires events for whatever is true at t=0 -
//! including the "outside" sides (a watcher not in view fires
//! `ExitedViewport` once on creation).

use bitflags::bitflags;

use crate::error::{MonitorError, Result};
use crate::event::{EventKind, HandlerId, HandlerRegistry, MonitorEvent};
use crate::geometry::Span;
use crate::region::RegionBounds;
use crate::viewport::{Notice, ViewportMetrics, ViewportSource};

bitflags! {
    /// Per-watcher relationship booleans, one bit each.
    ///
    /// Exactly one bit of each complementary pair is set after any tick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WatchState: u8 {
        /// The region's interval overlaps the viewport.
        const IN_VIEWPORT = 1 << 0;
        /// Complement of `IN_VIEWPORT`.
        const OUT_VIEWPORT = 1 << 1;
        /// The middle line lies within the region's interval.
        const IN_MIDDLE = 1 << 2;
        /// Complement of `IN_MIDDLE`.
        const OUT_MIDDLE = 1 << 3;
    }
}

bitflags! {
    /// Global document-edge booleans, one bit each.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeState: u8 {
        /// The viewport sits at the top of the document.
        const AT_TOP = 1 << 0;
        /// The viewport reaches the bottom of the document.
        const AT_BOTTOM = 1 << 1;
        /// Complement of `AT_TOP`.
        const LEFT_TOP = 1 << 2;
        /// Complement of `AT_BOTTOM`.
        const LEFT_BOTTOM = 1 << 3;
    }
}

/// Emission order for global transitions within one tick.
const EDGE_EVENTS: [(EdgeState, EventKind); 4] = [
    (EdgeState::AT_TOP, EventKind::ReachedTop),
    (EdgeState::AT_BOTTOM, EventKind::ReachedBottom),
    (EdgeState::LEFT_TOP, EventKind::LeftTop),
    (EdgeState::LEFT_BOTTOM, EventKind::LeftBottom),
];

/// Emission order for per-watcher transitions within one tick.
const WATCH_EVENTS: [(WatchState, EventKind); 4] = [
    (WatchState::IN_VIEWPORT, EventKind::EnteredViewport),
    (WatchState::IN_MIDDLE, EventKind::EnteredMiddle),
    (WatchState::OUT_VIEWPORT, EventKind::ExitedViewport),
    (WatchState::OUT_MIDDLE, EventKind::ExitedMiddle),
];

/// Monitor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Shift applied to the viewport midpoint when computing the middle
    /// line. Must be finite and non-negative.
    pub middle_offset: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self { middle_offset: 0.0 }
    }
}

impl MonitorConfig {
    /// Set the middle offset.
    #[must_use]
    pub const fn middle_offset(mut self, value: f64) -> Self {
        self.middle_offset = value;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.middle_offset.is_finite() || self.middle_offset < 0.0 {
            return Err(MonitorError::InvalidMiddleOffset {
                value: self.middle_offset,
            });
        }
        Ok(())
    }
}

/// One observed region: its handle, cached geometry, and last-known state.
struct Watcher<R> {
    region: R,
    /// Cached bounding interval. Stale with respect to true layout by
    /// design: only refreshed when the document extent changes.
    span: Span,
    state: WatchState,
}

/// Tracks a fixed set of watched regions against the viewport and emits
/// edge-triggered events when computed boolean relationships change.
///
/// Single-threaded and fully synchronous: all work happens inside
/// [`handle`](Self::handle), nothing is queued across ticks, and there is
/// no internal throttling. If the host needs rate limiting, it belongs in
/// the notification wiring, not here.
pub struct ScrollMonitor<R, V> {
    source: V,
    middle_offset: f64,
    watchers: Vec<Watcher<R>>,
    edges: EdgeState,
    prev_document_height: Option<f64>,
    registry: HandlerRegistry<R>,
    detached: bool,
}

impl<R, V> ScrollMonitor<R, V>
where
    R: RegionBounds + Clone,
    V: ViewportSource,
{
    /// Create a monitor over a fixed watcher list and run the baseline
    /// tick.
    ///
    /// Handlers registered afterwards miss the baseline events; use
    /// [`new_with`](Self::new_with) to subscribe before the baseline runs.
    pub fn new(source: V, regions: Vec<R>, config: MonitorConfig) -> Result<Self> {
        Self::new_with(source, regions, config, |_| {})
    }

    /// Create a monitor, letting `setup` register handlers before the
    /// baseline tick fires.
    pub fn new_with(
        source: V,
        regions: Vec<R>,
        config: MonitorConfig,
        setup: impl FnOnce(&mut HandlerRegistry<R>),
    ) -> Result<Self> {
        config.validate()?;
        if !source.is_attached() {
            return Err(MonitorError::ViewportUnavailable);
        }

        let watchers = regions
            .into_iter()
            .map(|region| Watcher {
                // A region unmeasurable at construction seeds a point span
                // at the document top, matching what a detached node
                // measures in the original environment.
                span: region.bounds().unwrap_or_default(),
                region,
                state: WatchState::empty(),
            })
            .collect::<Vec<_>>();

        let mut monitor = Self {
            source,
            middle_offset: config.middle_offset,
            watchers,
            edges: EdgeState::empty(),
            prev_document_height: None,
            registry: HandlerRegistry::new(),
            detached: false,
        };
        setup(&mut monitor.registry);

        tracing::debug!(
            watchers = monitor.watchers.len(),
            middle_offset = monitor.middle_offset,
            "scroll monitor created"
        );
        monitor.run_tick();
        Ok(monitor)
    }

    /// Process one scroll or resize notification from the host.
    ///
    /// A no-op after [`detach`](Self::detach).
    pub fn handle(&mut self, notice: Notice) {
        if self.detached {
            return;
        }
        tracing::trace!(?notice, "tick");
        self.run_tick();
    }

    /// Convenience alias for `handle(Notice::Scrolled)`.
    pub fn tick(&mut self) {
        self.handle(Notice::Scrolled);
    }

    /// Register a handler for one event kind.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&MonitorEvent<R>) + 'static) -> HandlerId {
        self.registry.on(kind, handler)
    }

    /// Register a handler for every event kind.
    pub fn on_any(&mut self, handler: impl FnMut(&MonitorEvent<R>) + 'static) -> HandlerId {
        self.registry.on_any(handler)
    }

    /// Remove a handler. Idempotent.
    pub fn off(&mut self, id: HandlerId) -> bool {
        self.registry.off(id)
    }

    /// Release all subscriptions and stop reacting to notices.
    ///
    /// Idempotent and safe to call repeatedly; required for correctness
    /// under repeated construct/teardown cycles.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.registry.clear();
        tracing::debug!("scroll monitor detached");
    }

    /// Whether the monitor has been detached.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Number of watched regions.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Last-computed state of each watcher, in registration order.
    pub fn watch_states(&self) -> Vec<WatchState> {
        self.watchers.iter().map(|w| w.state).collect()
    }

    /// Last-computed global edge state.
    pub fn edge_state(&self) -> EdgeState {
        self.edges
    }

    /// The watched region handles, in registration order.
    pub fn regions(&self) -> impl Iterator<Item = &R> {
        self.watchers.iter().map(|w| &w.region)
    }

    fn run_tick(&mut self) {
        let metrics = ViewportMetrics::capture(&self.source, self.middle_offset);

        if self.prev_document_height != Some(metrics.document_height) {
            for watcher in &mut self.watchers {
                // Unmeasurable this tick: keep the last cached interval.
                if let Some(span) = watcher.region.bounds() {
                    watcher.span = span;
                }
            }
            self.prev_document_height = Some(metrics.document_height);
            tracing::debug!(
                document_height = metrics.document_height,
                "document extent changed, watcher bounds refreshed"
            );
        }

        let mut events: Vec<MonitorEvent<R>> = Vec::new();

        // Global edge state is always evaluated before per-watcher state.
        let mut next = EdgeState::empty();
        next.set(EdgeState::AT_TOP, metrics.at_top());
        next.set(EdgeState::AT_BOTTOM, metrics.at_bottom());
        next.set(EdgeState::LEFT_TOP, !metrics.at_top());
        next.set(EdgeState::LEFT_BOTTOM, !metrics.at_bottom());
        let gained = next.difference(self.edges);
        for (bit, kind) in EDGE_EVENTS {
            if gained.contains(bit) {
                events.push(MonitorEvent::global(kind));
            }
        }
        self.edges = next;

        let viewport = metrics.viewport_span();
        for watcher in &mut self.watchers {
            let in_viewport = watcher.span.touches(&viewport);
            let in_middle = watcher.span.contains(metrics.middle_line);

            let mut next = WatchState::empty();
            next.set(WatchState::IN_VIEWPORT, in_viewport);
            next.set(WatchState::OUT_VIEWPORT, !in_viewport);
            next.set(WatchState::IN_MIDDLE, in_middle);
            next.set(WatchState::OUT_MIDDLE, !in_middle);

            let gained = next.difference(watcher.state);
            for (bit, kind) in WATCH_EVENTS {
                if gained.contains(bit) {
                    events.push(MonitorEvent::watcher(kind, watcher.region.clone()));
                }
            }
            watcher.state = next;
        }

        for event in &events {
            tracing::trace!(kind = %event.kind, "emit");
            self.registry.dispatch(event);
        }
    }
}
