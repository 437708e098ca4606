#![forbid(unsafe_code)]

//! Typed monitor events and the observer registry.
//!
//! The original string-keyed dispatch is replaced with an explicit
//! enumeration of event kinds plus a registry of boxed handlers. Handlers
//! subscribe either to a single kind or to every kind (the catch-all
//! subscription the panel uses to forward monitor traffic outward).

use std::fmt;

/// The event kinds a monitor can emit.
///
/// The first four are per-watcher and carry the watcher's region handle as
/// payload; the last four are global edge events with no payload. Every
/// kind is edge-triggered: it fires exactly once on the tick where its
/// tracked boolean flips, never while the condition merely persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A watched region became visible in the viewport.
    EnteredViewport,
    /// A watched region left the viewport.
    ExitedViewport,
    /// The middle line entered a watched region.
    EnteredMiddle,
    /// The middle line left a watched region.
    ExitedMiddle,
    /// The viewport reached the top of the document.
    ReachedTop,
    /// The viewport left the top of the document.
    LeftTop,
    /// The viewport reached the bottom of the document.
    ReachedBottom,
    /// The viewport left the bottom of the document.
    LeftBottom,
}

impl EventKind {
    /// Whether events of this kind carry a region payload.
    pub const fn has_region(self) -> bool {
        matches!(
            self,
            Self::EnteredViewport | Self::ExitedViewport | Self::EnteredMiddle | Self::ExitedMiddle
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EnteredViewport => "entered_viewport",
            Self::ExitedViewport => "exited_viewport",
            Self::EnteredMiddle => "entered_middle",
            Self::ExitedMiddle => "exited_middle",
            Self::ReachedTop => "reached_top",
            Self::LeftTop => "left_top",
            Self::ReachedBottom => "reached_bottom",
            Self::LeftBottom => "left_bottom",
        };
        f.write_str(name)
    }
}

/// An emitted event: a kind plus the originating region handle, if any.
#[derive(Debug, Clone)]
pub struct MonitorEvent<R> {
    /// What happened.
    pub kind: EventKind,
    /// The watcher's region handle for per-watcher kinds, `None` for
    /// global edge kinds.
    pub region: Option<R>,
}

impl<R> MonitorEvent<R> {
    /// A global edge event with no payload.
    pub const fn global(kind: EventKind) -> Self {
        Self { kind, region: None }
    }

    /// A per-watcher event carrying the region handle.
    pub const fn watcher(kind: EventKind, region: R) -> Self {
        Self {
            kind,
            region: Some(region),
        }
    }
}

/// Opaque handle returned by [`HandlerRegistry::on`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Entry<R> {
    id: HandlerId,
    /// `Some(kind)` for a single-kind subscription, `None` for catch-all.
    filter: Option<EventKind>,
    handler: Box<dyn FnMut(&MonitorEvent<R>)>,
}

/// Registry of event handlers for one monitor instance.
///
/// Dispatch order for a single event is fixed: kind-specific handlers in
/// registration order, then catch-all handlers in registration order.
pub struct HandlerRegistry<R> {
    entries: Vec<Entry<R>>,
    next_id: u64,
}

impl<R> Default for HandlerRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> HandlerRegistry<R> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    fn insert(&mut self, filter: Option<EventKind>, handler: Box<dyn FnMut(&MonitorEvent<R>)>) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            filter,
            handler,
        });
        id
    }

    /// Register a handler for a single event kind.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&MonitorEvent<R>) + 'static) -> HandlerId {
        self.insert(Some(kind), Box::new(handler))
    }

    /// Register a handler for every event kind.
    pub fn on_any(&mut self, handler: impl FnMut(&MonitorEvent<R>) + 'static) -> HandlerId {
        self.insert(None, Box::new(handler))
    }

    /// Remove a handler. Returns `false` if the id is unknown or already
    /// removed; calling again with the same id is safe.
    pub fn off(&mut self, id: HandlerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Drop every registered handler.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no handlers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver one event: kind-specific subscribers first, then catch-all.
    pub(crate) fn dispatch(&mut self, event: &MonitorEvent<R>) {
        for entry in &mut self.entries {
            if entry.filter == Some(event.kind) {
                (entry.handler)(event);
            }
        }
        for entry in &mut self.entries {
            if entry.filter.is_none() {
                (entry.handler)(event);
            }
        }
    }
}

impl<R> fmt::Debug for HandlerRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn record(log: &Rc<RefCell<Vec<String>>>, tag: &str) -> impl FnMut(&MonitorEvent<u32>) + use<> {
        let log = Rc::clone(log);
        let tag = tag.to_string();
        move |event| log.borrow_mut().push(format!("{tag}:{}", event.kind))
    }

    #[test]
    fn kind_specific_handlers_only_see_their_kind() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();
        registry.on(EventKind::ReachedTop, record(&log, "top"));
        registry.on(EventKind::ReachedBottom, record(&log, "bottom"));

        registry.dispatch(&MonitorEvent::global(EventKind::ReachedTop));

        assert_eq!(*log.borrow(), vec!["top:reached_top"]);
    }

    #[test]
    fn catch_all_runs_after_kind_specific() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();
        registry.on_any(record(&log, "any"));
        registry.on(EventKind::LeftTop, record(&log, "left"));

        registry.dispatch(&MonitorEvent::global(EventKind::LeftTop));

        assert_eq!(*log.borrow(), vec!["left:left_top", "any:left_top"]);
    }

    #[test]
    fn off_is_idempotent() {
        let mut registry: HandlerRegistry<u32> = HandlerRegistry::new();
        let id = registry.on(EventKind::ReachedTop, |_| {});
        assert!(registry.off(id));
        assert!(!registry.off(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn removed_handler_no_longer_fires() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HandlerRegistry::new();
        let id = registry.on(EventKind::ReachedTop, record(&log, "top"));
        registry.off(id);

        registry.dispatch(&MonitorEvent::global(EventKind::ReachedTop));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn event_kind_payload_classification() {
        assert!(EventKind::EnteredViewport.has_region());
        assert!(EventKind::ExitedMiddle.has_region());
        assert!(!EventKind::ReachedTop.has_region());
        assert!(!EventKind::LeftBottom.has_region());
    }
}
