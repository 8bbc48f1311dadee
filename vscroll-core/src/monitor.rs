//! Visibility observation.
//!
//! A [`VisibilityMonitor`] watches a set of nodes and hands out ordered batches
//! of [`VisibilityEntry`] values for the nodes whose intersection with the
//! viewport changed since the previous batch. The engine is the only
//! subscriber; it drains batches through `WindowManager::pump`.
//!
//! [`GeometryMonitor`] is the bundled implementation. It compares host layout
//! against the last state it reported. A node whose position changed behind
//! the monitor's back (the engine moves nodes when it recycles them) must be
//! [invalidated](VisibilityMonitor::invalidate), or a later exit that matches
//! the stale state would never be reported.

use indexmap::IndexMap;

use crate::host::Geometry;
use crate::types::{ExitEdge, NodeId};

/// One state change for an observed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityEntry {
    pub node: NodeId,
    /// `true` when any part of the node overlaps the viewport.
    pub is_intersecting: bool,
    /// For non-intersecting entries, the side of the viewport the node lies on,
    /// when the monitor knows it.
    pub edge: Option<ExitEdge>,
}

impl VisibilityEntry {
    /// An entry reporting that `node` left the viewport across `edge`.
    pub fn left(node: NodeId, edge: ExitEdge) -> Self {
        Self { node, is_intersecting: false, edge: Some(edge) }
    }

    /// An entry without geometry: the engine derives the edge itself.
    pub fn lost(node: NodeId) -> Self {
        Self { node, is_intersecting: false, edge: None }
    }

    pub fn entered(node: NodeId) -> Self {
        Self { node, is_intersecting: true, edge: None }
    }
}

/// Batched, ordered intersection reporting over a host of type `H`.
pub trait VisibilityMonitor<H> {
    /// Sets the scroll container whose viewport intersection is tested.
    fn attach(&mut self, root: NodeId);

    /// Starts tracking `node`. The next batch always contains an entry for it.
    fn observe(&mut self, node: NodeId);

    /// Stops tracking `node`. Pending changes for it are dropped.
    fn unobserve(&mut self, node: NodeId);

    /// Forgets the last reported state of `node` after it was moved, so the
    /// next batch reports it against its new position whatever that is.
    /// Untracked nodes are ignored.
    fn invalidate(&mut self, node: NodeId);

    /// Stops tracking every node.
    fn disconnect(&mut self);

    /// Returns the entries that changed since the last call, in observation order.
    fn take_records(&mut self, host: &H) -> Vec<VisibilityEntry>;

    /// Number of nodes currently tracked.
    fn observed(&self) -> usize;
}

/// Zero-threshold monitor driven by [`Geometry`] queries.
#[derive(Debug, Default)]
pub struct GeometryMonitor {
    root: Option<NodeId>,
    /// Last reported state per node; `None` until first reported.
    tracked: IndexMap<NodeId, Option<bool>>,
}

impl GeometryMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self, node: NodeId) -> bool {
        self.tracked.contains_key(&node)
    }

    /// Number of tracked nodes.
    pub fn tracked(&self) -> usize {
        self.tracked.len()
    }
}

impl<H: Geometry> VisibilityMonitor<H> for GeometryMonitor {
    fn attach(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    fn observe(&mut self, node: NodeId) {
        self.tracked.entry(node).or_insert(None);
    }

    fn unobserve(&mut self, node: NodeId) {
        self.tracked.shift_remove(&node);
    }

    fn invalidate(&mut self, node: NodeId) {
        if let Some(last) = self.tracked.get_mut(&node) {
            *last = None;
        }
    }

    fn disconnect(&mut self) {
        self.tracked.clear();
    }

    fn take_records(&mut self, host: &H) -> Vec<VisibilityEntry> {
        let Some(viewport) = self.root.and_then(|root| host.viewport(root)) else {
            return Vec::new();
        };
        let mut records = Vec::new();
        for (&node, last) in self.tracked.iter_mut() {
            let Some(span) = host.node_span(node) else {
                continue;
            };
            let is_intersecting = span.intersects(&viewport);
            if *last == Some(is_intersecting) {
                continue;
            }
            *last = Some(is_intersecting);
            let edge = match is_intersecting {
                true => None,
                false if span.bottom <= viewport.top => Some(ExitEdge::Top),
                false => Some(ExitEdge::Bottom),
            };
            records.push(VisibilityEntry { node, is_intersecting, edge });
        }
        records
    }

    fn observed(&self) -> usize {
        self.tracked()
    }
}
