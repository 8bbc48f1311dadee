//! The recycling window.
//!
//! `WindowManager` binds a fixed number of host nodes to a contiguous range of
//! list indices and keeps two spacer regions sized so that the container's
//! scroll height always equals the height of the full list. When a node leaves
//! the viewport it is moved to the opposite edge of the window and rebound to
//! the next unrendered item on that side.
//!
//! # Layout
//!
//! ```text
//! container (overflow auto, fixed height)
//! ├── top spacer      height = lo * h
//! ├── content         nodes for lo..=hi, ascending
//! └── bottom spacer   height = (N - 1 - hi) * h
//! ```
//!
//! The window is a ring of node handles: position `k` is bound to index
//! `lo + k`, so contiguity holds by construction and the first and last bound
//! indices are read off the ring ends without sorting.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::error::{ConfigurationError, Result};
use crate::host::ScrollHost;
use crate::monitor::{VisibilityEntry, VisibilityMonitor};
use crate::types::{
    BatchSummary, ExitEdge, NodeId, RecycleOutcome, Region, SkipReason, Spacers, WindowBounds,
};

/// Handles of the three regions laid into the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub top: NodeId,
    pub content: NodeId,
    pub bottom: NodeId,
}

/// Owns the window of rendered nodes, the spacer heights, the host they are
/// drawn into, and the monitor that reports when they leave the viewport.
///
/// Independent instances never share state; several lists can coexist.
pub struct WindowManager<T, H, M>
where
    T: AsRef<str>,
    H: ScrollHost,
    M: VisibilityMonitor<H>,
{
    host: H,
    monitor: M,
    items: Arc<[T]>,
    root: NodeId,
    regions: Regions,
    slots: VecDeque<NodeId>,
    lo: usize,
    item_height: u32,
    viewport_height: u32,
    spacers: Spacers,
    /// Scroll offset at which a report last recycled each node.
    recycled_at: HashMap<NodeId, u32>,
}

impl<T, H, M> WindowManager<T, H, M>
where
    T: AsRef<str>,
    H: ScrollHost,
    M: VisibilityMonitor<H>,
{
    /// Builds the regions inside `container_id`, renders the initial window
    /// starting at index 0, and registers every node with `monitor`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] when the container cannot be resolved,
    /// `viewport_height` is zero, `items` is empty, or the first item measures
    /// a zero height.
    pub fn new(
        mut host: H,
        mut monitor: M,
        container_id: &str,
        viewport_height: u32,
        items: impl Into<Arc<[T]>>,
    ) -> Result<Self> {
        let items = items.into();
        let root = host
            .find_container(container_id)
            .ok_or(ConfigurationError::MissingRoot)?;
        if viewport_height == 0 {
            return Err(ConfigurationError::InvalidHeight.into());
        }
        if items.is_empty() {
            return Err(ConfigurationError::EmptyList.into());
        }

        host.configure_viewport(root, viewport_height);
        let regions = Regions {
            top: host.create_region(root, Region::TopSpacer),
            content: host.create_region(root, Region::Content),
            bottom: host.create_region(root, Region::BottomSpacer),
        };

        // The first node has to be laid out before anything can be sized.
        let first = host.create_node(regions.content, items[0].as_ref());
        let item_height = host
            .measure_height(first)
            .filter(|&h| h > 0)
            .ok_or(ConfigurationError::InvalidItemHeight)?;
        let total = u32::try_from(items.len())
            .ok()
            .and_then(|n| n.checked_mul(item_height))
            .ok_or(ConfigurationError::ListTooTall)?;

        let window_size = (viewport_height.div_ceil(item_height) as usize).min(items.len());
        let mut slots = VecDeque::with_capacity(window_size);
        slots.push_back(first);
        for item in &items[1..window_size] {
            slots.push_back(host.create_node(regions.content, item.as_ref()));
        }

        let spacers = Spacers {
            top: 0,
            bottom: total - item_height * window_size as u32,
        };
        host.set_region_height(regions.top, spacers.top);
        host.set_region_height(regions.bottom, spacers.bottom);

        monitor.attach(root);
        for &node in &slots {
            monitor.observe(node);
        }

        info!(
            container = container_id,
            items = items.len(),
            item_height,
            window_size,
            "list window initialised"
        );

        Ok(Self {
            host,
            monitor,
            items,
            root,
            regions,
            slots,
            lo: 0,
            item_height,
            viewport_height,
            spacers,
            recycled_at: HashMap::new(),
        })
    }

    /// Number of items in the full list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items. Construction rejects empty lists, so
    /// this is `false` for every built instance.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Number of rendered nodes; fixed for the life of the instance.
    pub fn window_size(&self) -> usize {
        self.slots.len()
    }

    pub fn bounds(&self) -> WindowBounds {
        WindowBounds { lo: self.lo, hi: self.hi() }
    }

    pub fn spacers(&self) -> Spacers {
        self.spacers
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn regions(&self) -> Regions {
        self.regions
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for scrolling. Do not restructure the regions.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    /// `(index, node)` bindings in ascending index order.
    pub fn bindings(&self) -> impl Iterator<Item = (usize, NodeId)> + '_ {
        self.slots.iter().enumerate().map(|(k, &node)| (self.lo + k, node))
    }

    /// List index currently bound to `node`.
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.slots.iter().position(|&n| n == node).map(|k| self.lo + k)
    }

    /// Node currently bound to `index`.
    pub fn node_at(&self, index: usize) -> Option<NodeId> {
        index.checked_sub(self.lo).and_then(|k| self.slots.get(k).copied())
    }

    /// Content currently bound to `node`.
    pub fn content_of(&self, node: NodeId) -> Option<&T> {
        self.index_of(node).map(|i| &self.items[i])
    }

    /// Pulls pending visibility records from the monitor and processes them
    /// as one batch.
    ///
    /// Changes caused by this batch's own moves are only seen by the next
    /// call, so a recycle never runs inside another one.
    pub fn pump(&mut self) -> BatchSummary {
        let records = self.monitor.take_records(&self.host);
        self.handle_batch(records)
    }

    /// Processes one batch of visibility entries in delivery order.
    ///
    /// Intersecting entries are ignored. Entries without an edge hint use the
    /// node's current position at the front or back of the window.
    ///
    /// A node recycled by a report is not recycled again by any report until
    /// the host has scrolled; repeats within this batch or later ones are
    /// skipped as [`SkipReason::Duplicate`].
    ///
    /// Monitors deliver in observation order, which drifts from window order
    /// as nodes are recycled, so a node can reach its edge only after entries
    /// behind it in the batch have moved the window. Entries skipped as
    /// [`SkipReason::NotAtEdge`] are retried in further passes, still in
    /// delivery order, until a pass recycles nothing.
    pub fn handle_batch<I>(&mut self, entries: I) -> BatchSummary
    where
        I: IntoIterator<Item = VisibilityEntry>,
    {
        let mut summary = BatchSummary::default();
        let mut pending: Vec<VisibilityEntry> = Vec::new();
        for entry in entries {
            summary.entries += 1;
            if !entry.is_intersecting {
                pending.push(entry);
            }
        }

        loop {
            let progress = summary.recycled;
            let mut deferred = Vec::new();
            for entry in pending {
                match self.apply_entry(entry) {
                    RecycleOutcome::Recycled { .. } => summary.recycled += 1,
                    RecycleOutcome::Skipped(SkipReason::NotAtEdge) => deferred.push(entry),
                    RecycleOutcome::Skipped(reason) => {
                        trace!(node = entry.node.0, ?reason, "visibility entry skipped");
                        summary.skipped += 1;
                    }
                }
            }
            pending = deferred;
            if pending.is_empty() || summary.recycled == progress {
                break;
            }
        }

        for entry in &pending {
            trace!(node = entry.node.0, reason = ?SkipReason::NotAtEdge, "visibility entry skipped");
        }
        summary.skipped += pending.len();
        summary
    }

    fn apply_entry(&mut self, entry: VisibilityEntry) -> RecycleOutcome {
        let offset = self.host.scroll_offset(self.root);
        if self.recycled_at.get(&entry.node) == Some(&offset) {
            return RecycleOutcome::Skipped(SkipReason::Duplicate);
        }
        let outcome = match entry.edge.map_or_else(|| self.edge_of(entry.node), Ok) {
            Ok(edge) => self.recycle(entry.node, edge),
            Err(reason) => RecycleOutcome::Skipped(reason),
        };
        if outcome.is_recycled() {
            self.recycled_at.insert(entry.node, offset);
        }
        outcome
    }

    /// Moves `node` from the `edge` it left across to the opposite end of the
    /// window and rebinds it.
    ///
    /// A `Top` exit needs `node` to be bound to `lo`; a `Bottom` exit needs it
    /// bound to `hi`. Requests that would step past index `0` or `N - 1`, or
    /// that name the wrong edge, leave every piece of state untouched.
    ///
    /// A moved node is invalidated in the monitor so its next state is
    /// reported whether or not it differs from the last one.
    pub fn recycle(&mut self, node: NodeId, edge: ExitEdge) -> RecycleOutcome {
        let h = self.item_height;
        let outcome = match edge {
            ExitEdge::Top => {
                if self.slots.front() != Some(&node) {
                    return RecycleOutcome::Skipped(SkipReason::NotAtEdge);
                }
                let to = self.hi() + 1;
                if to >= self.items.len() {
                    return RecycleOutcome::Skipped(SkipReason::AtEnd);
                }
                self.slots.rotate_left(1);
                self.host.move_to_end(self.regions.content, node);
                self.lo += 1;
                self.spacers.top += h;
                self.spacers.bottom -= h;
                RecycleOutcome::Recycled { node, edge, from: to - self.slots.len(), to }
            }
            ExitEdge::Bottom => {
                if self.slots.back() != Some(&node) {
                    return RecycleOutcome::Skipped(SkipReason::NotAtEdge);
                }
                let Some(to) = self.lo.checked_sub(1) else {
                    return RecycleOutcome::Skipped(SkipReason::AtStart);
                };
                self.slots.rotate_right(1);
                self.host.move_to_start(self.regions.content, node);
                self.lo = to;
                self.spacers.top -= h;
                self.spacers.bottom += h;
                RecycleOutcome::Recycled { node, edge, from: to + self.slots.len(), to }
            }
        };

        if let RecycleOutcome::Recycled { from, to, .. } = outcome {
            self.host.set_text(node, self.items[to].as_ref());
            self.host.set_region_height(self.regions.top, self.spacers.top);
            self.host.set_region_height(self.regions.bottom, self.spacers.bottom);
            self.monitor.invalidate(node);
            debug!(node = node.0, ?edge, from, to, lo = self.lo, "recycled");
        }
        debug_assert!(self.invariants_hold());
        outcome
    }

    /// Rebinds the whole window to the host's current scroll offset.
    ///
    /// Recycling moves the window one item per report, so a jump further than
    /// the window leaves it behind with nothing left to report. This places
    /// `lo` at the first item under the viewport top (clamped so the window
    /// stays inside the list). Returns `true` when the window moved.
    pub fn realign(&mut self) -> bool {
        let offset = self.host.scroll_offset(self.root);
        let last_lo = self.items.len() - self.slots.len();
        let lo = ((offset / self.item_height) as usize).min(last_lo);
        if lo == self.lo {
            return false;
        }

        // Every node moves with the top spacer.
        for (k, &node) in self.slots.iter().enumerate() {
            self.host.set_text(node, self.items[lo + k].as_ref());
            self.monitor.invalidate(node);
        }
        self.recycled_at.clear();
        let h = self.item_height;
        self.spacers = Spacers {
            top: lo as u32 * h,
            bottom: (last_lo - lo) as u32 * h,
        };
        self.host.set_region_height(self.regions.top, self.spacers.top);
        self.host.set_region_height(self.regions.bottom, self.spacers.bottom);
        debug!(from = self.lo, to = lo, offset, "window realigned");
        self.lo = lo;

        debug_assert!(self.invariants_hold());
        true
    }

    /// Checks window size, range, spacer placement and height conservation.
    pub fn invariants_hold(&self) -> bool {
        let n = self.items.len();
        let size = self.slots.len();
        let h = u64::from(self.item_height);
        let expected_size = (self.viewport_height.div_ceil(self.item_height) as usize).min(n);
        let conserved = u64::from(self.spacers.top) + size as u64 * h + u64::from(self.spacers.bottom)
            == n as u64 * h;
        size == expected_size
            && self.lo + size <= n
            && u64::from(self.spacers.top) == self.lo as u64 * h
            && conserved
    }

    fn hi(&self) -> usize {
        self.lo + self.slots.len() - 1
    }

    /// Which end of the window `node` occupies.
    fn edge_of(&self, node: NodeId) -> std::result::Result<ExitEdge, SkipReason> {
        let front = self.slots.front() == Some(&node);
        let back = self.slots.back() == Some(&node);
        match (front, back) {
            (true, true) => Err(SkipReason::Ambiguous),
            (true, false) => Ok(ExitEdge::Top),
            (false, true) => Ok(ExitEdge::Bottom),
            (false, false) => Err(SkipReason::NotAtEdge),
        }
    }
}

impl<T, H, M> Drop for WindowManager<T, H, M>
where
    T: AsRef<str>,
    H: ScrollHost,
    M: VisibilityMonitor<H>,
{
    fn drop(&mut self) {
        for &node in &self.slots {
            self.monitor.unobserve(node);
        }
    }
}
