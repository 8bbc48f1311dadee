/// Opaque handle to a node owned by a [`crate::host::ScrollHost`].
///
/// Handles are plain integers so they are `Copy` and cheap to hash. A handle is
/// only meaningful for the host that issued it. `usize` wide so that an arena
/// host can use its slot index directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One of the three child regions the engine lays into its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Stands in for every item above the window.
    TopSpacer,
    /// Holds the rendered item nodes in ascending index order.
    Content,
    /// Stands in for every item below the window.
    BottomSpacer,
}

/// The viewport edge a node crossed when it stopped intersecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitEdge {
    /// The node scrolled out above the viewport (user scrolled forward).
    Top,
    /// The node scrolled out below the viewport (user scrolled backward).
    Bottom,
}

/// Simulated heights standing in for the unrendered items on either side of
/// the window, in host height units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacers {
    pub top: u32,
    pub bottom: u32,
}

/// Inclusive range of list indices currently bound to rendered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBounds {
    pub lo: usize,
    pub hi: usize,
}

impl WindowBounds {
    /// Number of indices in the window.
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Always `false`: a window holds at least one binding.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` when `index` lies inside `[lo, hi]`.
    pub fn contains(&self, index: usize) -> bool {
        (self.lo..=self.hi).contains(&index)
    }
}

/// Why a recycle request left the window untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A bottom exit at `lo == 0`: there is no earlier item to bind.
    AtStart,
    /// A top exit at `hi == N - 1`: there is no later item to bind.
    AtEnd,
    /// The node is not at the window edge the report names, or is not bound
    /// at all. Stale reports land here.
    NotAtEdge,
    /// The node was already recycled earlier in the same batch.
    Duplicate,
    /// A one-node window got a report without an edge hint.
    Ambiguous,
}

/// Result of a single recycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecycleOutcome {
    /// The node moved to the opposite edge and now shows item `to`.
    Recycled {
        node: NodeId,
        edge: ExitEdge,
        from: usize,
        to: usize,
    },
    /// Nothing changed.
    Skipped(SkipReason),
}

impl RecycleOutcome {
    pub fn is_recycled(&self) -> bool {
        matches!(self, RecycleOutcome::Recycled { .. })
    }
}

/// Totals for one processed visibility batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Entries in the batch, intersecting ones included.
    pub entries: usize,
    pub recycled: usize,
    pub skipped: usize,
}
