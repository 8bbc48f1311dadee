//! Capabilities the engine needs from the surface it renders into.
//!
//! The engine never touches a concrete widget toolkit. It creates, moves and
//! rebinds nodes through [`ScrollHost`], reads item height through
//! [`HeightProbe`], and the bundled [`crate::monitor::GeometryMonitor`] reads
//! layout through [`Geometry`]. [`crate::tree::RetainedTree`] implements all
//! three for headless use and for the terminal front end.

use crate::types::{NodeId, Region};

/// Half-open vertical extent `[top, bottom)` in content coordinates of a
/// scroll container (0 is the top of the first child).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub bottom: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, bottom: top.saturating_add(height) }
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Zero-threshold intersection: any shared unit counts, touching edges do not.
    pub fn intersects(&self, other: &Span) -> bool {
        self.top < other.bottom && self.bottom > other.top
    }
}

/// Reads the rendered height of a laid-out node.
///
/// Every item is assumed to have the height the first item measured. Hosts
/// return `None` (or `Some(0)`) when the node is not attached or has no layout.
pub trait HeightProbe {
    fn measure_height(&self, node: NodeId) -> Option<u32>;
}

/// A retained visual tree with a scrollable container the engine lays its
/// regions into.
pub trait ScrollHost: HeightProbe {
    /// Resolves a container by its identifier.
    fn find_container(&self, id: &str) -> Option<NodeId>;

    /// Gives `container` vertical auto overflow and a fixed height.
    fn configure_viewport(&mut self, container: NodeId, height: u32);

    /// Appends a new, empty region of `kind` to `container`.
    fn create_region(&mut self, container: NodeId, kind: Region) -> NodeId;

    /// Appends a new item node showing `text` to `parent`.
    fn create_node(&mut self, parent: NodeId, text: &str) -> NodeId;

    /// Moves an existing child of `parent` to the end of its child order.
    fn move_to_end(&mut self, parent: NodeId, node: NodeId);

    /// Moves an existing child of `parent` to the start of its child order.
    fn move_to_start(&mut self, parent: NodeId, node: NodeId);

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Sets the explicit height of a spacer region.
    fn set_region_height(&mut self, region: NodeId, height: u32);

    /// Current vertical scroll offset of `container`.
    fn scroll_offset(&self, container: NodeId) -> u32;
}

/// Layout queries used to compute intersection with the viewport.
pub trait Geometry {
    /// The visible extent of `container`, offset by its scroll position.
    fn viewport(&self, container: NodeId) -> Option<Span>;

    /// The extent of `node` inside its scroll container.
    fn node_span(&self, node: NodeId) -> Option<Span>;
}
