//! Headless retained visual tree.
//!
//! `RetainedTree` is a minimal document: named scroll containers, the regions
//! laid into them, and fixed-height text nodes inside the content region. It
//! does real layout (sequential stacking, explicit spacer heights, clamped
//! scroll offsets) so that visibility can be computed from geometry exactly as
//! a browser or a terminal renderer would.
//!
//! Every item node is laid out at `item_rows` units. This is the uniform-height
//! assumption made concrete: the engine measures the first node and the tree
//! guarantees the rest match.

use crate::host::{Geometry, HeightProbe, ScrollHost, Span};
use crate::types::{NodeId, Region};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    /// Content past the container height is clipped and not scrollable.
    Visible,
    /// Vertical scrolling with an auto scrollbar.
    Auto,
}

#[derive(Debug)]
enum NodeKind {
    Container {
        id: String,
        height: Option<u32>,
        overflow: Overflow,
        scroll: u32,
    },
    Region {
        kind: Region,
        height: u32,
    },
    Item {
        text: String,
    },
}

#[derive(Debug)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// One row of a container's viewport, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleRow<'a> {
    /// Blank row belonging to a spacer region.
    Spacer(Region),
    /// Row `line` (0-based) of an item node.
    Item { node: NodeId, text: &'a str, line: u32 },
    /// Past the end of the content.
    Empty,
}

/// In-memory document implementing [`ScrollHost`], [`HeightProbe`] and
/// [`Geometry`].
#[derive(Debug)]
pub struct RetainedTree {
    nodes: Vec<NodeData>,
    item_rows: u32,
}

impl RetainedTree {
    /// Creates an empty tree whose item nodes are laid out `item_rows` tall.
    pub fn new(item_rows: u32) -> Self {
        Self { nodes: Vec::new(), item_rows }
    }

    /// Adds a top-level container that [`ScrollHost::find_container`] can resolve by `id`.
    pub fn add_container(&mut self, id: &str) -> NodeId {
        self.push(
            None,
            NodeKind::Container {
                id: id.to_owned(),
                height: None,
                overflow: Overflow::Visible,
                scroll: 0,
            },
        )
    }

    pub fn item_rows(&self) -> u32 {
        self.item_rows
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Text of an item node, `None` for containers and regions.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.get(node)?.kind {
            NodeKind::Item { text } => Some(text),
            _ => None,
        }
    }

    pub fn region_kind(&self, node: NodeId) -> Option<Region> {
        match self.get(node)?.kind {
            NodeKind::Region { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn overflow(&self, container: NodeId) -> Option<Overflow> {
        match self.get(container)?.kind {
            NodeKind::Container { overflow, .. } => Some(overflow),
            _ => None,
        }
    }

    /// Fixed height given by [`ScrollHost::configure_viewport`].
    pub fn viewport_height(&self, container: NodeId) -> Option<u32> {
        match self.get(container)?.kind {
            NodeKind::Container { height, .. } => height,
            _ => None,
        }
    }

    /// Total laid-out height of everything inside `container`.
    pub fn content_height(&self, container: NodeId) -> u32 {
        self.children(container).iter().map(|&c| self.block_height(c)).sum()
    }

    /// Largest valid scroll offset for `container`.
    pub fn max_scroll(&self, container: NodeId) -> u32 {
        let viewport = self.viewport_height(container).unwrap_or(0);
        self.content_height(container).saturating_sub(viewport)
    }

    /// Scrolls `container` to `offset`, clamped to the scrollable range.
    ///
    /// Containers without `Overflow::Auto` never scroll.
    pub fn scroll_to(&mut self, container: NodeId, offset: u32) -> u32 {
        let max = self.max_scroll(container);
        match self.get_mut(container).map(|n| &mut n.kind) {
            Some(NodeKind::Container { scroll, overflow: Overflow::Auto, .. }) => {
                *scroll = offset.min(max);
                *scroll
            }
            _ => 0,
        }
    }

    /// Scrolls by a signed delta, clamped. Returns the new offset.
    pub fn scroll_by(&mut self, container: NodeId, delta: i64) -> u32 {
        let current = i64::from(self.scroll_offset(container));
        let target = (current + delta).clamp(0, i64::from(u32::MAX));
        self.scroll_to(container, target as u32)
    }

    /// Describes every row of the container's viewport, top to bottom.
    pub fn visible_rows(&self, container: NodeId) -> Vec<VisibleRow<'_>> {
        let Some(viewport) = self.viewport(container) else {
            return Vec::new();
        };
        let mut rows = Vec::with_capacity(viewport.height() as usize);
        let mut cursor = 0u32;
        for &child in self.children(container) {
            let height = self.block_height(child);
            let block = Span::new(cursor, height);
            cursor = block.bottom;
            if !block.intersects(&viewport) {
                continue;
            }
            match self.get(child).map(|n| &n.kind) {
                Some(NodeKind::Region { kind: Region::Content, .. }) => {
                    let mut item_top = block.top;
                    for &item in self.children(child) {
                        let item_span = Span::new(item_top, self.item_rows);
                        item_top = item_span.bottom;
                        let text = self.text(item).unwrap_or_default();
                        for y in item_span.top.max(viewport.top)..item_span.bottom.min(viewport.bottom) {
                            rows.push(VisibleRow::Item { node: item, text, line: y - item_span.top });
                        }
                    }
                }
                Some(NodeKind::Region { kind, .. }) => {
                    let shown = block.bottom.min(viewport.bottom) - block.top.max(viewport.top);
                    rows.extend((0..shown).map(|_| VisibleRow::Spacer(*kind)));
                }
                _ => {}
            }
        }
        rows.resize(viewport.height() as usize, VisibleRow::Empty);
        rows
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData { parent, children: Vec::new(), kind });
        if let Some(p) = parent.and_then(|p| self.get_mut(p)) {
            p.children.push(id);
        }
        id
    }

    fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(node.0)
    }

    fn block_height(&self, node: NodeId) -> u32 {
        match self.get(node).map(|n| &n.kind) {
            Some(NodeKind::Item { .. }) => self.item_rows,
            Some(NodeKind::Region { kind: Region::Content, .. }) => {
                self.children(node).iter().map(|&c| self.block_height(c)).sum()
            }
            Some(NodeKind::Region { height, .. }) => *height,
            Some(NodeKind::Container { height, .. }) => {
                height.unwrap_or_else(|| self.content_height(node))
            }
            None => 0,
        }
    }

    /// Offset of `node` from the top of its parent's content box.
    fn offset_in_parent(&self, node: NodeId) -> Option<u32> {
        let parent = self.get(node)?.parent?;
        let siblings = self.children(parent);
        let position = siblings.iter().position(|&s| s == node)?;
        Some(siblings[..position].iter().map(|&s| self.block_height(s)).sum())
    }

    fn reorder(&mut self, parent: NodeId, node: NodeId, to_end: bool) {
        let Some(p) = self.get_mut(parent) else { return };
        let Some(position) = p.children.iter().position(|&c| c == node) else {
            return;
        };
        p.children.remove(position);
        if to_end {
            p.children.push(node);
        } else {
            p.children.insert(0, node);
        }
    }
}

impl HeightProbe for RetainedTree {
    fn measure_height(&self, node: NodeId) -> Option<u32> {
        // Detached nodes have no layout.
        self.get(node)?.parent?;
        Some(self.block_height(node))
    }
}

impl ScrollHost for RetainedTree {
    fn find_container(&self, id: &str) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(i, n)| match &n.kind {
            NodeKind::Container { id: name, .. } if name == id => Some(NodeId(i)),
            _ => None,
        })
    }

    fn configure_viewport(&mut self, container: NodeId, viewport: u32) {
        if let Some(NodeKind::Container { height, overflow, .. }) =
            self.get_mut(container).map(|n| &mut n.kind)
        {
            *height = Some(viewport);
            *overflow = Overflow::Auto;
        }
    }

    fn create_region(&mut self, container: NodeId, kind: Region) -> NodeId {
        self.push(Some(container), NodeKind::Region { kind, height: 0 })
    }

    fn create_node(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(Some(parent), NodeKind::Item { text: text.to_owned() })
    }

    fn move_to_end(&mut self, parent: NodeId, node: NodeId) {
        self.reorder(parent, node, true);
    }

    fn move_to_start(&mut self, parent: NodeId, node: NodeId) {
        self.reorder(parent, node, false);
    }

    fn set_text(&mut self, node: NodeId, new_text: &str) {
        if let Some(NodeKind::Item { text }) = self.get_mut(node).map(|n| &mut n.kind) {
            new_text.clone_into(text);
        }
    }

    fn set_region_height(&mut self, region: NodeId, new_height: u32) {
        if let Some(NodeKind::Region { height, .. }) = self.get_mut(region).map(|n| &mut n.kind) {
            *height = new_height;
        }
    }

    fn scroll_offset(&self, container: NodeId) -> u32 {
        match self.get(container).map(|n| &n.kind) {
            Some(NodeKind::Container { scroll, .. }) => *scroll,
            _ => 0,
        }
    }
}

impl Geometry for RetainedTree {
    fn viewport(&self, container: NodeId) -> Option<Span> {
        match self.get(container)?.kind {
            NodeKind::Container { height, scroll, .. } => {
                let height = height.unwrap_or_else(|| self.content_height(container));
                Some(Span::new(scroll, height))
            }
            _ => None,
        }
    }

    fn node_span(&self, node: NodeId) -> Option<Span> {
        let mut top = 0u32;
        let mut current = node;
        // Walk up until the scroll container, summing offsets.
        loop {
            let data = self.get(current)?;
            let parent = data.parent?;
            top += self.offset_in_parent(current)?;
            if matches!(self.get(parent)?.kind, NodeKind::Container { .. }) {
                break;
            }
            current = parent;
        }
        Some(Span::new(top, self.block_height(node)))
    }
}
