//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use vscroll_core::{
    GeometryMonitor, NodeId, RetainedTree, ScrollHost, VisibilityEntry, VisibilityMonitor,
    VisibleRow, WindowManager,
};

pub type List = WindowManager<String, RetainedTree, GeometryMonitor>;

/// Items whose content is their index as text.
pub fn numbered(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// A list of `n` items, `item_height` tall, in a `viewport`-high container.
pub fn list(n: usize, item_height: u32, viewport: u32) -> List {
    let mut tree = RetainedTree::new(item_height);
    tree.add_container("list");
    let mut list = WindowManager::new(tree, GeometryMonitor::new(), "list", viewport, numbered(n))
        .expect("valid configuration");
    // Drain the initial "everything is visible" batch.
    list.pump();
    list
}

pub fn bound_indices(list: &List) -> Vec<usize> {
    list.bindings().map(|(i, _)| i).collect()
}

/// Texts of the content region children, in child order.
pub fn rendered_texts(list: &List) -> Vec<String> {
    let content = list.regions().content;
    list.host()
        .children(content)
        .iter()
        .map(|&n| list.host().text(n).unwrap_or_default().to_owned())
        .collect()
}

pub fn scroll_to(list: &mut List, offset: u32) -> u32 {
    let root = list.root();
    list.host_mut().scroll_to(root, offset)
}

/// Scrolls by `delta` the way the terminal front end does: a move spanning
/// the rendered window realigns first, then one batch is pumped.
pub fn scroll_and_settle(list: &mut List, delta: i64) {
    let root = list.root();
    let before = list.host().scroll_offset(root);
    let after = list.host_mut().scroll_by(root, delta);
    if before.abs_diff(after) >= list.window_size() as u32 * list.item_height() {
        list.realign();
    }
    list.pump();
}

/// Viewport rows currently showing a spacer instead of an item.
pub fn spacer_rows(list: &List) -> usize {
    list.host()
        .visible_rows(list.root())
        .iter()
        .filter(|row| matches!(row, VisibleRow::Spacer(_)))
        .count()
}

/// A monitor the test keeps a handle to after the list takes ownership.
#[derive(Clone, Default)]
pub struct SharedMonitor(pub Rc<RefCell<GeometryMonitor>>);

impl VisibilityMonitor<RetainedTree> for SharedMonitor {
    fn attach(&mut self, root: NodeId) {
        <GeometryMonitor as VisibilityMonitor<RetainedTree>>::attach(&mut self.0.borrow_mut(), root);
    }

    fn observe(&mut self, node: NodeId) {
        <GeometryMonitor as VisibilityMonitor<RetainedTree>>::observe(&mut self.0.borrow_mut(), node);
    }

    fn unobserve(&mut self, node: NodeId) {
        <GeometryMonitor as VisibilityMonitor<RetainedTree>>::unobserve(&mut self.0.borrow_mut(), node);
    }

    fn invalidate(&mut self, node: NodeId) {
        <GeometryMonitor as VisibilityMonitor<RetainedTree>>::invalidate(&mut self.0.borrow_mut(), node);
    }

    fn disconnect(&mut self) {
        <GeometryMonitor as VisibilityMonitor<RetainedTree>>::disconnect(&mut self.0.borrow_mut());
    }

    fn take_records(&mut self, host: &RetainedTree) -> Vec<VisibilityEntry> {
        self.0.borrow_mut().take_records(host)
    }

    fn observed(&self) -> usize {
        self.0.borrow().tracked()
    }
}
