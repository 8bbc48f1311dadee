//! Retained tree layout and the geometry-driven visibility monitor.

use vscroll_core::{
    ExitEdge, Geometry, GeometryMonitor, HeightProbe, Region, RetainedTree, ScrollHost, Span,
    VisibilityEntry, VisibilityMonitor, VisibleRow,
};

/// Container with a 20-unit top spacer, five 10-unit items, 30-unit bottom spacer.
fn fixture() -> (RetainedTree, Vec<vscroll_core::NodeId>) {
    let mut tree = RetainedTree::new(10);
    let root = tree.add_container("list");
    tree.configure_viewport(root, 25);
    let top = tree.create_region(root, Region::TopSpacer);
    let content = tree.create_region(root, Region::Content);
    let bottom = tree.create_region(root, Region::BottomSpacer);
    tree.set_region_height(top, 20);
    tree.set_region_height(bottom, 30);
    let items = (0..5).map(|i| tree.create_node(content, &format!("item {i}"))).collect();
    (tree, items)
}

#[test]
fn layout_stacks_regions_and_items() {
    let (tree, items) = fixture();
    let root = tree.find_container("list").unwrap();

    assert_eq!(tree.content_height(root), 20 + 50 + 30);
    assert_eq!(tree.node_span(items[0]), Some(Span { top: 20, bottom: 30 }));
    assert_eq!(tree.node_span(items[4]), Some(Span { top: 60, bottom: 70 }));
    assert_eq!(tree.measure_height(items[2]), Some(10));
    assert_eq!(tree.viewport(root), Some(Span { top: 0, bottom: 25 }));
}

#[test]
fn scroll_is_clamped_to_content() {
    let (mut tree, _) = fixture();
    let root = tree.find_container("list").unwrap();

    assert_eq!(tree.max_scroll(root), 75);
    assert_eq!(tree.scroll_to(root, 500), 75);
    assert_eq!(tree.scroll_by(root, -100), 0);
    assert_eq!(tree.scroll_by(root, 12), 12);
    assert_eq!(tree.scroll_offset(root), 12);
}

#[test]
fn unconfigured_container_does_not_scroll() {
    let mut tree = RetainedTree::new(1);
    let root = tree.add_container("plain");
    assert_eq!(tree.scroll_to(root, 5), 0);
}

#[test]
fn reordering_moves_layout() {
    let (mut tree, items) = fixture();
    let content = tree.children(tree.find_container("list").unwrap())[1];

    tree.move_to_end(content, items[0]);
    assert_eq!(tree.node_span(items[0]), Some(Span { top: 60, bottom: 70 }));
    assert_eq!(tree.node_span(items[1]), Some(Span { top: 20, bottom: 30 }));

    tree.move_to_start(content, items[0]);
    assert_eq!(tree.children(content), items.as_slice());
}

#[test]
fn monitor_reports_first_observation_then_changes_only() {
    let (mut tree, items) = fixture();
    let root = tree.find_container("list").unwrap();
    let mut monitor = GeometryMonitor::new();
    VisibilityMonitor::<RetainedTree>::attach(&mut monitor, root);
    for &node in &items {
        VisibilityMonitor::<RetainedTree>::observe(&mut monitor, node);
    }

    // Viewport [0, 25): item 0 at [20, 30) intersects, the rest are below.
    let first = monitor.take_records(&tree);
    assert_eq!(
        first,
        vec![
            VisibilityEntry::entered(items[0]),
            VisibilityEntry::left(items[1], ExitEdge::Bottom),
            VisibilityEntry::left(items[2], ExitEdge::Bottom),
            VisibilityEntry::left(items[3], ExitEdge::Bottom),
            VisibilityEntry::left(items[4], ExitEdge::Bottom),
        ]
    );
    assert!(monitor.take_records(&tree).is_empty());

    // Viewport [30, 55): item 0 touches the top edge only, items 1..=3 enter.
    tree.scroll_to(root, 30);
    let second = monitor.take_records(&tree);
    assert_eq!(
        second,
        vec![
            VisibilityEntry::left(items[0], ExitEdge::Top),
            VisibilityEntry::entered(items[1]),
            VisibilityEntry::entered(items[2]),
            VisibilityEntry::entered(items[3]),
        ]
    );
}

#[test]
fn unobserved_nodes_are_not_reported() {
    let (tree, items) = fixture();
    let root = tree.find_container("list").unwrap();
    let mut monitor = GeometryMonitor::new();
    VisibilityMonitor::<RetainedTree>::attach(&mut monitor, root);
    VisibilityMonitor::<RetainedTree>::observe(&mut monitor, items[0]);
    VisibilityMonitor::<RetainedTree>::observe(&mut monitor, items[1]);
    VisibilityMonitor::<RetainedTree>::unobserve(&mut monitor, items[0]);

    let records = monitor.take_records(&tree);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].node, items[1]);

    VisibilityMonitor::<RetainedTree>::disconnect(&mut monitor);
    assert_eq!(monitor.tracked(), 0);
}

#[test]
fn visible_rows_cover_the_viewport() {
    let (mut tree, items) = fixture();
    let root = tree.find_container("list").unwrap();
    tree.scroll_to(root, 15);

    let rows = tree.visible_rows(root);
    assert_eq!(rows.len(), 25);
    assert!(rows[..5].iter().all(|r| *r == VisibleRow::Spacer(Region::TopSpacer)));
    assert_eq!(rows[5], VisibleRow::Item { node: items[0], text: "item 0", line: 0 });
    assert_eq!(rows[14], VisibleRow::Item { node: items[0], text: "item 0", line: 9 });
    assert_eq!(rows[24], VisibleRow::Item { node: items[1], text: "item 1", line: 9 });

    tree.scroll_to(root, 75);
    let rows = tree.visible_rows(root);
    // Viewport [75, 100) lies entirely in the bottom spacer.
    assert!(rows.iter().all(|r| *r == VisibleRow::Spacer(Region::BottomSpacer)));
}

#[test]
fn detached_nodes_have_no_height() {
    let tree = RetainedTree::new(4);
    assert_eq!(tree.measure_height(vscroll_core::NodeId(99)), None);
}

#[test]
fn invalidated_node_is_reported_again() {
    let (mut tree, items) = fixture();
    let root = tree.find_container("list").unwrap();
    let content = tree.children(root)[1];
    let mut monitor = GeometryMonitor::new();
    VisibilityMonitor::<RetainedTree>::attach(&mut monitor, root);
    VisibilityMonitor::<RetainedTree>::observe(&mut monitor, items[0]);
    monitor.take_records(&tree);

    // Moved out of view and back between batches: no net change to report.
    tree.move_to_end(content, items[0]);
    tree.move_to_start(content, items[0]);
    assert!(monitor.take_records(&tree).is_empty());

    // Moved below the viewport and invalidated: reported from its new spot.
    tree.move_to_end(content, items[0]);
    VisibilityMonitor::<RetainedTree>::invalidate(&mut monitor, items[0]);
    assert_eq!(
        monitor.take_records(&tree),
        vec![VisibilityEntry::left(items[0], ExitEdge::Bottom)]
    );

    // Invalidation always yields one entry, even with no change.
    VisibilityMonitor::<RetainedTree>::invalidate(&mut monitor, items[0]);
    assert_eq!(monitor.take_records(&tree).len(), 1);
    assert!(monitor.take_records(&tree).is_empty());
}

#[test]
fn node_handles_are_arena_slots() {
    let (tree, items) = fixture();
    let root = tree.find_container("list").unwrap();
    // Container, three regions, then the items in creation order.
    assert_eq!(root, vscroll_core::NodeId(0));
    let expected: Vec<_> = (4..9).map(vscroll_core::NodeId).collect();
    assert_eq!(items, expected);
}
