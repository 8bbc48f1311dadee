//! Property tests: window size, contiguity, height conservation and viewport
//! coverage under arbitrary scrolling, and the forward/backward round trip.

mod common;

use common::{bound_indices, list, rendered_texts, scroll_and_settle, spacer_rows};
use proptest::prelude::*;
use vscroll_core::{ExitEdge, ScrollHost};

#[derive(Debug, Clone)]
enum Op {
    ScrollBy(i32),
    Jump(u32),
    Realign,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (-40i32..=40).prop_map(Op::ScrollBy),
        1 => (0u32..5_000).prop_map(Op::Jump),
        1 => Just(Op::Realign),
    ]
}

proptest! {
    #[test]
    fn invariants_survive_any_scroll(
        n in 1usize..200,
        item_height in 1u32..20,
        viewport in 1u32..120,
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut list = list(n, item_height, viewport);
        let expected_size = (viewport.div_ceil(item_height) as usize).min(n);
        let root = list.root();

        for op in ops {
            match op {
                Op::ScrollBy(delta) => scroll_and_settle(&mut list, i64::from(delta)),
                Op::Jump(offset) => {
                    let current = list.host().scroll_offset(root);
                    scroll_and_settle(&mut list, i64::from(offset) - i64::from(current));
                }
                Op::Realign => {
                    list.realign();
                    list.pump();
                }
            }

            prop_assert_eq!(list.window_size(), expected_size);
            let bounds = list.bounds();
            prop_assert_eq!(bound_indices(&list), (bounds.lo..=bounds.hi).collect::<Vec<_>>());
            prop_assert!(bounds.hi < n);

            let spacers = list.spacers();
            prop_assert_eq!(
                u64::from(spacers.top) + expected_size as u64 * u64::from(item_height) + u64::from(spacers.bottom),
                n as u64 * u64::from(item_height)
            );
            prop_assert_eq!(list.host().content_height(root), n as u32 * item_height);

            let expected: Vec<String> = (bounds.lo..=bounds.hi).map(|i| i.to_string()).collect();
            prop_assert_eq!(rendered_texts(&list), expected);

            // Less than one item's worth of spacer may show.
            prop_assert!(spacer_rows(&list) < item_height as usize);
        }
    }

    #[test]
    fn forward_then_backward_restores_bindings(n in 2usize..100, k in 0usize..100) {
        let mut list = list(n, 10, 35);
        let original: Vec<_> = list.bindings().collect();
        let steps = k.min(n - list.window_size());

        for _ in 0..steps {
            let front = list.node_at(list.bounds().lo).unwrap();
            prop_assert!(list.recycle(front, ExitEdge::Top).is_recycled());
        }
        for _ in 0..steps {
            let back = list.node_at(list.bounds().hi).unwrap();
            prop_assert!(list.recycle(back, ExitEdge::Bottom).is_recycled());
        }

        prop_assert_eq!(list.bindings().collect::<Vec<_>>(), original);
        prop_assert_eq!(list.spacers().top, 0);
    }
}
