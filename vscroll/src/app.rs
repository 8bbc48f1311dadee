//! Central application state for vscroll.
//!
//! Owns the list engine, the shared item slice it renders from, the current
//! mode, and the viewport height the engine was built for. No ratatui rendering
//! logic lives here; `app.rs` is pure state that is read by the render module
//! and mutated by the keybinding dispatcher.

use std::sync::Arc;

use tracing::{debug, warn};
use vscroll_core::{GeometryMonitor, RetainedTree, ScrollHost, WindowManager};

/// The list engine as used by the terminal front end.
pub type ListEngine = WindowManager<String, RetainedTree, GeometryMonitor>;

/// Identifier of the scroll container inside each engine's tree.
const CONTAINER_ID: &str = "list";

/// Editor mode controlling which keybinding set is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// List navigation (default).
    #[default]
    Normal,
    /// Full-screen help overlay is shown above the list.
    HelpOverlay,
}

/// All mutable UI state passed through every render cycle.
pub struct AppState {
    pub mode: Mode,

    /// Every item, shared with the engine without copying.
    pub items: Arc<[String]>,
    /// Rows each item node occupies.
    pub item_rows: u32,

    /// Engine for the current viewport height. `None` until the first render
    /// or when the last build failed.
    pub list: Option<ListEngine>,
    /// Inner height of the list panel the engine was built for.
    pub viewport_height: u16,
    /// Message from the last failed engine build, shown in the status bar.
    pub last_error: Option<String>,

    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,
}

impl AppState {
    pub fn new(items: Arc<[String]>, item_rows: u32) -> Self {
        Self {
            mode: Mode::default(),
            items,
            item_rows,
            list: None,
            viewport_height: 0,
            last_error: None,
            help_scroll: 0,
        }
    }

    /// Rebuilds the engine when the panel height changed since the last build.
    ///
    /// The window size is fixed per engine, so a new height needs a new engine.
    /// The previous scroll offset is carried over and the new window realigned
    /// to it.
    pub fn ensure_viewport(&mut self, height: u16) {
        // A failed build is not retried until the height changes.
        let built = self.list.is_some() || self.last_error.is_some();
        if built && height == self.viewport_height {
            return;
        }
        let previous_offset = self
            .list
            .as_ref()
            .map(|l| l.host().scroll_offset(l.root()))
            .unwrap_or(0);
        // Drop the old engine first so its nodes are unobserved.
        self.list = None;
        self.viewport_height = height;

        let mut tree = RetainedTree::new(self.item_rows);
        tree.add_container(CONTAINER_ID);
        match WindowManager::new(
            tree,
            GeometryMonitor::new(),
            CONTAINER_ID,
            u32::from(height),
            Arc::clone(&self.items),
        ) {
            Ok(mut list) => {
                let root = list.root();
                list.host_mut().scroll_to(root, previous_offset);
                list.realign();
                list.pump();
                debug!(height, window = list.window_size(), "list engine built");
                self.list = Some(list);
                self.last_error = None;
            }
            Err(e) => {
                warn!(height, "cannot build list engine: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Forces an engine rebuild on the next render (after a terminal resize).
    pub fn invalidate_viewport(&mut self) {
        self.viewport_height = 0;
    }

    /// Scrolls the list by `delta` rows (negative is up).
    ///
    /// Moves further than the rendered window are followed by a realign, since
    /// node-by-node recycling cannot cover them. Visibility reports are then
    /// processed as one batch.
    pub fn scroll_by(&mut self, delta: i64) {
        let Some(list) = self.list.as_mut() else { return };
        let root = list.root();
        let before = list.host().scroll_offset(root);
        let after = list.host_mut().scroll_by(root, delta);
        Self::settle(list, before.abs_diff(after));
    }

    /// Scrolls the list to its first row.
    pub fn scroll_top(&mut self) {
        self.scroll_to(0);
    }

    /// Scrolls the list to its last row.
    pub fn scroll_bottom(&mut self) {
        self.scroll_to(u32::MAX);
    }

    /// Scrolls down by half the viewport. Scrolls by 1 when the viewport is unknown.
    pub fn half_page_down(&mut self) {
        self.scroll_by(i64::from((self.viewport_height / 2).max(1)));
    }

    pub fn half_page_up(&mut self) {
        self.scroll_by(-i64::from((self.viewport_height / 2).max(1)));
    }

    pub fn full_page_down(&mut self) {
        self.scroll_by(i64::from(self.viewport_height.max(1)));
    }

    pub fn full_page_up(&mut self) {
        self.scroll_by(-i64::from(self.viewport_height.max(1)));
    }

    fn scroll_to(&mut self, offset: u32) {
        let Some(list) = self.list.as_mut() else { return };
        let root = list.root();
        let before = list.host().scroll_offset(root);
        let after = list.host_mut().scroll_to(root, offset);
        Self::settle(list, before.abs_diff(after));
    }

    fn settle(list: &mut ListEngine, distance: u32) {
        let window_rows = list.window_size() as u32 * list.item_height();
        if distance >= window_rows {
            list.realign();
        }
        let summary = list.pump();
        if summary.recycled > 0 {
            let bounds = list.bounds();
            debug!(
                recycled = summary.recycled,
                skipped = summary.skipped,
                lo = bounds.lo,
                hi = bounds.hi,
                "scroll settled"
            );
        }
    }
}
