//! Recycling window engine for very long lists.
//!
//! A [`WindowManager`] renders just enough nodes to cover a fixed-height
//! viewport and recycles them as they scroll out of view, with two spacer
//! regions keeping the scroll height equal to that of the full list. The
//! engine is toolkit-agnostic: it talks to a [`ScrollHost`] and is driven by a
//! [`VisibilityMonitor`]. [`RetainedTree`] and [`GeometryMonitor`] provide a
//! headless implementation of both.
//!
//! ```
//! use vscroll_core::{GeometryMonitor, RetainedTree, WindowManager};
//!
//! let mut tree = RetainedTree::new(50);
//! tree.add_container("list");
//! let items: Vec<String> = (0..10).map(|i| i.to_string()).collect();
//! let mut list = WindowManager::new(tree, GeometryMonitor::new(), "list", 200, items).unwrap();
//! list.pump();
//!
//! let root = list.root();
//! list.host_mut().scroll_to(root, 50);
//! list.pump();
//! assert_eq!((list.bounds().lo, list.bounds().hi), (1, 4));
//! ```

pub mod error;
pub mod host;
pub mod monitor;
pub mod tree;
pub mod types;
pub mod window;

pub use error::{ConfigurationError, Result, VScrollError};
pub use host::{Geometry, HeightProbe, ScrollHost, Span};
pub use monitor::{GeometryMonitor, VisibilityEntry, VisibilityMonitor};
pub use tree::{Overflow, RetainedTree, VisibleRow};
pub use types::{
    BatchSummary, ExitEdge, NodeId, RecycleOutcome, Region, SkipReason, Spacers, WindowBounds,
};
pub use window::{Regions, WindowManager};
