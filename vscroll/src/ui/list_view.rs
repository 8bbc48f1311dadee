//! List panel renderer for vscroll.
//!
//! Paints the engine's retained tree row by row: whatever intersects the
//! viewport (spacer rows, then the rows of each bound item node) exactly as
//! the tree lays it out. Nothing outside the rendered window is ever read, so
//! drawing cost is O(viewport) regardless of list length.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::Line,
    widgets::{List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use vscroll_core::{ScrollHost, VisibleRow};

use crate::app::{AppState, ListEngine};
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Renders the list panel with its scrollbar.
///
/// # Arguments
///
/// * `frame`: current render frame
/// * `area`: the `Rect` for the list panel (includes borders)
/// * `state`: app state supplying the engine
/// * `theme`: active color theme
pub fn render_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let title = format!(" Items ({}) ", state.items.len());
    frame.render_widget(panel_block(&title, theme), area);
    let inner = inner_rect(area);

    let Some(list) = state.list.as_ref() else {
        return;
    };

    let width = inner.width.saturating_sub(1) as usize;
    let rows: Vec<ListItem> = list
        .host()
        .visible_rows(list.root())
        .into_iter()
        .map(|row| row_item(list, row, width, theme))
        .collect();
    frame.render_widget(List::new(rows), inner);

    let root = list.root();
    let tree = list.host();
    let mut scrollbar_state = ScrollbarState::new(tree.max_scroll(root) as usize)
        .position(tree.scroll_offset(root) as usize)
        .viewport_content_length(inner.height as usize);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Style::default().fg(theme.scrollbar)),
        area.inner(Margin { vertical: 1, horizontal: 0 }),
        &mut scrollbar_state,
    );
}

/// Converts one viewport row into a `ListItem`.
///
/// Item rows show the `line`-th `width`-wide slice of the node's text, so
/// multi-row items wrap by character. Colors alternate by list index.
fn row_item<'a>(list: &ListEngine, row: VisibleRow<'a>, width: usize, theme: &Theme) -> ListItem<'a> {
    match row {
        VisibleRow::Item { node, text, line } => {
            let fg = match list.index_of(node) {
                Some(i) if i % 2 == 1 => theme.item_text_alt,
                _ => theme.item_text,
            };
            let slice: String = text.chars().skip(line as usize * width).take(width).collect();
            ListItem::new(Line::raw(slice)).style(Style::default().fg(fg))
        }
        VisibleRow::Spacer(_) => ListItem::new(Line::raw("")).style(Style::default().bg(theme.spacer)),
        VisibleRow::Empty => ListItem::new(Line::raw("")),
    }
}
