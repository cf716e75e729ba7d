use std::ops::Range;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::domain::{
    catalog::{MediaItem, Shelf},
    text,
};

/// Width of one item cell, separator included
pub const ITEM_WIDTH: u16 = 22;

/// Items of `len` that fit in `capacity` cells while keeping `selected` visible.
///
/// Pages are aligned to multiples of `capacity`, so moving within a page does
/// not scroll the row.
pub fn visible_window(len: usize, selected: usize, capacity: usize) -> Range<usize> {
    if len == 0 || capacity == 0 {
        return 0..0;
    }
    let selected = selected.min(len - 1);
    let start = selected / capacity * capacity;
    start..(start + capacity).min(len)
}

#[derive(Debug, Clone)]
pub struct ShelfStyles {
    pub title: Style,
    pub item: Style,
    pub selected: Style,
}

/// One curated list: a title line and a horizontally paged row of items
#[derive(Debug, Clone)]
pub struct ShelfWidget<'a> {
    shelf: Shelf,
    items: &'a [MediaItem],
    selected: usize,
    /// Whether this shelf holds the feed cursor
    focused: bool,
    styles: ShelfStyles,
}

impl<'a> ShelfWidget<'a> {
    pub fn new(shelf: Shelf, items: &'a [MediaItem], styles: ShelfStyles) -> Self {
        Self {
            shelf,
            items,
            selected: 0,
            focused: false,
            styles,
        }
    }

    pub fn selected(mut self, selected: usize, focused: bool) -> Self {
        self.selected = selected;
        self.focused = focused;
        self
    }

    fn title_line(&self, window: &Range<usize>) -> Line<'static> {
        let marker = if self.focused { "▸ " } else { "  " };
        let mut spans = vec![Span::styled(
            format!("{marker}{}", self.shelf.title()),
            self.styles.title,
        )];
        if self.items.len() > window.len() {
            spans.push(Span::raw(format!(
                "  {}-{}/{}",
                window.start + 1,
                window.end,
                self.items.len()
            )));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for ShelfWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let [title_area, row_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let capacity = (area.width / ITEM_WIDTH).max(1) as usize;
        let window = visible_window(self.items.len(), self.selected, capacity);
        Paragraph::new(self.title_line(&window)).render(title_area, buf);

        if self.items.is_empty() {
            Paragraph::new("  Nothing here yet")
                .style(self.styles.item)
                .render(row_area, buf);
            return;
        }

        let cell_width = (ITEM_WIDTH - 2) as usize;
        let spans: Vec<Span<'static>> = window
            .clone()
            .map(|index| {
                let label = text::center(&self.items[index].title, cell_width);
                let style = if self.focused && index == self.selected {
                    self.styles.selected
                } else {
                    self.styles.item
                };
                Span::styled(format!("[{label}]"), style)
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(row_area, buf);
    }
}
