use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::domain::{catalog::MediaItem, text};

/// Large banner for the featured item at the top of the home feed
#[derive(Debug, Clone)]
pub struct PosterWidget<'a> {
    item: Option<&'a MediaItem>,
    style: Style,
}

impl<'a> PosterWidget<'a> {
    pub fn new(item: Option<&'a MediaItem>) -> Self {
        Self {
            item,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let Some(item) = self.item else {
            return vec![Line::from("Nothing featured")];
        };

        let mut details = vec![item.kind.to_string()];
        if let Some(year) = item.year {
            details.push(year.to_string());
        }
        if let Some(rating) = item.rating {
            details.push(format!("★ {rating:.1}"));
        }

        vec![
            Line::from(text::truncate_to_width(&item.title, width)).bold(),
            Line::from(text::truncate_to_width(&details.join(" · "), width)),
        ]
    }
}

impl<'a> Widget for PosterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Featured ");
        let inner = block.inner(area);
        block.style(self.style).render(area, buf);

        let lines = self.lines(inner.width as usize);
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let [_, content] = Layout::vertical([Constraint::Length(top), Constraint::Min(0)])
            .areas(inner);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(self.style)
            .render(content, buf);
    }
}
