use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const LABEL: &str = "Searching…";

/// Loading indicator shown while the store looks up a query without results yet
#[derive(Debug, Clone)]
pub struct SpinnerWidget {
    compact: bool,
    style: Style,
}

impl SpinnerWidget {
    pub fn new(compact: bool) -> Self {
        Self {
            compact,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Rows needed to draw the indicator
    pub fn height(compact: bool) -> u16 {
        if compact {
            1
        } else {
            5
        }
    }
}

impl Widget for SpinnerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.compact {
            Paragraph::new(format!("◌ {LABEL}"))
                .style(self.style)
                .render(area, buf);
            return;
        }

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(vec![Line::from("◌ ◌ ◌"), Line::from(""), Line::from(LABEL)])
            .alignment(Alignment::Center)
            .style(self.style)
            .render(inner, buf);
    }
}
