use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const HINT: &str = "Press Enter, Esc or Space to dismiss";

/// Dimming layer drawn over the whole screen after a long press
#[derive(Debug, Clone, Default)]
pub struct OverlayWidget {
    style: Style,
}

impl OverlayWidget {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Widget for OverlayWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Keep what is underneath visible, only dimmed
        buf.set_style(area, self.style.add_modifier(Modifier::DIM));

        let width = (HINT.chars().count() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let hint_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };
        Clear.render(hint_area, buf);
        Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .render(hint_area, buf);
    }
}
