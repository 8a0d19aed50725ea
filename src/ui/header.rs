use crate::articles::ArticlesStatus;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    status: ArticlesStatus,
    count: usize,
    spinner: &'static str,
}

impl Header {
    pub fn new(status: ArticlesStatus, count: usize, spinner: &'static str) -> Self {
        Self {
            status,
            count,
            spinner,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(status_color(self.status));
        let badge = match self.status {
            ArticlesStatus::Loading => format!("{} {}", self.spinner, self.status),
            _ => self.status.to_string(),
        };
        let line = Line::from(vec![
            Span::styled("  Articles", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(badge, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} items", self.count), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

pub fn status_color(status: ArticlesStatus) -> Color {
    match status {
        ArticlesStatus::Loading => STATUS_PENDING,
        ArticlesStatus::Success => STATUS_OK,
        ArticlesStatus::Error | ArticlesStatus::ErrorDeleting => STATUS_ERROR,
    }
}
