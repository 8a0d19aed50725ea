use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
    STATUS_PENDING,
};
use crate::ui::view::{ArticlesView, Banner, RowLabel, RowView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let view = app.view();

    let header_widget = Header::new(view.status, view.rows.len(), app.spinner());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner_height = block.inner(body).height;
    let offset = scroll_offset(&view, inner_height);
    frame.render_widget(
        Paragraph::new(body_lines(&view))
            .block(block)
            .scroll((offset, 0)),
        body,
    );

    frame.render_widget(Footer::new().widget(footer), footer);
}

/// Lines of the body panel: the banner (if any) followed by the rows.
pub fn body_lines(view: &ArticlesView) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(banner) = &view.banner {
        lines.push(banner_line(banner));
        lines.push(Line::from(""));
    }

    if view.rows.is_empty() && view.banner.is_none() {
        lines.push(Line::from(Span::styled(
            "  No articles.",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let id_width = view
        .rows
        .iter()
        .map(|row| row.id.to_string().len())
        .max()
        .unwrap_or(1);

    for row in &view.rows {
        lines.push(row_line(row, id_width, view.stale));
    }

    lines
}

/// First body line to show so the selected row stays inside a panel of
/// `height` lines.
pub fn scroll_offset(view: &ArticlesView, height: u16) -> u16 {
    let Some(index) = view.rows.iter().position(|row| row.selected) else {
        return 0;
    };
    let banner_lines = if view.banner.is_some() { 2 } else { 0 };
    let line = banner_lines + index;
    let height = usize::from(height.max(1));
    let offset = (line + 1).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn banner_line(banner: &Banner) -> Line<'static> {
    match banner {
        Banner::Loading => Line::from(Span::styled(
            "  Loading articles...",
            Style::default().fg(STATUS_PENDING),
        )),
        Banner::LoadFailed { message } => Line::from(vec![
            Span::styled(
                format!("  Could not load articles: {}", message),
                Style::default().fg(STATUS_ERROR),
            ),
            Span::styled("  (r: retry)", Style::default().fg(MUTED_TEXT)),
        ]),
        Banner::DeleteFailed { id, message } => Line::from(vec![
            Span::styled(
                format!("  Could not delete article {}: {}", id, message),
                Style::default().fg(STATUS_ERROR),
            ),
            Span::styled("  (r: retry)", Style::default().fg(MUTED_TEXT)),
        ]),
    }
}

fn row_line(row: &RowView, id_width: usize, stale: bool) -> Line<'static> {
    let label_style = match row.label {
        RowLabel::Idle => Style::default().fg(ACCENT),
        RowLabel::Deleting => Style::default().fg(STATUS_PENDING),
        RowLabel::Retry => Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
    };
    let mut title_style = Style::default().fg(HEADER_TEXT);
    if stale {
        title_style = title_style.add_modifier(Modifier::DIM);
    }

    let mut line = Line::from(vec![
        Span::styled(format!("  [{}] ", row.label.as_str()), label_style),
        Span::styled(
            format!("{:>width$}. ", row.id, width = id_width),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(row.title.clone(), title_style),
    ]);

    if row.selected {
        line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
    }
    line
}
