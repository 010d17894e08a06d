use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// The pager's visible content: the left page and whatever part of the
/// next page has scrolled into view
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let position = app.pager.scroll_position().max(0.0);
        let left = position.floor() as usize;
        let offset = position - position.floor();
        let right_width = split_width(area.width, offset);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(area.width - right_width),
                Constraint::Length(right_width),
            ])
            .split(area);

        Self::render_page(frame, columns[0], app, left);
        if right_width > 0 {
            Self::render_page(frame, columns[1], app, left + 1);
        }
    }

    fn render_page(frame: &mut Frame, area: Rect, app: &App, page: usize) {
        let theme = &app.theme;
        let current = page == app.pager.current_page();
        let border = if current { theme.accent } else { theme.grey1 };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.bg0));

        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![Line::default(); (inner_height / 2).saturating_sub(1) as usize];
        lines.push(Line::from(Span::styled(
            format!("Page {}", page + 1),
            Style::default().fg(theme.fg1).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("of {}", app.pager.page_count()),
            Style::default().fg(theme.grey2),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

/// Columns taken by the incoming page at `offset` of the way through a scroll
fn split_width(width: u16, offset: f32) -> u16 {
    ((width as f32 * offset).round() as u16).min(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_width() {
        assert_eq!(split_width(80, 0.0), 0);
        assert_eq!(split_width(80, 0.25), 20);
        assert_eq!(split_width(80, 0.999), 80);
    }
}
