use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let indicator = &app.indicator;

        let mode_str = match app.mode {
            Mode::Help => "HELP",
            Mode::Normal if indicator.is_interactive() => "INTERACTIVE",
            Mode::Normal => "TIMED",
        };

        let position = if indicator.count() == 0 {
            "-/0".to_string()
        } else {
            format!("{}/{}", indicator.selection() + 1, indicator.count())
        };

        let mut status_text = format!(
            " {} | {} | Page {}",
            mode_str,
            indicator.animation_style(),
            position
        );
        if let Some(msg) = &app.status_message {
            status_text.push_str(" | ");
            status_text.push_str(msg);
        }

        let help_hint = " q:quit h/l:page s:style i:mode ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
