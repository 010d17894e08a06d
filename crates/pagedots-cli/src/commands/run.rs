use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use pagedots_core::AppConfig;
use pagedots_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{HelpWidget, IndicatorWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pagedots"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: Arc<AppConfig>) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.pager.animation_fps);
    let mut app = App::new(config);

    tracing::info!(
        "Starting with {} indicators, style {}",
        app.indicator.count(),
        app.indicator.animation_style()
    );

    // Track if the screen is stale for reasons other than the indicator
    let mut dirty = true;

    // Main loop
    loop {
        app.update();

        let indicator_changed = app.indicator.take_redraw();
        if dirty || indicator_changed || app.pager.is_animating() {
            terminal.draw(|frame| {
                let size = frame.area();

                // Main layout: pages + indicator row + status bar
                let main_layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Min(3),
                        Constraint::Length(IndicatorWidget::height(&app)),
                        Constraint::Length(1),
                    ])
                    .split(size);

                PageWidget::render(frame, main_layout[0], &app);
                IndicatorWidget::render(frame, main_layout[1], &mut app);
                StatusBarWidget::render(frame, main_layout[2], &app);

                if app.mode == Mode::Help {
                    HelpWidget::render(frame, &app.theme);
                }
            })?;
            dirty = false;
        }

        // Handle events (use faster tick rate during animations)
        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    app.handle_action(action);
                    dirty = true;
                }
                AppEvent::Resize(_, _) => dirty = true,
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
