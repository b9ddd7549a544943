//! Utility widgets shown under the Utils menu.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::actions::PingStatus;
use crate::app::App;
use crate::components::{render_progress_gauge, spinner_frame};

/// Rows the destination table needs: header, ten rows, two borders.
const TABLE_HEIGHT: u16 = 13;

/// Timer line text.
pub fn timer_text(app: &App) -> String {
    if app.timer.is_running() {
        format!("Timer running {}", app.timer.display())
    } else if app.timer.is_spent() {
        "Timer finished".to_string()
    } else {
        format!("Timer stopped {}", app.timer.display())
    }
}

fn ping_line(app: &App) -> Line<'static> {
    let theme = crate::theme::get_theme();
    match &app.ping {
        PingStatus::Idle => Line::from(Span::styled("Ping idle", Style::default().fg(theme.text_muted))),
        PingStatus::Waiting { started, .. } => Line::from(Span::styled(
            format!(
                "{} Pinging {} ({}s)",
                spinner_frame(app.frame_count),
                app.config().ping.url,
                started.elapsed().as_secs()
            ),
            Style::default().fg(theme.text),
        )),
        PingStatus::Done(outcome) => {
            let color = if outcome.is_ok() { theme.success } else { theme.error };
            Line::from(Span::styled(outcome.label(), Style::default().fg(color)))
        }
    }
}

/// Renders the table, timer, ping status, and progress gauge.
pub fn render_utilities(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = crate::theme::get_theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABLE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    app.table.render(frame, chunks[0], Some(" Destinations "));

    let timer = Paragraph::new(Span::styled(timer_text(app), Style::default().fg(theme.text)));
    frame.render_widget(timer, chunks[1]);

    frame.render_widget(Paragraph::new(ping_line(app)), chunks[2]);

    render_progress_gauge(frame, chunks[3], " Progress ", app.progress.percent());
}
