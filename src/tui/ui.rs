//! UI rendering for the register viewer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table},
    style::{Color, Style, Modifier},
};
use crate::speed::SPEED_INDEX_MAX;
use super::app::ViewerApp;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &ViewerApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    draw_registers(frame, chunks[0], app);
    draw_speed(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_help(frame, chunks[3]);
}

/// Draw the register table in the current base.
fn draw_registers(frame: &mut Frame, area: Rect, app: &ViewerApp) {
    let header = Row::new(vec!["Reg", "Signed", "Unsigned", "Float", "ASCII"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .rows()
        .into_iter()
        .map(|cells| {
            let style = if cells[1] == "0" || cells[1] == "0x00000000" {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(cells.to_vec()).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(5),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(format!(" Registers ({}) ", app.display.get()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)));

    frame.render_widget(table, area);
}

/// Draw the run speed slider.
fn draw_speed(frame: &mut Frame, area: Rect, app: &ViewerApp) {
    let speed = app.ctx.run_speed();
    let color = if speed.is_unlimited() { Color::Red } else { Color::Yellow };

    let gauge = Gauge::default()
        .block(Block::default()
            .title(" Speed ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)))
        .gauge_style(Style::default().fg(color))
        .ratio(app.slider as f64 / SPEED_INDEX_MAX as f64)
        .label(speed.label());

    frame.render_widget(gauge, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &ViewerApp) {
    let text = format!("{}   steps: {}", app.status, app.steps);
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("r: Run/Pause  s: Step  h: Toggle hex  a: ASCII column"),
        Line::from("←→: Speed  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}
