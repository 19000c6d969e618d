pub mod braille;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(100, 200, 255)))
        .title(" Rustroids ")
        .title_style(Style::default().fg(Color::Rgb(130, 220, 255)).add_modifier(Modifier::BOLD));

    let area = frame.area();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(status_line(app)), chunks[0]);

    // The next tick draws at the new resolution.
    app.canvas.resize(chunks[1].width as usize, chunks[1].height as usize);
    if chunks[1].width > 0 && chunks[1].height > 0 {
        frame.render_widget(Paragraph::new(app.canvas.lines()), chunks[1]);
    }

    frame.render_widget(Paragraph::new(help_line(app)), chunks[2]);
}

fn status_line(app: &App) -> Line<'static> {
    let ship = &app.sim.ship;
    let heading = ship.a.to_degrees().rem_euclid(360.0);
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let mut spans = vec![
        Span::styled(" \u{2604} ", Style::default()),
        Span::styled(
            format!("Heading: {:>3.0}\u{00b0}", heading),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("Speed: {:.2} px/t", ship.thrust.magnitude()),
            Style::default().fg(Color::Yellow),
        ),
        sep(),
        Span::styled(
            format!("Pos: {:.0},{:.0}", ship.x, ship.y),
            Style::default().fg(Color::Green),
        ),
        sep(),
        Span::styled(
            format!("Tick: {} @ {} fps", app.sim.ticks, app.fps),
            Style::default().fg(Color::Rgb(160, 140, 120)),
        ),
    ];
    if ship.thrusting {
        spans.push(sep());
        spans.push(Span::styled(
            "THRUST",
            Style::default().fg(Color::Rgb(255, 130, 30)).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn help_line(app: &App) -> Line<'static> {
    let key = Style::default().fg(Color::DarkGray);
    let bar = Style::default().fg(Color::Rgb(60, 60, 60));
    let mut spans = vec![
        Span::styled(" \u{2190}\u{2192}/AD Rotate ", key),
        Span::styled("| ", bar),
        Span::styled("\u{2191}/W Thrust ", key),
        Span::styled("| ", bar),
        Span::styled("R Restart ", key),
        Span::styled("| ", bar),
        Span::styled("Q/Esc Quit", key),
    ];
    if !app.key_release {
        spans.push(Span::styled(
            "  (terminal cannot report key releases)",
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}
