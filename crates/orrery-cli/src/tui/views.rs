use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use orrery_core::Body;
use orrery_quiz::{Mode, Round, Tone};

use super::app::Screen;

const NEUTRAL: Color = Color::Gray;

/// Draw the whole screen and record where the options landed.
pub fn draw(frame: &mut Frame, screen: &mut Screen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(6),    // Round
            Constraint::Length(3), // Message
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, screen, chunks[0]);

    let areas = match screen.round.clone() {
        Some(Round::Comparison(r)) => {
            draw_comparison(frame, screen, &[r.left(), r.right()], chunks[1])
        }
        Some(Round::Identification(r)) => {
            draw_identification(frame, screen, r.target(), r.options(), chunks[1])
        }
        None => Vec::new(),
    };
    screen.slot_areas = areas;

    draw_message(frame, screen, chunks[2]);
    draw_status_bar(frame, screen, chunks[3]);
}

fn draw_title(frame: &mut Frame, screen: &Screen, area: Rect) {
    let mode = match screen.mode {
        Mode::Comparison => "Which is bigger?",
        Mode::Identification => "Name that object",
    };
    let mut spans = vec![
        Span::styled(" Orrery ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(mode, Style::default().fg(Color::White).bold()),
    ];
    if let Some(count) = screen.success_count {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Successes: {count}"),
            Style::default().fg(Color::Green),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Two side-by-side panels, names shown, sizes hidden.
fn draw_comparison(frame: &mut Frame, screen: &Screen, bodies: &[&Body], area: Rect) -> Vec<Rect> {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    bodies
        .iter()
        .zip(panels.iter())
        .enumerate()
        .map(|(i, (body, panel))| {
            let block = option_block(screen, format!(" [{}] {} ", i + 1, body.name));
            let inner = block.inner(*panel);
            frame.render_widget(block, *panel);
            draw_swatch(frame, screen, body, inner);
            *panel
        })
        .collect()
}

/// The target on top without its name, three named buttons below.
fn draw_identification(
    frame: &mut Frame,
    screen: &Screen,
    target: &Body,
    options: &[Body; 3],
    area: Rect,
) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let block = option_block(screen, " ??? ".to_string());
    let inner = block.inner(rows[0]);
    frame.render_widget(block, rows[0]);
    draw_swatch(frame, screen, target, inner);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);

    options
        .iter()
        .zip(buttons.iter())
        .enumerate()
        .map(|(i, (body, button))| {
            let label = Paragraph::new(format!("[{}] {}", i + 1, body.name))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(Color::Blue)),
                );
            frame.render_widget(label, *button);
            *button
        })
        .collect()
}

fn option_block(screen: &Screen, title: String) -> Block<'static> {
    let border = match screen.outcome {
        Some(true) => Color::Green,
        Some(false) => Color::Red,
        None => Color::Blue,
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Fill with the body's tint. Terminals cannot draw the texture itself.
fn draw_swatch(frame: &mut Frame, screen: &Screen, body: &Body, area: Rect) {
    let fill = body.color.map_or(NEUTRAL, |tint| {
        let (r, g, b) = tint.rgb();
        Color::Rgb(r, g, b)
    });

    let mut details = Vec::new();
    if let Some(kind) = body.kind {
        details.push(kind.to_string());
    }
    if body.emissive == Some(true) {
        details.push("glowing".to_string());
    }
    if screen.texture_missing(body) {
        details.push("(no texture)".to_string());
    }

    let swatch = Paragraph::new(details.join("  "))
        .alignment(Alignment::Center)
        .style(Style::default().bg(fill).fg(contrast(fill)))
        .wrap(Wrap { trim: true });
    frame.render_widget(swatch, area);
}

/// Black or white, whichever reads better on `bg`.
fn contrast(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
            if luma > 128_000 { Color::Black } else { Color::White }
        }
        _ => Color::Black,
    }
}

fn draw_message(frame: &mut Frame, screen: &Screen, area: Rect) {
    let Some((text, tone)) = &screen.message else {
        return;
    };
    let color = match tone {
        Tone::Prompt => Color::White,
        Tone::Success => Color::Green,
        Tone::Retry => Color::Yellow,
        Tone::Error => Color::Red,
    };
    let message = Paragraph::new(text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold())
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn draw_status_bar(frame: &mut Frame, screen: &Screen, area: Rect) {
    let status = match screen.round {
        Some(Round::Comparison(_)) => "1/2 or click:pick  q:quit",
        Some(Round::Identification(_)) => "1/2/3 or click:answer  q:quit",
        None => "q:quit",
    };
    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(bar, area);
}
