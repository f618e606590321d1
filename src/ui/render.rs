//! Terminal rendering of the money game.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::economy::{GeneratorKind, Snapshot};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ActionList;

use super::actions;
use super::Screen;

/// Production indicator frames.
const SPINNER: &[char] = &['◐', '◓', '◑', '◒'];

/// Spinner frame duration.
const SPINNER_STEP_MS: u64 = 150;

pub fn render(screen: &Screen, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let Some(snapshot) = &screen.snapshot else {
        return;
    };

    let (main_area, log_area) = if is_narrow_layout(area.width) {
        (area, None)
    } else {
        let h = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (h[0], Some(h[1]))
    };

    // make money, upgrade, one per generator kind, upgrade counter
    let action_rows = 3 + GeneratorKind::all().len() as u16;
    let mut constraints = vec![
        Constraint::Length(3),                // title
        Constraint::Length(3),                // counter
        Constraint::Length(action_rows + 2),  // actions
        Constraint::Length(3),                // production
    ];
    if log_area.is_none() {
        constraints.push(Constraint::Min(3));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(main_area);

    render_title(f, chunks[0]);
    render_counter(snapshot, f, chunks[1]);
    render_actions(snapshot, f, chunks[2], click_state);
    render_production(screen, snapshot, f, chunks[3]);

    match log_area {
        Some(log_area) => render_log(screen, f, log_area),
        None => render_log(screen, f, chunks[4]),
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "💵 Money Clicker 💵",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// `Money: 123 | Farms: 2 | Factories: 0`
pub fn counter_text(snapshot: &Snapshot) -> String {
    let mut parts = vec![format!("Money: {}", format_amount(snapshot.balance))];
    for g in &snapshot.generators {
        parts.push(format!("{}: {}", g.kind.plural(), g.owned));
    }
    parts.join(" | ")
}

fn render_counter(snapshot: &Snapshot, f: &mut Frame, area: Rect) {
    let counter = Paragraph::new(Line::from(Span::styled(
        counter_text(snapshot),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    )
    .alignment(Alignment::Center);
    f.render_widget(counter, area);
}

fn action_line(key: char, label: String, enabled: bool) -> Line<'static> {
    let (key_style, label_style) = if enabled {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };
    Line::from(vec![
        Span::styled(format!(" [{}] ", key.to_ascii_uppercase()), key_style),
        Span::styled(label, label_style),
    ])
}

fn render_actions(
    snapshot: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut al = ActionList::new();
    al.push_action(
        action_line(
            'c',
            format!("Make Money (+{})", format_amount(snapshot.click_yield)),
            true,
        ),
        actions::MAKE_MONEY,
        true,
    );
    al.push_action(
        action_line(
            'u',
            format!("Upgrade ({})", format_amount(snapshot.next_upgrade_cost)),
            snapshot.can_upgrade,
        ),
        actions::UPGRADE,
        snapshot.can_upgrade,
    );
    for g in &snapshot.generators {
        al.push_action(
            action_line(
                g.kind.key(),
                format!(
                    "Buy {} ({}) +{}/tick",
                    g.kind.name(),
                    format_amount(g.next_cost),
                    format_amount(g.rate)
                ),
                g.affordable,
            ),
            actions::buy_generator(g.kind),
            g.affordable,
        );
    }

    al.push(Line::from(Span::styled(
        format!(" Upgrades bought: {}", snapshot.upgrade_count),
        Style::default().fg(Color::DarkGray),
    )));

    al.register_targets(area, &mut click_state.borrow_mut(), 1, 1);

    let widget = Paragraph::new(al.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Actions (tap to select) "),
    );
    f.render_widget(widget, area);
}

fn render_production(screen: &Screen, snapshot: &Snapshot, f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    if snapshot.production_running {
        let frame = (screen.elapsed_ms / SPINNER_STEP_MS) as usize % SPINNER.len();
        spans.push(Span::styled(
            format!("{} ", SPINNER[frame]),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!("+{} / tick", format_amount(snapshot.production_per_tick)),
            Style::default().fg(Color::White),
        ));
        if let Some((income, _)) = screen.income_flash {
            spans.push(Span::styled(
                format!("  +{}", format_amount(income)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    } else {
        spans.push(Span::styled(
            "No passive income yet",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Production "),
    );
    f.render_widget(widget, area);
}

fn render_log(screen: &Screen, f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = screen
        .log
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_width = area.width.saturating_sub(2);
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = paragraph.line_count(inner_width).saturating_sub(visible);

    let widget = paragraph.scroll((scroll as u16, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Log "),
    );
    f.render_widget(widget, area);
}

/// Format an amount with thousands separators: 1234567 → "1,234,567".
pub fn format_amount(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
