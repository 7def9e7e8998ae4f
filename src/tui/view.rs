//! All rendering. Nothing in here mutates state; the functions read the
//! [`App`] and draw one frame of the single screen.

use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::app::{App, Form};
use crate::types::Field;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Length(1), // Error banner
        Constraint::Min(7),    // Table
        Constraint::Length(1), // Pagination
        Constraint::Length(1), // Status
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    draw_title(frame, layout[0]);
    draw_banner(frame, layout[1], app);
    draw_table(frame, layout[2], app);
    draw_pagination(frame, layout[3], app);
    draw_status(frame, layout[4], app);
    draw_hints(frame, layout[5], app);

    if let Some(form) = &app.form {
        draw_form(frame, area, form);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Roster",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" user directory", Style::default().fg(Color::Gray)),
    ]));
    frame.render_widget(title, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.error {
        let banner = Paragraph::new(message.as_str()).style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(banner, area);
    }
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["ID", "First Name", "Last Name", "Email", "Department"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = app.visible().iter().map(|user| {
        Row::new(vec![
            user.id.to_string(),
            user.first_name.clone(),
            user.last_name.clone(),
            user.email.clone(),
            user.department.clone(),
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Min(24),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Users "))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    let mut state = TableState::default();
    state.select(if app.visible().is_empty() {
        None
    } else {
        Some(app.selected)
    });

    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_pagination(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.pager.page_count(app.roster.len());
    let mut spans = Vec::with_capacity(count);

    for page in 1..=count {
        if page == app.pager.page() {
            spans.push(Span::styled(
                format!(" [{page}] "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {page}  "),
                Style::default().fg(Color::Gray),
            ));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut status = format!("{} users", app.roster.len());
    let count = app.pager.page_count(app.roster.len());
    if count > 0 {
        status.push_str(&format!(" · page {} of {}", app.pager.page(), count));
    }
    if let Some(synced) = app.synced_at {
        status.push_str(&format!(" · synced {}", synced.format("%H:%M:%S")));
    }

    let line = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}

fn draw_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.form.is_some() {
        "type to edit  ·  Tab next field  ·  Enter save  ·  Esc cancel"
    } else {
        "a add  ·  e edit  ·  d delete  ·  ↑/↓ select  ·  ←/→ page  ·  1-9 jump  ·  q quit"
    };

    let line = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
    frame.render_widget(line, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &Form) {
    let [popup] = Layout::vertical([Constraint::Length(8)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(48)])
        .flex(Flex::Center)
        .areas(popup);

    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .title(format!(" {} ", form.title()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::vertical(vec![Constraint::Length(1); 6]).split(inner);

    for (i, field) in Field::ALL.iter().enumerate() {
        let focused = *field == form.focus;
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![
            Span::styled(format!("{:<12}", field.label()), label_style),
            Span::raw(form.draft.field(*field).to_string()),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), rows[i]);
    }

    let hint = Paragraph::new("Enter save  ·  Esc cancel")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
    frame.render_widget(hint, rows[5]);
}
