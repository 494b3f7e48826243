use super::{App, Field, Tab, HEADERS};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 40;
const DIALOG_HEIGHT: u16 = 5;

/// Draws the whole screen: tab bar, the selected tab, a key hint line and, on top, the error
/// dialog if one is open.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [tabs_area, body, hints] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .block(Block::default().borders(Borders::ALL).title("Personal Finance Manager"))
        .select(app.tab().index())
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, tabs_area);

    match app.tab() {
        Tab::Listing => draw_listing(frame, app, body),
        Tab::Entry => draw_entry(frame, app, body),
    }

    let hint = match app.tab() {
        Tab::Listing => "F2 add | ↑/↓ select | d delete | q quit",
        Tab::Entry => "F1 view | Tab/↑/↓ move | Enter submit | Ctrl+C quit",
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        hints,
    );

    if let Some(dialog) = app.dialog() {
        let area = centered(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
        let popup = Paragraph::new(vec![
            Line::from(dialog.message()),
            Line::from(""),
            Line::from("Press Enter to dismiss").style(Style::default().fg(Color::DarkGray)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title())
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(popup, area);
    }
}

fn draw_listing(frame: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h)))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .listing()
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![Cell::from((i + 1).to_string())];
            cells.extend(row.cells().iter().cloned().map(Cell::from));
            Row::new(cells)
        })
        .collect();
    let widths = [
        Constraint::Length(4),
        Constraint::Length(11),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(table, area, app.listing_mut().state_mut());
}

fn draw_entry(frame: &mut Frame, app: &App, area: Rect) {
    let mut constraints = vec![Constraint::Length(3); Field::ALL.len()];
    constraints.push(Constraint::Min(0));
    let areas = Layout::vertical(constraints).split(area);

    let form = app.form();
    for (field, field_area) in Field::ALL.iter().zip(areas.iter()) {
        let style = if *field == form.focus() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(form.value(*field)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(style),
        );
        frame.render_widget(input, *field_area);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
