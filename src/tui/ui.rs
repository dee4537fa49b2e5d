use crate::tui::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Items and history
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_header(frame, chunks[0]);
    draw_items(frame, panes[0], app);
    draw_history(frame, panes[1], app);
    draw_footer(frame, chunks[2], app);

    if app.mode == Mode::Help {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Command Pattern - every change can be undone")
        .block(Block::default().borders(Borders::ALL).title("cmdlist"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_items(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Items");
    let items = app.session.items().items();

    if items.is_empty() {
        let empty = Paragraph::new("No items")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let line = Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(item.clone(), Style::default().fg(Color::White)),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(rows).block(block).highlight_style(
        Style::default()
            .bg(Color::Yellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Command History");
    let rows: Vec<ListItem> = if app.session.invoker().is_empty() {
        vec![ListItem::new(Span::styled(
            "No commands executed yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let history = app.session.history();
        let last = history.len() - 1;
        history
            .into_iter()
            .enumerate()
            .map(|(i, description)| {
                // The newest entry is the one 'u' will undo
                let style = if i == last {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Span::styled(format!("{}. {}", i + 1, description), style))
            })
            .collect()
    };

    frame.render_widget(List::new(rows).block(block), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let (footer_text, style) = match app.mode {
        Mode::Input => {
            let (before_cursor, after_cursor) = app.input.split_at_cursor();
            (
                format!("New item: {}█{}   (Enter: add | Esc: cancel)", before_cursor, after_cursor),
                Style::default().fg(Color::White).bg(Color::Blue),
            )
        }
        _ => match &app.status_message {
            Some(message) => (message.clone(), Style::default().fg(Color::Magenta)),
            None => (
                format!(
                    "Items: {} | History: {} | a: add | d: remove | C: clear | u: undo | ?: help | q: quit",
                    app.item_count(),
                    app.history_count()
                ),
                Style::default().fg(Color::Yellow),
            ),
        },
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "cmdlist - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Move the cursor",
        "",
        "COMMANDS:",
        "  a                 Add a new item at the end",
        "  d / Delete        Remove the item under the cursor",
        "  Shift+C           Clear all items",
        "  u                 Undo the most recent command",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
        "",
        "Undone commands are discarded; there is no redo.",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(70, 60, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
