use ratatui::prelude::*;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, Wrap};
use crate::scoring::{Score, ScoreKey};
use crate::tui::app::{App, InputMode};

const TITLE: &str = "Skill Progress Tracker";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 8 || area.width < 40 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Fill(1),    // Form + results
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    // Narrow terminals stack the results panel under the form
    let body = if chunks[1].width >= 100 {
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(2)]).split(chunks[1])
    } else {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(results_height(app))])
            .split(chunks[1])
    };

    render_title(frame, chunks[0], app);
    render_table(frame, body[0], app);
    render_results(frame, body[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, app);
    }
}

fn results_height(app: &App) -> u16 {
    // Border(2) + summary(3) + one line per domain, or a short hint
    match app.calculator.result() {
        Some(result) => {
            let height = 2 + 3 + result.domain_results.len() as u16 + 1;
            // Blank line + recalculate hint
            if app.calculator.is_stale() {
                height + 2
            } else {
                height
            }
        }
        None => 3,
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(TITLE, Style::default().fg(app.theme.title_color).bold())];

    // Entry progress on the right
    let progress = format!(
        "{}/{} scored",
        app.calculator.scored_count(),
        app.calculator.item_count()
    );
    let padding_len = (area.width as usize).saturating_sub(TITLE.len() + progress.len());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(progress, Style::default().fg(app.theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App) {
    let theme = &app.theme;
    let catalog = app.calculator.catalog();

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .map(|(idx, key)| {
            let domain = catalog.get(key.domain);
            let domain_name = domain_label(app, *key);
            let item = domain
                .and_then(|d| d.items.get(key.item))
                .cloned()
                .unwrap_or_default();

            let score_line = match app.calculator.score(*key) {
                Some(score) => score_cell(score, theme),
                None => Line::from(Span::styled("—", Style::default().fg(theme.unscored))),
            };

            // Alternate background per domain so groups stand out
            let row_style = if key.domain.0 % 2 == 1 {
                Style::default().bg(theme.row_alt_bg)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(format!("{}.", idx + 1)).style(Style::default().fg(theme.index_color)),
                Cell::from(domain_name).style(Style::default().fg(theme.domain_color).bold()),
                Cell::from(item),
                Cell::from(score_line),
            ])
            .style(row_style)
        })
        .collect();

    let domain_width = catalog
        .domains()
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(6)
        .max(6) as u16;

    let widths = [
        Constraint::Length(4),              // Index: "15."
        Constraint::Length(domain_width),   // Domain
        Constraint::Fill(1),                // Item
        Constraint::Length(7),              // Score: "3 ███░"
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["#", "Domain", "Item", "Score"])
                .style(theme.header_style)
                .bottom_margin(1),
        )
        .row_highlight_style(theme.row_selected);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Domain column text: the name on a domain's first item, its last
/// calculated percent on the second
fn domain_label(app: &App, key: ScoreKey) -> String {
    let Some(domain) = app.calculator.catalog().get(key.domain) else {
        return String::new();
    };
    match key.item {
        0 => domain.name.clone(),
        1 => app
            .calculator
            .result()
            .and_then(|result| result.domain(&domain.name))
            .map(|d| format!("  {}%", d.percent))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn score_cell(score: Score, theme: &crate::tui::theme::ThemeColors) -> Line<'static> {
    let percent = score.value() as u32 * 100 / Score::MAX.value() as u32;
    let color = theme.percent_color(percent);
    let mut spans = vec![Span::styled(
        format!("{} ", score.value()),
        Style::default().fg(color).bold(),
    )];
    spans.extend(score_bar(percent, Score::MAX.value() as usize, theme).spans);
    Line::from(spans)
}

fn score_bar(percent: u32, width: usize, theme: &crate::tui::theme::ThemeColors) -> Line<'static> {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    let empty = width.saturating_sub(filled);
    let bar_color = theme.percent_color(percent);

    let mut spans = Vec::new();
    if filled > 0 {
        spans.push(Span::styled("█".repeat(filled), Style::default().fg(bar_color)));
    }
    if empty > 0 {
        spans.push(Span::styled("░".repeat(empty), Style::default().fg(theme.bar_empty)));
    }

    Line::from(spans)
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stale = app.calculator.is_stale();

    let title = if stale {
        Span::styled(
            " Assessment Summary (outdated) ",
            Style::default().fg(theme.stale_color).bold(),
        )
    } else {
        Span::styled(" Assessment Summary ", theme.popup_title)
    };
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(theme.popup_border));

    let Some(result) = app.calculator.result() else {
        let hint = Paragraph::new("Press c to calculate results")
            .style(Style::default().fg(theme.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let overall = result.overall_percent();
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Total Score: "),
            Span::styled(
                format!("{} / {}", result.total_score, result.max_score),
                Style::default().bold(),
            ),
        ]),
        Line::from(vec![
            Span::raw("Progress: "),
            Span::styled(
                format!("{}%", overall),
                Style::default().fg(theme.percent_color(overall)).bold(),
            ),
        ]),
        Line::from(""),
    ];

    let name_width = result
        .domain_results
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(0);
    // Border(2) + name + separators + "12 pts (100%)"
    let bar_width = (area.width as usize).saturating_sub(name_width + 2 + 18).min(20);

    for domain in &result.domain_results {
        let mut spans = vec![
            Span::styled(
                format!("{:<width$}", domain.name, width = name_width),
                Style::default().bold(),
            ),
            Span::raw(format!(" {:>2} pts ({:>3}%) ", domain.score, domain.percent)),
        ];
        if bar_width >= 4 {
            spans.extend(score_bar(domain.percent, bar_width, theme).spans);
        }
        lines.push(Line::from(spans));
    }

    if stale {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Scores changed; press c to recalculate",
            Style::default().fg(theme.stale_color),
        )));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(panel, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let text = if let Some((ref msg, _)) = app.flash_message {
        let msg_color = if msg.starts_with("Error") {
            theme.flash_error
        } else {
            theme.flash_success
        };
        Line::from(Span::styled(msg.clone(), Style::default().fg(msg_color)))
    } else {
        let hints = [
            ("j/k", ":nav "),
            ("0-4", ":score "),
            ("h/l", ":adjust "),
            ("Del", ":clear "),
            ("c", ":calculate "),
            ("R", ":reset "),
            ("?", ":help "),
            ("q", ":quit"),
        ];

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the help overlay popup
fn render_help_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(50, 15, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" Keyboard Shortcuts ", app.theme.popup_title))
        .border_style(Style::default().fg(app.theme.popup_border));
    frame.render_widget(block.clone(), popup_area);

    let inner = block.inner(popup_area);

    let key_style = Style::default().fg(app.theme.status_key_color).bold();
    let score_keys = Score::all()
        .map(|s| s.value().to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let entries = [
        ("j / Down", "Next item"),
        ("k / Up", "Previous item"),
        ("Tab", "Jump to next domain"),
        (score_keys.as_str(), "Score selected item"),
        ("l / Right", "Raise score"),
        ("h / Left", "Lower score"),
        ("Del / Bksp / -", "Clear score"),
        ("c / Enter", "Calculate results"),
        ("R", "Reset all scores"),
        ("?", "Show/hide this help"),
        ("q / Ctrl-c", "Quit"),
    ];

    let mut help_lines: Vec<Line> = entries
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", keys), key_style),
                Span::raw(format!("  {}", action)),
            ])
        })
        .collect();
    help_lines.push(Line::from(""));
    help_lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(app.theme.muted),
    )));

    frame.render_widget(Paragraph::new(help_lines), inner);
}
