//! TUI rendering.
//!
//! ┌────────────────────────────────────────────────────────────┐
//! │  Hyper Text Markup Language                                │
//! │  Questions: 08 | Duration: 15 mins | Submitted on ...      │
//! ├───────────────────┬───────────────────┬────────────────────┤
//! │  1  YOUR RANK     │  30%  PERCENTILE  │  10/15  CORRECT    │
//! ├───────────────────┴─────────┬─────────┴────────────────────┤
//! │  Comparison Graph           │  Syllabus Wise Analysis      │
//! │  You scored 30% ...         │  HTML Tools ...   80% ████░  │
//! │      ⢀⡴⠋⠉⠳⣄                  ├──────────────────────────────┤
//! │   ⣀⡴⠋     ⠙⠦⣀               │  Question Analysis           │
//! │                             │  ██████████░░░░  10/15       │
//! ├─────────────────────────────┴──────────────────────────────┤
//! │  u: update scores   q: quit                                │
//! └────────────────────────────────────────────────────────────┘

use super::app::App;
use assessboard_core::series::ticks;
use assessboard_core::{DashboardView, Field};
use ratatui::{prelude::*, widgets::*};

/// Line colour of the comparison curve.
const CURVE_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

pub fn draw(f: &mut Frame, app: &App) {
    let view = app.view();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(4), // stats
            Constraint::Min(12),   // main
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_header(f, rows[0], &view);
    draw_stats(f, rows[1], &view);
    draw_main(f, rows[2], &view);
    draw_keys(f, rows[3], app);

    if app.form().is_open() {
        draw_dialog(f, app);
    }
}

fn draw_header(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(" assessboard ", Style::default().bold().fg(Color::Cyan)));

    let lines = vec![
        Line::from(Span::styled(view.info.title, Style::default().bold())),
        Line::from(Span::styled(
            view.subtitle.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_stats(f: &mut Frame, area: Rect, view: &DashboardView) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let accents = [Color::Yellow, Color::Blue, Color::Green];
    for ((card, accent), col) in view.stats.iter().zip(accents).zip(cols.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.as_str(),
                Style::default().bold().fg(accent),
            )),
            Line::from(Span::styled(card.label, Style::default().fg(Color::DarkGray))),
        ];
        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, *col);
    }
}

fn draw_main(f: &mut Frame, area: Rect, view: &DashboardView) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_comparison(f, cols[0], view);

    let syllabus_height = 2 + 2 * view.syllabus.len() as u16;
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(syllabus_height), Constraint::Min(8)])
        .split(cols[1]);

    draw_syllabus(f, right[0], view);
    draw_question_analysis(f, right[1], view);
}

fn draw_comparison(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Comparison Graph ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(inner);

    let comparison = &view.comparison;
    let caption = Paragraph::new(comparison.caption.as_str())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(caption, parts[0]);

    let curve: Vec<(f64, f64)> = comparison
        .points
        .iter()
        .map(|p| (p.percentile as f64, p.count as f64))
        .collect();
    let user: Vec<(f64, f64)> = comparison
        .user_point()
        .map(|p| vec![(p.percentile as f64, p.count as f64)])
        .unwrap_or_default();
    let user_name = comparison
        .user_point()
        .map(|p| p.tooltip())
        .unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name("count")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(CURVE_COLOR))
            .data(&curve),
        Dataset::default()
            .name(user_name)
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red).bold())
            .data(&user),
    ];

    let (x_lo, x_hi) = comparison.x_bounds;
    let (y_lo, y_hi) = comparison.y_bounds;
    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("percentile")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([x_lo, x_hi])
                .labels(axis_labels(x_lo, x_hi)),
        )
        .y_axis(
            Axis::default()
                .title("count")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_lo, y_hi])
                .labels(axis_labels(y_lo, y_hi)),
        );
    f.render_widget(chart, parts[1]);
}

fn axis_labels(lo: f64, hi: f64) -> Vec<Line<'static>> {
    ticks(lo, hi)
        .into_iter()
        .map(|t| Line::from(format!("{t:.0}")))
        .collect()
}

fn draw_syllabus(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Syllabus Wise Analysis ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); view.syllabus.len() * 2])
        .split(inner);

    for (i, topic) in view.syllabus.iter().enumerate() {
        let color = tag_color(topic.color_tag);
        let heading = Line::from(vec![
            Span::styled(topic.topic, Style::default().bold()),
            Span::raw("  "),
            Span::styled(format!("{}%", topic.progress), Style::default().fg(color)),
        ]);
        f.render_widget(Paragraph::new(heading), rows[i * 2]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
            .ratio(topic.ratio())
            .label("");
        f.render_widget(gauge, rows[i * 2 + 1]);
    }
}

fn draw_question_analysis(f: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Question Analysis ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // gauge
            Constraint::Min(2),    // analysis
            Constraint::Length(1), // legend
        ])
        .split(inner);

    let gauge = &view.gauge;
    let (r, g, b) = gauge.tier.rgb();
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Rgb(r, g, b)).bg(Color::Rgb(0xe5, 0xe7, 0xeb)))
        .ratio(gauge.ratio())
        .label(Span::styled(
            gauge.label.as_str(),
            Style::default().bold().fg(Color::Rgb(0x1f, 0x29, 0x37)),
        ));
    f.render_widget(widget, parts[0]);

    let analysis = Paragraph::new(gauge.analysis.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    f.render_widget(analysis, parts[1]);

    let legend = Line::from(vec![
        Span::styled("● ", Style::default().fg(Color::Rgb(0x4a, 0xde, 0x80))),
        Span::raw("Correct    "),
        Span::styled("● ", Style::default().fg(Color::Rgb(0xe5, 0xe7, 0xeb))),
        Span::raw("Remaining"),
    ])
    .centered();
    f.render_widget(Paragraph::new(legend), parts[2]);
}

fn draw_keys(f: &mut Frame, area: Rect, app: &App) {
    let text = if app.form().is_open() {
        " enter: save   tab/↓: next field   shift-tab/↑: previous   esc: cancel"
    } else {
        " u: update scores   q: quit"
    };
    let bar = Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

fn draw_dialog(f: &mut Frame, app: &App) {
    let popup = centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(" Update scores ", Style::default().bold()));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut constraints = Vec::with_capacity(Field::ALL.len() * 3 + 2);
    for _ in Field::ALL {
        constraints.extend([
            Constraint::Length(1), // label
            Constraint::Length(3), // input
            Constraint::Length(1), // error
        ]);
    }
    constraints.extend([Constraint::Length(1), Constraint::Min(0)]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let form = app.form();
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let (label_area, input_area, error_area) = (rows[i * 3], rows[i * 3 + 1], rows[i * 3 + 2]);
        let focused = form.focus() == field;
        let error = form.error(field);

        f.render_widget(
            Paragraph::new(Span::styled(field.label(), Style::default().bold())),
            label_area,
        );

        let border = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let draft = form.draft(field);
        let content = if draft.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(draft)
        };
        let input = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(input, input_area);

        if focused {
            let max_x = input_area.right().saturating_sub(2);
            let x = (input_area.x + 1 + draft.chars().count() as u16).min(max_x);
            f.set_cursor_position((x, input_area.y + 1));
        }

        if let Some(e) = error {
            f.render_widget(
                Paragraph::new(Span::styled(e.to_string(), Style::default().fg(Color::Red))),
                error_area,
            );
        }
    }

    let footer_area = rows[Field::ALL.len() * 3];
    let blocking = app.blocking_errors();
    let footer = if blocking.is_empty() {
        Line::from(Span::styled(
            "[ Save: enter ]",
            Style::default().bold().fg(Color::Cyan),
        ))
    } else {
        let fields: Vec<String> = blocking.iter().map(|e| e.field().to_string()).collect();
        Line::from(Span::styled(
            format!(
                "Fix {} field(s) before saving: {}",
                blocking.len(),
                fields.join(", ")
            ),
            Style::default().fg(Color::Red),
        ))
    };
    f.render_widget(Paragraph::new(footer), footer_area);
}

fn tag_color(tag: &str) -> Color {
    match tag {
        "blue" => Color::Rgb(0x3b, 0x82, 0xf6),
        "orange" => Color::Rgb(0xf9, 0x73, 0x16),
        "red" => Color::Rgb(0xef, 0x44, 0x44),
        "green" => Color::Rgb(0x22, 0xc5, 0x5e),
        _ => Color::Gray,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessboard_core::{AssessmentSummary, DEFAULT_AVERAGE_PERCENTILE, ReopenPolicy};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let (w, h) = (120u16, 40u16);
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(w as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(
            AssessmentSummary::default(),
            DEFAULT_AVERAGE_PERCENTILE,
            ReopenPolicy::Reset,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn dashboard_shows_every_panel() {
        let screen = render(&app());
        for needle in [
            "Hyper Text Markup Language",
            "Questions: 08 | Duration: 15 mins | Submitted on 5 June 2021",
            "YOUR RANK",
            "PERCENTILE",
            "30%",
            "CORRECT ANSWERS",
            "10/15",
            "Comparison Graph",
            "Syllabus Wise Analysis",
            "HTML Tools, Forms, History",
            "Tables & CSS Basics",
            "Question Analysis",
            "Remaining",
            "u: update scores",
        ] {
            assert!(screen.contains(needle), "missing {needle:?}\n{screen}");
        }
        assert!(!screen.contains("Update scores"));
    }

    #[test]
    fn dialog_shows_labels_and_inline_errors() {
        let mut app = app();
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Backspace);
        let screen = render(&app);
        assert!(screen.contains("Update scores"), "{screen}");
        assert!(screen.contains("Update your Rank"));
        assert!(screen.contains("Enter rank (must be greater than 0)"));
        assert!(screen.contains("Rank is required!"));
        assert!(screen.contains("Update your Current Score (out of 15)"));
        assert!(!screen.contains("Please enter a value between 0-15"));
    }

    #[test]
    fn rejected_save_reports_in_dialog_footer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('9'));
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Please enter a value between 0-15"), "{screen}");
        assert!(screen.contains("Fix 1 field(s) before saving: score"));
        // Header still shows the committed score.
        assert!(screen.contains("10/15"));
    }

    #[test]
    fn footer_clears_once_rejected_field_is_fixed() {
        let mut app = app();
        press(&mut app, KeyCode::Char('u'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        assert!(render(&app).contains("Fix 1 field(s) before saving: percentile"));

        press(&mut app, KeyCode::Backspace);
        assert!(!app.form().has_errors());
        let screen = render(&app);
        assert!(!screen.contains("before saving"), "{screen}");
        assert!(screen.contains("[ Save: enter ]"));
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let r = centered_rect(60, 70, area);
        assert!(r.x >= area.x && r.right() <= area.right());
        assert!(r.y >= area.y && r.bottom() <= area.bottom());
        assert_eq!(r.width, 60);
    }

    #[test]
    fn syllabus_tags_have_colors() {
        for topic in assessboard_core::SYLLABUS {
            assert_ne!(tag_color(topic.color_tag), Color::Gray, "{}", topic.topic);
        }
    }
}
