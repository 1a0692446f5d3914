use assessboard_core::{AssessmentSummary, DashboardView};

pub fn run(summary: &AssessmentSummary, average: u32, json: bool) {
    let view = DashboardView::build(summary, average);

    if json {
        match serde_json::to_string_pretty(&view) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize dashboard: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_text(&view));
}

/// Plain-text rendering of the dashboard, one section per panel.
pub fn render_text(view: &DashboardView) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let _ = writeln!(out, "{}", view.info.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out);

    for card in &view.stats {
        let _ = writeln!(out, "  {:<16} {}", card.label, card.value);
    }

    let _ = writeln!(out, "\nComparison Graph");
    let _ = writeln!(out, "  {}", view.comparison.caption);
    if let Some(user) = view.comparison.user_point() {
        let _ = writeln!(
            out,
            "  your point: percentile {}  count {}",
            user.percentile,
            user.tooltip()
        );
    }

    let _ = writeln!(out, "\nSyllabus Wise Analysis");
    for topic in view.syllabus {
        let filled = usize::from(topic.progress) / 5;
        let _ = writeln!(
            out,
            "  {:<30} {:>3}%  {}{}",
            topic.topic,
            topic.progress,
            "█".repeat(filled),
            "░".repeat(20 - filled.min(20))
        );
    }

    let _ = writeln!(out, "\nQuestion Analysis");
    let _ = writeln!(
        out,
        "  {}  ({:.0}%, {}, {})",
        view.gauge.label, view.gauge.percentage, view.gauge.tier, view.gauge.color
    );
    let _ = writeln!(out, "  {}", view.gauge.analysis);
    out
}
