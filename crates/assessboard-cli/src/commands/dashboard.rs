use assessboard_core::{AssessmentSummary, ReopenPolicy};

pub fn run(summary: AssessmentSummary, average: u32, keep_errors: bool) {
    let policy = if keep_errors {
        ReopenPolicy::Keep
    } else {
        ReopenPolicy::Reset
    };
    let mut app = crate::tui::app::App::new(summary, average, policy);
    if let Err(e) = app.run() {
        eprintln!("TUI error: {e}");
        std::process::exit(1);
    }
}
