//! Terminal rendering for the status dashboard

use chrono::{Datelike, NaiveDate};

use crate::engine::{DailyFigures, DayStatus, PeriodFigures, WindowFigures};

use super::{format_currency, month_name};

const PROGRESS_BAR_WIDTH: usize = 20;

/// Format the status dashboard: current window, month totals, card budget
/// and today's limit
pub fn format_status(
    today: NaiveDate,
    window: &WindowFigures,
    account: &PeriodFigures,
    card: &PeriodFigures,
    daily: &DailyFigures,
) -> String {
    let mut output = String::new();

    let title = format!(
        "{} {} — {}",
        month_name(today.month()),
        today.year(),
        today.format("%a, %-d %b")
    );
    output.push_str(&title);
    output.push('\n');
    output.push_str(&"=".repeat(title.chars().count()));
    output.push('\n');

    output.push_str(&format!("\nCurrent Window ({})\n", window.window));
    format_figures(&mut output, &window.figures);

    output.push_str("\nAccount (month)\n");
    format_figures(&mut output, account);

    output.push_str("\nCard (month)\n");
    format_figures(&mut output, card);

    output.push_str("\nToday\n");
    output.push_str(&format!("  Limit      {}\n", format_currency(daily.limit)));
    output.push_str(&format!("  Spent      {}\n", format_currency(daily.spent)));
    output.push_str(&format!(
        "  {} {:.0}% {}\n",
        progress_bar(daily.progress_percent()),
        daily.percent_used,
        status_label(daily.status)
    ));

    output
}

fn format_figures(output: &mut String, figures: &PeriodFigures) {
    output.push_str(&format!("  Budget     {}\n", format_currency(figures.budget)));
    output.push_str(&format!("  Spent      {}\n", format_currency(figures.spent)));
    if figures.is_overflow() {
        output.push_str(&format!(
            "  Overflowed {}\n",
            format_currency(-figures.remaining)
        ));
    } else {
        output.push_str(&format!(
            "  Remaining  {}\n",
            format_currency(figures.remaining)
        ));
    }
}

/// Text progress bar over a clamped percentage
fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn status_label(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Ok => "ok",
        DayStatus::Warning => "warning",
        DayStatus::Over => "over limit",
    }
}
