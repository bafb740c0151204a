//! Terminal rendering for monthly reports

use chrono::{Datelike, NaiveDate};

use crate::engine::{MonthReport, WindowOutcome, WindowSection};
use crate::models::ExpenseKind;

use super::{format_currency, month_name};

/// Format a monthly report for terminal display
pub fn format_report(report: &MonthReport) -> String {
    let mut output = String::new();

    let title = format!("{} {}", month_name(report.month), report.year);
    output.push_str(&title);
    output.push('\n');
    output.push_str(&"=".repeat(title.len()));
    output.push('\n');

    if report.is_empty {
        output.push_str("No expenses recorded for this month\n");
        return output;
    }

    if let Some(card) = &report.card {
        output.push_str("\nCard Budget Summary\n");
        output.push_str(&format!("  Budget     {}\n", format_currency(card.budget)));
        output.push_str(&format!("  Spent      {}\n", format_currency(card.spent)));
        if card.remaining < 0.0 {
            output.push_str(&format!(
                "  Overflowed {}\n",
                format_currency(-card.remaining)
            ));
        } else {
            output.push_str(&format!(
                "  Remaining  {}\n",
                format_currency(card.remaining)
            ));
        }
    }

    for section in &report.windows {
        format_window_section(&mut output, section);
    }

    output
}

fn format_window_section(output: &mut String, section: &WindowSection) {
    output.push_str(&format!("\n{}\n", section.window));
    output.push_str(&format!("  Budget     {}\n", format_currency(section.budget)));
    output.push_str(&format!("  Spent      {}\n", format_currency(section.spent)));
    match section.outcome {
        WindowOutcome::Saved(saved) => {
            output.push_str(&format!("  Saved      {}\n", format_currency(saved)));
        }
        WindowOutcome::Overflow(over) => {
            output.push_str(&format!("  Overflowed {}\n", format_currency(over)));
        }
    }

    for day in &section.days {
        output.push_str(&format!("  {}\n", day_badge(day.date)));
        for line in &day.expenses {
            let tag = match line.kind {
                ExpenseKind::Account => "account",
                ExpenseKind::Card => "card",
            };
            output.push_str(&format!(
                "    {:<28} {:>10}  ({})\n",
                line.description,
                format_currency(line.amount),
                tag
            ));
        }
    }
}

/// Short weekday badge like "Mon, 2"
fn day_badge(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%a"), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::build_report;
    use crate::models::{Expense, Settings};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report_for(expenses: &[Expense], today: NaiveDate) -> MonthReport {
        build_report(2025, 6, &Settings::default(), expenses, today).unwrap()
    }

    #[test]
    fn test_empty_report_rendering() {
        let report = report_for(&[], date(2025, 7, 1));
        let text = format_report(&report);
        assert!(text.contains("June 2025"));
        assert!(text.contains("No expenses recorded for this month"));
        assert!(!text.contains("Card Budget Summary"));
    }

    #[test]
    fn test_report_rendering_with_expenses() {
        let expenses = vec![
            Expense::new(date(2025, 6, 2), 500.0, "Groceries", ExpenseKind::Account).unwrap(),
            Expense::new(date(2025, 6, 2), 150.0, "Online order", ExpenseKind::Card).unwrap(),
            Expense::new(date(2025, 6, 9), 2000.0, "Repairs", ExpenseKind::Account).unwrap(),
        ];
        let text = format_report(&report_for(&expenses, date(2025, 7, 1)));

        assert!(text.contains("Card Budget Summary"));
        assert!(text.contains("Day 1-5"));
        assert!(text.contains("Day 6-10"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("(card)"));
        // Window 6-10 spent 2000 against ~1667: shows an overflow line.
        assert!(text.contains("Overflowed"));
        // June 2, 2025 is a Monday.
        assert!(text.contains("Mon, 2"));
    }
}
