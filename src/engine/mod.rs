//! Budget window accounting engine
//!
//! Pure computation over settings, expenses and an explicit "now": month
//! partitioning into budget windows, budget allocation, expense aggregation,
//! period evaluation and report building. No I/O, no shared state, no clock
//! reads; every operation is a deterministic function of its inputs.

pub mod aggregate;
pub mod allocator;
pub mod calendar;
pub mod evaluator;
pub mod partition;
pub mod report;

pub use aggregate::{expenses_for_date, expenses_for_month, expenses_for_window, total};
pub use allocator::{daily_budget, window_budget};
pub use calendar::days_in_month;
pub use evaluator::{
    current_window_figures, daily_figures, month_account_figures, month_card_figures,
    window_state, DailyFigures, DayStatus, PeriodFigures, WindowFigures, WindowState,
    WARNING_THRESHOLD_PERCENT,
};
pub use partition::{compute_windows, current_window};
pub use report::{
    build_report, CardSummary, DayEntry, ExpenseLine, MonthReport, WindowOutcome, WindowSection,
};
