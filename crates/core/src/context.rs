// Per-call context shared by all advisors

use chrono::{Datelike, Local, NaiveDate};

/// Inputs to generation that do not come from the caller.
///
/// Generation is a pure function of the tool arguments and this context,
/// so two calls with equal arguments and equal context produce equal
/// bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceContext {
    today: NaiveDate,
}

impl AdviceContext {
    /// Context for the current local date
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Context pinned to a specific date
    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Date shown in every bundle header, e.g. "March 04, 2026"
    pub fn analysis_date(&self) -> String {
        self.today.format("%B %d, %Y").to_string()
    }

    /// Year used in "trends for ..." headings
    pub fn year(&self) -> i32 {
        self.today.year()
    }
}

impl Default for AdviceContext {
    fn default() -> Self {
        Self::now()
    }
}
