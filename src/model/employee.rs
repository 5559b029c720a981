//! Employee records and the category-progression rule.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Category, Department};

/// Months of contract time required before a category change.
pub const ELIGIBILITY_MONTHS: i32 = 23;

/// A single roster record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub surname: String,
    pub department: Department,
    pub category: Category,

    /// Start of the current category period.
    /// Reset to "today" on every successful advancement.
    pub contract_start: Date,

    /// Original hire date. Never touched by advancement.
    pub seniority: Date,
}

/// Whole-month difference by calendar year/month arithmetic.
///
/// Day-of-month is ignored on purpose: a contract started on the 30th is
/// already one month in on the 1st of the following month. This coarse
/// count is the semantic that gates advancement.
pub fn months_since(start: Date, today: Date) -> i32 {
    (i32::from(today.year()) - i32::from(start.year())) * 12
        + (i32::from(today.month()) - i32::from(start.month()))
}

impl Employee {
    /// Whether the current contract period has reached the eligibility
    /// window. Pure check, no side effects.
    pub fn eligible_for_change(&self, today: Date) -> bool {
        months_since(self.contract_start, today) >= ELIGIBILITY_MONTHS
    }

    /// Advance to the next category and restart the contract clock.
    ///
    /// Deliberately does not check eligibility — callers gate on
    /// [`Self::eligible_for_change`] first. Returns `false` from the
    /// terminal category, leaving the record untouched.
    pub fn advance_category(&mut self, today: Date) -> bool {
        match self.category.successor() {
            Some(next) => {
                self.category = next;
                self.contract_start = today;
                true
            }
            None => false,
        }
    }
}
