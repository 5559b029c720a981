//! Roster table rendering for CLI display.

use jiff::civil::Date;

use crate::model::Employee;
use crate::report::display_date;

/// Prints the roster, one numbered row per record.
pub(super) fn render(employees: &[Employee], today: Date) {
    if employees.is_empty() {
        println!("No records");
        return;
    }
    for (position, employee) in (1..).zip(employees) {
        println!("{}", format_row(position, employee, today));
    }
}

/// One display row.
///
/// A `*` next to the row number marks a contract period past the
/// eligibility window, the same rows the roster has always highlighted.
pub(super) fn format_row(position: usize, employee: &Employee, today: Date) -> String {
    let marker = if employee.eligible_for_change(today) {
        "*"
    } else {
        " "
    };
    format!(
        "{position:>3}{marker} {} {}  [{}] [cat {}]  inicio {}  antigüedad {}",
        employee.name,
        employee.surname,
        employee.department,
        employee.category,
        display_date(employee.contract_start),
        display_date(employee.seniority),
    )
}
