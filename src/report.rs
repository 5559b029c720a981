//! The fixed-format text report.
//!
//! The block layout is a compatibility contract with the report the
//! section has always distributed: Spanish labels, `DD/MM/YYYY` dates,
//! the union trailer, and a `---` line closing each record. Byte-for-byte
//! stability matters more than prettiness here.

use std::fmt::Write as _;

use jiff::civil::Date;

use crate::model::Employee;

/// Constant trailer naming the union section.
const UNION_SECTION: &str = "CC.OO DAMM (El Puig)";

/// Renders the full report: one block per record, in collection order.
///
/// An empty roster renders an empty string. Pure function of the
/// collection.
pub fn render(employees: &[Employee]) -> String {
    let mut out = String::new();
    for employee in employees {
        let _ = write!(
            out,
            "Nombre: {}\n\
             Apellidos: {}\n\
             Departamento: {}\n\
             Categoría: {}\n\
             Fecha Inicio Contrato: {}\n\
             Fecha Antigüedad: {}\n\
             Sección Sindical: {UNION_SECTION}\n\
             ---\n",
            employee.name,
            employee.surname,
            employee.department,
            employee.category,
            display_date(employee.contract_start),
            display_date(employee.seniority),
        );
    }
    out
}

/// The date-stamped default file name for an exported report.
pub fn file_name(today: Date) -> String {
    format!(
        "Trabajadores_CCOO_DAMM_{:02}-{:02}-{:04}.txt",
        today.day(),
        today.month(),
        today.year()
    )
}

/// `DD/MM/YYYY`, the display form used in the report and the table.
pub fn display_date(date: Date) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}
