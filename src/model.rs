//! Core data model for escalafon: roster records, their departments,
//! and the ordered category ladder they climb.

mod category;
mod department;
mod employee;

pub use category::Category;
pub use department::Department;
pub use employee::{ELIGIBILITY_MONTHS, Employee, months_since};
