//! The roster: the in-memory record collection and its orchestration
//! against the storage collaborator.
//!
//! A [`Roster`] is an explicitly constructed service over a store. It
//! holds the full ordered collection (insertion order is display order,
//! duplicates allowed), synchronizes wholesale with the single stored
//! payload, and runs the check/apply progression cycle per record.

use jiff::civil::Date;

use crate::model::{Category, Department, Employee};
use crate::storage::{EmployeeStore, StorageError};

/// Storage key holding the serialized collection.
const ROSTER_KEY: &str = "trabajadores";

/// Errors that can occur while loading or persisting the roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("stored roster is not valid: {0}")]
    InvalidData(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, RosterError>;

/// Outcome of a per-record progression check.
///
/// These are expected business outcomes, not errors; each maps to one
/// user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The record advanced to this category and the change was persisted.
    Advanced(Category),

    /// The contract period has not reached the eligibility window yet.
    NotYetEligible,

    /// The record is already at the top category; nothing to advance to.
    AtTopCategory,

    /// No record exists at the given position.
    NotFound,
}

/// Per-field update for an existing record. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub department: Option<Department>,
    pub category: Option<Category>,
    pub contract_start: Option<Date>,
    pub seniority: Option<Date>,
}

/// The record collection manager.
#[derive(Debug)]
pub struct Roster<S: EmployeeStore> {
    store: S,
    employees: Vec<Employee>,
}

impl<S: EmployeeStore> Roster<S> {
    /// Creates a roster over `store` and loads the stored collection.
    pub fn load(store: S) -> Result<Self> {
        let mut roster = Self {
            store,
            employees: Vec::new(),
        };
        roster.reload()?;
        Ok(roster)
    }

    /// Re-reads the stored collection, replacing the in-memory one
    /// wholesale.
    ///
    /// An untouched store counts as a first run: the payload is
    /// initialized to an empty array before loading.
    pub fn reload(&mut self) -> Result<()> {
        let payload = match self.store.get(ROSTER_KEY)? {
            Some(payload) => payload,
            None => {
                self.store.set(ROSTER_KEY, "[]")?;
                "[]".to_string()
            }
        };
        self.employees = serde_json::from_str(&payload)?;
        Ok(())
    }

    /// The current collection, in display order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Appends a record and persists the whole collection.
    pub fn add(&mut self, employee: Employee) -> Result<()> {
        self.employees.push(employee);
        self.persist()
    }

    /// Runs the check/apply progression cycle on the record at `index`.
    ///
    /// Eligibility is re-evaluated from scratch on every call; only a
    /// successful advancement mutates the record and persists.
    pub fn check_and_advance(&mut self, index: usize, today: Date) -> Result<AdvanceOutcome> {
        let Some(employee) = self.employees.get_mut(index) else {
            return Ok(AdvanceOutcome::NotFound);
        };

        if !employee.eligible_for_change(today) {
            return Ok(AdvanceOutcome::NotYetEligible);
        }

        if employee.advance_category(today) {
            let category = employee.category;
            self.persist()?;
            Ok(AdvanceOutcome::Advanced(category))
        } else {
            Ok(AdvanceOutcome::AtTopCategory)
        }
    }

    /// Applies `update` to the record at `index` and persists.
    ///
    /// Returns `false` when no record exists at `index`.
    pub fn edit(&mut self, index: usize, update: EmployeeUpdate) -> Result<bool> {
        let Some(employee) = self.employees.get_mut(index) else {
            return Ok(false);
        };

        if let Some(name) = update.name {
            employee.name = name;
        }
        if let Some(surname) = update.surname {
            employee.surname = surname;
        }
        if let Some(department) = update.department {
            employee.department = department;
        }
        if let Some(category) = update.category {
            employee.category = category;
        }
        if let Some(contract_start) = update.contract_start {
            employee.contract_start = contract_start;
        }
        if let Some(seniority) = update.seniority {
            employee.seniority = seniority;
        }

        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.employees)?;
        self.store.set(ROSTER_KEY, &payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    use crate::storage::MemoryStore;

    fn sample(category: Category, contract_start: Date) -> Employee {
        Employee {
            name: "Ana".into(),
            surname: "Ruiz".into(),
            department: Department::Calidad,
            category,
            contract_start,
            seniority: date(2020, 5, 1),
        }
    }

    #[test]
    fn first_load_initializes_empty_payload() {
        let store = MemoryStore::default();

        let roster = Roster::load(store).unwrap();

        assert!(roster.employees().is_empty());
        assert_eq!(
            roster.store.get("trabajadores").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn add_persists_and_reloads() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();

        roster.add(sample(Category::A, date(2024, 1, 10))).unwrap();
        roster.add(sample(Category::B, date(2023, 6, 1))).unwrap();
        roster.reload().unwrap();

        assert_eq!(roster.employees().len(), 2);
        assert_eq!(roster.employees()[0].category, Category::A);
        assert_eq!(roster.employees()[1].category, Category::B);
    }

    #[test]
    fn duplicates_are_allowed_and_order_is_preserved() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        let employee = sample(Category::A, date(2024, 1, 10));

        roster.add(employee.clone()).unwrap();
        roster.add(employee.clone()).unwrap();

        assert_eq!(roster.employees(), &[employee.clone(), employee]);
    }

    #[test]
    fn corrupt_payload_is_a_reported_error() {
        let store = MemoryStore::default();
        store.set("trabajadores", "not json").unwrap();

        let err = Roster::load(store).unwrap_err();

        assert!(matches!(err, RosterError::InvalidData(_)));
    }

    #[test]
    fn check_before_the_window_does_not_mutate() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::A, date(2024, 1, 10))).unwrap();

        // 22 whole months in: one short of the window.
        let outcome = roster.check_and_advance(0, date(2025, 11, 28)).unwrap();

        assert_eq!(outcome, AdvanceOutcome::NotYetEligible);
        assert_eq!(roster.employees()[0].category, Category::A);
        assert_eq!(roster.employees()[0].contract_start, date(2024, 1, 10));
    }

    #[test]
    fn check_after_the_window_advances_and_resets_the_clock() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::A, date(2024, 1, 10))).unwrap();
        let today = date(2026, 1, 10); // 24 months in

        let outcome = roster.check_and_advance(0, today).unwrap();

        assert_eq!(outcome, AdvanceOutcome::Advanced(Category::B));
        assert_eq!(roster.employees()[0].category, Category::B);
        assert_eq!(roster.employees()[0].contract_start, today);
    }

    #[test]
    fn advancement_is_persisted() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::A, date(2024, 1, 10))).unwrap();

        roster.check_and_advance(0, date(2026, 1, 10)).unwrap();
        roster.reload().unwrap();

        assert_eq!(roster.employees()[0].category, Category::B);
        assert_eq!(roster.employees()[0].contract_start, date(2026, 1, 10));
    }

    #[test]
    fn eligible_top_category_reports_no_further_advancement() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::C, date(2024, 1, 10))).unwrap();

        let outcome = roster.check_and_advance(0, date(2026, 1, 10)).unwrap();

        assert_eq!(outcome, AdvanceOutcome::AtTopCategory);
        assert_eq!(roster.employees()[0].contract_start, date(2024, 1, 10));
    }

    #[test]
    fn second_check_right_after_reaching_top_reports_top_category() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::B, date(2024, 1, 10))).unwrap();

        // Reach C, then 23+ months later keep checking: always the same
        // terminal outcome, never a mutation.
        let first = roster.check_and_advance(0, date(2026, 1, 10)).unwrap();
        let second = roster.check_and_advance(0, date(2028, 1, 10)).unwrap();
        let third = roster.check_and_advance(0, date(2028, 1, 10)).unwrap();

        assert_eq!(first, AdvanceOutcome::Advanced(Category::C));
        assert_eq!(second, AdvanceOutcome::AtTopCategory);
        assert_eq!(third, AdvanceOutcome::AtTopCategory);
    }

    #[test]
    fn out_of_range_index_reports_not_found() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();

        let outcome = roster.check_and_advance(3, date(2026, 1, 10)).unwrap();

        assert_eq!(outcome, AdvanceOutcome::NotFound);
    }

    #[test]
    fn edit_applies_only_given_fields_and_persists() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();
        roster.add(sample(Category::A, date(2024, 1, 10))).unwrap();

        let edited = roster
            .edit(
                0,
                EmployeeUpdate {
                    surname: Some("Ruiz Soler".into()),
                    department: Some(Department::Envasado),
                    ..EmployeeUpdate::default()
                },
            )
            .unwrap();
        roster.reload().unwrap();

        assert!(edited);
        let employee = &roster.employees()[0];
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.surname, "Ruiz Soler");
        assert_eq!(employee.department, Department::Envasado);
        assert_eq!(employee.category, Category::A);
    }

    #[test]
    fn edit_out_of_range_reports_not_found() {
        let mut roster = Roster::load(MemoryStore::default()).unwrap();

        assert!(!roster.edit(0, EmployeeUpdate::default()).unwrap());
    }
}
