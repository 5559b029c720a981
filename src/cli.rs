//! CLI interface for escalafon.
//!
//! Non-interactive subcommands: arguments in, a table or a message out.
//! The roster table is re-rendered after every mutating command, so the
//! terminal always shows the state that was just persisted.
//!
//! Rows are addressed by their displayed 1-based number (`list` prints
//! it in the first column).

mod table;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jiff::Zoned;
use jiff::civil::Date;

use crate::model::{Category, Department, Employee};
use crate::report;
use crate::roster::{AdvanceOutcome, EmployeeUpdate, Roster};
use crate::storage::EmployeeStore;

/// escalafon — plant roster and category progression.
#[derive(Debug, Parser)]
#[command(name = "escalafon", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r"Workflow: tracking a new hire
  1. escalafon add Ana Ruiz --department calidad --category a \
       --start 2024-01-10 --seniority 2020-05-01
  2. escalafon list
     → rows past the 23-month window are marked with *
  3. escalafon check 1
     → 'Ana Ruiz advanced to category B' (and the contract clock restarts)
  4. escalafon export
     → writes Trabajadores_CCOO_DAMM_<date>.txt";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a record to the end of the roster.
    Add {
        /// First name.
        name: String,

        /// Surname(s).
        surname: String,

        /// Plant section.
        #[arg(long, value_enum)]
        department: DepartmentArg,

        /// Starting category.
        #[arg(long, value_enum)]
        category: CategoryArg,

        /// Contract-start date (YYYY-MM-DD).
        #[arg(long)]
        start: Date,

        /// Original hire date (YYYY-MM-DD).
        #[arg(long)]
        seniority: Date,
    },

    /// Render the roster table.
    ///
    /// Rows currently past the eligibility window are marked with `*`.
    List,

    /// Check one row for a category change and apply it if due.
    ///
    /// Three outcomes: advanced (persisted), not yet eligible, or
    /// already at the top category.
    Check {
        /// Row number as shown by `list`.
        row: usize,
    },

    /// Edit fields of an existing row. Unspecified fields keep their value.
    Edit {
        /// Row number as shown by `list`.
        row: usize,

        /// New first name.
        #[arg(long)]
        name: Option<String>,

        /// New surname(s).
        #[arg(long)]
        surname: Option<String>,

        /// New plant section.
        #[arg(long, value_enum)]
        department: Option<DepartmentArg>,

        /// New category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// New contract-start date (YYYY-MM-DD).
        #[arg(long)]
        start: Option<Date>,

        /// New original hire date (YYYY-MM-DD).
        #[arg(long)]
        seniority: Option<Date>,
    },

    /// Write the roster report to a text file.
    ///
    /// Defaults to `Trabajadores_CCOO_DAMM_<dd-mm-yyyy>.txt` in the
    /// working directory.
    Export {
        /// Write the report to this file instead of the date-stamped name.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// CLI-facing department, mapped to the domain `Department`.
#[derive(Debug, Clone, ValueEnum)]
pub enum DepartmentArg {
    /// Envasado (packaging).
    Envasado,
    /// Logística (logistics).
    Logistica,
    /// Elaboración (production).
    Elaboracion,
    /// Calidad (quality).
    Calidad,
    /// Mantenimiento (maintenance).
    Mantenimiento,
}

impl DepartmentArg {
    fn to_domain(&self) -> Department {
        match self {
            Self::Envasado => Department::Envasado,
            Self::Logistica => Department::Logistica,
            Self::Elaboracion => Department::Elaboracion,
            Self::Calidad => Department::Calidad,
            Self::Mantenimiento => Department::Mantenimiento,
        }
    }
}

/// CLI-facing category, mapped to the domain `Category`.
#[derive(Debug, Clone, ValueEnum)]
pub enum CategoryArg {
    A,
    B,
    C,
}

impl CategoryArg {
    fn to_domain(&self) -> Category {
        match self {
            Self::A => Category::A,
            Self::B => Category::B,
            Self::C => Category::C,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run<S: EmployeeStore>(roster: &mut Roster<S>) -> Result<(), String> {
    let cli = Cli::parse();
    let today = Zoned::now().date();

    match cli.command {
        Command::Add {
            name,
            surname,
            department,
            category,
            start,
            seniority,
        } => {
            let employee = Employee {
                name,
                surname,
                department: department.to_domain(),
                category: category.to_domain(),
                contract_start: start,
                seniority,
            };
            cmd_add(roster, employee, today)
        }
        Command::List => {
            table::render(roster.employees(), today);
            Ok(())
        }
        Command::Check { row } => cmd_check(roster, row, today),
        Command::Edit {
            row,
            name,
            surname,
            department,
            category,
            start,
            seniority,
        } => {
            let update = EmployeeUpdate {
                name,
                surname,
                department: department.as_ref().map(DepartmentArg::to_domain),
                category: category.as_ref().map(CategoryArg::to_domain),
                contract_start: start,
                seniority,
            };
            cmd_edit(roster, row, update, today)
        }
        Command::Export { out } => cmd_export(roster, out, today),
    }
}

fn cmd_add<S: EmployeeStore>(
    roster: &mut Roster<S>,
    employee: Employee,
    today: Date,
) -> Result<(), String> {
    roster
        .add(employee)
        .map_err(|e| format!("failed to save roster: {e}"))?;

    table::render(roster.employees(), today);
    Ok(())
}

fn cmd_check<S: EmployeeStore>(
    roster: &mut Roster<S>,
    row: usize,
    today: Date,
) -> Result<(), String> {
    let Some(index) = row.checked_sub(1) else {
        return Err(format!("no record at row {row}"));
    };

    let outcome = roster
        .check_and_advance(index, today)
        .map_err(|e| format!("failed to save roster: {e}"))?;

    match outcome {
        AdvanceOutcome::Advanced(category) => {
            let employee = &roster.employees()[index];
            println!(
                "{} {} advanced to category {category}",
                employee.name, employee.surname
            );
            table::render(roster.employees(), today);
            Ok(())
        }
        AdvanceOutcome::NotYetEligible => {
            let employee = &roster.employees()[index];
            println!(
                "{} {} is not yet eligible for a category change",
                employee.name, employee.surname
            );
            Ok(())
        }
        AdvanceOutcome::AtTopCategory => {
            let employee = &roster.employees()[index];
            println!(
                "{} {} is already at the top category",
                employee.name, employee.surname
            );
            Ok(())
        }
        AdvanceOutcome::NotFound => Err(format!("no record at row {row}")),
    }
}

fn cmd_edit<S: EmployeeStore>(
    roster: &mut Roster<S>,
    row: usize,
    update: EmployeeUpdate,
    today: Date,
) -> Result<(), String> {
    if update.name.is_none()
        && update.surname.is_none()
        && update.department.is_none()
        && update.category.is_none()
        && update.contract_start.is_none()
        && update.seniority.is_none()
    {
        return Err("specify at least one field to change".to_string());
    }

    let Some(index) = row.checked_sub(1) else {
        return Err(format!("no record at row {row}"));
    };

    let edited = roster
        .edit(index, update)
        .map_err(|e| format!("failed to save roster: {e}"))?;
    if !edited {
        return Err(format!("no record at row {row}"));
    }

    table::render(roster.employees(), today);
    Ok(())
}

fn cmd_export<S: EmployeeStore>(
    roster: &Roster<S>,
    out: Option<PathBuf>,
    today: Date,
) -> Result<(), String> {
    let content = report::render(roster.employees());
    let path = out.unwrap_or_else(|| PathBuf::from(report::file_name(today)));

    fs::write(&path, &content).map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    eprintln!(
        "Exported {} record(s) → {}",
        roster.employees().len(),
        path.display()
    );
    Ok(())
}
