//! Payroll Model
//!
//! Payroll rows are versioned compensation snapshots keyed by
//! (employee, effective_date). Components are stored as integer cents;
//! gross/deductions/net are never stored, they are recomputed on every read
//! so historical rows stay reproducible.

use crate::money::from_cents;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payroll record - one compensation version per (employee, effective_date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    /// Date from which these figures apply
    pub effective_date: NaiveDate,

    // -- Components, integer cents (fixed-point, 2 fractional digits) --
    pub basic_salary: i64,
    pub house_rent_allowance: i64,
    pub transport_allowance: i64,
    pub medical_allowance: i64,
    pub other_allowances: i64,
    pub provident_fund: i64,
    pub professional_tax: i64,
    pub income_tax: i64,
    pub other_deductions: i64,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Payroll {
    /// Gross salary: basic + all allowances
    pub fn gross_salary(&self) -> Decimal {
        from_cents(
            self.basic_salary
                + self.house_rent_allowance
                + self.transport_allowance
                + self.medical_allowance
                + self.other_allowances,
        )
    }

    /// Sum of all deduction components
    pub fn total_deductions(&self) -> Decimal {
        from_cents(
            self.provident_fund + self.professional_tax + self.income_tax + self.other_deductions,
        )
    }

    /// Net salary: gross - total deductions
    pub fn net_salary(&self) -> Decimal {
        self.gross_salary() - self.total_deductions()
    }
}

/// Salary components payload, decimal amounts at the caller boundary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollComponents {
    pub basic_salary: Decimal,
    #[serde(default)]
    pub house_rent_allowance: Decimal,
    #[serde(default)]
    pub transport_allowance: Decimal,
    #[serde(default)]
    pub medical_allowance: Decimal,
    #[serde(default)]
    pub other_allowances: Decimal,
    #[serde(default)]
    pub provident_fund: Decimal,
    #[serde(default)]
    pub professional_tax: Decimal,
    #[serde(default)]
    pub income_tax: Decimal,
    #[serde(default)]
    pub other_deductions: Decimal,
}

impl PayrollComponents {
    /// All components in declaration order, with their slip labels
    pub fn labeled(&self) -> [(&'static str, Decimal); 9] {
        [
            ("Basic Salary", self.basic_salary),
            ("House Rent Allowance", self.house_rent_allowance),
            ("Transport Allowance", self.transport_allowance),
            ("Medical Allowance", self.medical_allowance),
            ("Other Allowances", self.other_allowances),
            ("Provident Fund", self.provident_fund),
            ("Professional Tax", self.professional_tax),
            ("Income Tax", self.income_tax),
            ("Other Deductions", self.other_deductions),
        ]
    }
}

/// Which branch an upsert took, for caller messaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertOutcome {
    Created,
    Updated,
}
