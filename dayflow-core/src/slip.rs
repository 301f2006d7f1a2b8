//! Salary-slip materialization
//!
//! Turns a payroll version into the structured payload the external PDF
//! renderer consumes. Building a slip is pure: no persistence, and the same
//! (payroll, month, year) always produces the same payload.

use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{Employee, Payroll, Profile};
use shared::money::from_cents;

use crate::utils::time;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One labeled amount on the slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipLine {
    pub label: String,
    pub amount: Decimal,
}

/// The structured payload handed to the rendering collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalarySlip {
    pub employee_code: String,
    pub full_name: String,
    pub email: String,
    pub designation: String,
    pub department: String,
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    pub earnings: Vec<SlipLine>,
    pub deductions: Vec<SlipLine>,
    pub gross_salary: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
}

/// Rendering collaborator contract: payload in, opaque bytes out.
pub trait SlipRenderer {
    fn render(&self, slip: &SalarySlip) -> AppResult<Vec<u8>>;
}

/// Build the salary slip for a payroll version and target period.
///
/// Month and year default to the current period in the business timezone.
/// Job fields fall back to "N/A" for an employee whose profile is missing.
pub fn build_salary_slip(
    employee: &Employee,
    profile: Option<&Profile>,
    payroll: &Payroll,
    month: Option<u32>,
    year: Option<i32>,
    tz: Tz,
) -> AppResult<SalarySlip> {
    let (current_month, current_year) = time::current_month_year(tz);
    let month = month.unwrap_or(current_month);
    let year = year.unwrap_or(current_year);
    if !(1..=12).contains(&month) {
        return Err(AppError::validation(format!("Invalid month: {month}")));
    }

    let earnings = vec![
        SlipLine {
            label: "Basic Salary".into(),
            amount: from_cents(payroll.basic_salary),
        },
        SlipLine {
            label: "House Rent Allowance".into(),
            amount: from_cents(payroll.house_rent_allowance),
        },
        SlipLine {
            label: "Transport Allowance".into(),
            amount: from_cents(payroll.transport_allowance),
        },
        SlipLine {
            label: "Medical Allowance".into(),
            amount: from_cents(payroll.medical_allowance),
        },
        SlipLine {
            label: "Other Allowances".into(),
            amount: from_cents(payroll.other_allowances),
        },
    ];
    let deductions = vec![
        SlipLine {
            label: "Provident Fund".into(),
            amount: from_cents(payroll.provident_fund),
        },
        SlipLine {
            label: "Professional Tax".into(),
            amount: from_cents(payroll.professional_tax),
        },
        SlipLine {
            label: "Income Tax".into(),
            amount: from_cents(payroll.income_tax),
        },
        SlipLine {
            label: "Other Deductions".into(),
            amount: from_cents(payroll.other_deductions),
        },
    ];

    Ok(SalarySlip {
        employee_code: employee.employee_id.clone(),
        full_name: employee.full_name.clone(),
        email: employee.email.clone(),
        designation: profile.map_or_else(|| "N/A".into(), |p| p.designation.clone()),
        department: profile.map_or_else(|| "N/A".into(), |p| p.department.clone()),
        month,
        year,
        month_name: MONTH_NAMES[(month - 1) as usize].into(),
        earnings,
        deductions,
        gross_salary: payroll.gross_salary(),
        total_deductions: payroll.total_deductions(),
        net_salary: payroll.net_salary(),
    })
}
