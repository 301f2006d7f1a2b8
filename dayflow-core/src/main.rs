use anyhow::Context;
use clap::{Parser, Subcommand};
use dayflow_core::db::DbService;
use dayflow_core::services::{onboarding, reconciler};
use dayflow_core::utils::time;
use dayflow_core::{Config, LogNotifier, init_logger_with_file, reports};
use shared::models::{EmployeeCreate, Role};

#[derive(Parser)]
#[command(name = "dayflow", version, about = "Dayflow HRMS operational commands")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Onboard an employee (creates the profile and initial payroll too)
    AddEmployee {
        /// Employee ID in the EMP1234 format
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        /// admin | employee
        #[arg(long, value_parser = parse_role, default_value = "employee")]
        role: Role,
    },
    /// Run the daily leave-to-attendance reconciliation sweep
    ///
    /// Intended to be invoked once per day by an external scheduler; safe
    /// to re-run for the same day.
    Sweep {
        /// Day to reconcile (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Back-fill missing profile/payroll records for existing employees
    FixRecords,
    /// Org-wide attendance summary for an inclusive date range
    Summary {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: String,
    },
}

fn parse_role(value: &str) -> Result<Role, String> {
    match value.to_ascii_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "employee" => Ok(Role::Employee),
        other => Err(format!("unknown role '{other}', expected admin or employee")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let cli = Cli::parse();
    let db = DbService::new(&config.db_path)
        .await
        .context("failed to open database")?;
    let pool = &db.pool;

    match cli.command {
        Commands::AddEmployee {
            employee_id,
            full_name,
            email,
            role,
        } => {
            let today = time::today(config.timezone);
            let employee = onboarding::create_employee(
                pool,
                &LogNotifier,
                EmployeeCreate {
                    employee_id,
                    full_name,
                    email,
                    role,
                },
                today,
            )
            .await?;
            println!(
                "Onboarded {} ({}) as {:?}",
                employee.employee_id, employee.full_name, employee.role
            );
        }
        Commands::Sweep { date } => {
            let date = match date {
                Some(raw) => time::parse_date(&raw)?,
                None => time::today(config.timezone),
            };
            let considered = reconciler::run_daily_sweep(pool, date).await?;
            println!("Sweep for {date}: {considered} approved leave(s) considered");
        }
        Commands::FixRecords => {
            let today = time::today(config.timezone);
            let fixed = onboarding::fix_missing_records(pool, today).await?;
            if fixed > 0 {
                println!("Repaired records for {fixed} employee(s)");
            } else {
                println!("All employees already have profile and payroll records");
            }
        }
        Commands::Summary { from, to } => {
            let start = time::parse_date(&from)?;
            let end = time::parse_date(&to)?;
            let rows = reports::org_summary(pool, start, end).await?;
            if rows.is_empty() {
                println!("No attendance recorded between {start} and {end}");
            } else {
                println!("{:<10} {:<24} {:>8} {:>9} {:>7} {:>10}", "ID", "Name", "Present", "Half-day", "Absent", "Hours");
                for row in rows {
                    println!(
                        "{:<10} {:<24} {:>8} {:>9} {:>7} {:>10.2}",
                        row.employee_code,
                        row.full_name,
                        row.present_days,
                        row.half_days,
                        row.absent_days,
                        row.total_hours
                    );
                }
            }
        }
    }

    Ok(())
}
