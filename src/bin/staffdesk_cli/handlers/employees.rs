#![deny(clippy::all, clippy::pedantic)]

use crate::args::EmployeesCmd;
use crate::client::{CliError, Ctx};

pub async fn handle(ctx: &Ctx, cmd: EmployeesCmd) -> Result<(), CliError> {
    match cmd {
        EmployeesCmd::List { search } => list(ctx, search).await,
    }
}

async fn list(ctx: &Ctx, search: Option<String>) -> Result<(), CliError> {
    let employees = ctx.profiles().list_employees(search.as_deref()).await?;
    if employees.is_empty() {
        println!("no employees");
        return Ok(());
    }
    println!("{:<26} {:<24} {:<30} {:<10} DEPARTMENT", "ID", "NAME", "EMAIL", "ROLE");
    for employee in &employees {
        println!(
            "{:<26} {:<24} {:<30} {:<10} {}",
            employee.id,
            employee.name,
            employee.email,
            employee.role,
            employee.department.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
