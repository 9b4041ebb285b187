use bistro_core::entities::Employee;

use crate::cli::subcommands::EmployeeCommands;
use crate::commands::shared::parse::parse_payload;
use crate::context::AppContext;
use crate::output::output_wrapped;

/// Handle `bistro employees`.
pub async fn handle(action: &EmployeeCommands, ctx: &AppContext) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        EmployeeCommands::List => {
            let employees = service.list_current_employees().await?;
            output_wrapped("employees", &employees, ctx.format)
        }
        EmployeeCommands::Get { id } => {
            let employee = service.get_employee(*id).await?;
            output_wrapped("employee", &employee, ctx.format)
        }
        EmployeeCommands::Create { data } => {
            let draft = Employee::hydrate(&parse_payload(data, "employee")?)?;
            let employee = service.create_employee(&draft).await?;
            output_wrapped("employee", &employee, ctx.format)
        }
        EmployeeCommands::Update { id, data } => {
            let partial = parse_payload(data, "employee")?;
            let employee = service.get_employee(*id).await?;
            let updated = service.update_employee(&employee, &partial).await?;
            output_wrapped("employee", &updated, ctx.format)
        }
        EmployeeCommands::Delete { id } => {
            let employee = service.get_employee(*id).await?;
            let retired = service.delete_employee(&employee).await?;
            output_wrapped("employee", &retired, ctx.format)
        }
    }
}
