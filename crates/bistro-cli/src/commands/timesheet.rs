use bistro_core::entities::Timesheet;

use crate::cli::subcommands::TimesheetCommands;
use crate::commands::shared::parse::{parse_payload, with_scope};
use crate::context::AppContext;
use crate::output::output_wrapped;

/// Handle `bistro timesheets --employee <id>`.
pub async fn handle(
    employee_id: i64,
    action: &TimesheetCommands,
    ctx: &AppContext,
) -> anyhow::Result<()> {
    let service = &ctx.service;
    match action {
        TimesheetCommands::List => {
            let timesheets = service.list_timesheets(employee_id).await?;
            output_wrapped("timesheets", &timesheets, ctx.format)
        }
        TimesheetCommands::Create { data } => {
            let payload = with_scope(parse_payload(data, "timesheet")?, "employeeId", employee_id);
            let draft = Timesheet::hydrate(&payload)?;
            let timesheet = service.create_timesheet(&draft).await?;
            output_wrapped("timesheet", &timesheet, ctx.format)
        }
        TimesheetCommands::Update { id, data } => {
            let partial = parse_payload(data, "timesheet")?;
            service.get_employee(employee_id).await?;
            let timesheet = service.get_timesheet(*id).await?;
            let updated = service.update_timesheet(&timesheet, &partial).await?;
            output_wrapped("timesheet", &updated, ctx.format)
        }
        TimesheetCommands::Delete { id } => {
            let timesheet = service.get_timesheet(*id).await?;
            service.get_employee(employee_id).await?;
            service.delete_timesheet(&timesheet).await?;
            tracing::info!(timesheet_id = *id, "timesheet deleted");
            Ok(())
        }
    }
}
