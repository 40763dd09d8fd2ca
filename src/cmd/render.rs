use crate::cmd::{CommandError, CommandResponse, PlaceholderArgs};
use crate::domain::report::RenderReport;

/// Input arguments for render command execution API.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderCommandArgs {
    pub template: String,
    pub placeholders: PlaceholderArgs,
}

pub fn run(args: &RenderCommandArgs) -> CommandResponse {
    match execute(args) {
        Ok(report) => CommandResponse::report(&report, 0),
        Err(error) => error.into_response(),
    }
}

fn execute(args: &RenderCommandArgs) -> Result<RenderReport, CommandError> {
    let placeholders = args
        .placeholders
        .build()
        .map_err(CommandError::input_usage)?;
    let rendered = placeholders
        .apply(&args.template)
        .map_err(CommandError::input_usage)?;
    Ok(RenderReport { rendered })
}
