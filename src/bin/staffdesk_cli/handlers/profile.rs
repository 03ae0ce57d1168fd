#![deny(clippy::all, clippy::pedantic)]

use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, id: Option<String>) -> Result<(), CliError> {
    let profiles = ctx.profiles();
    let employee = match id {
        Some(id) => profiles.find_employee(&id).await?,
        None => profiles.current_employee().await?,
    };
    print_json(&employee)?;
    Ok(())
}
