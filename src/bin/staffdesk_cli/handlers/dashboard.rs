#![deny(clippy::all, clippy::pedantic)]

use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, json: bool) -> Result<(), CliError> {
    let controller = ctx.controller().await?;
    let counts = controller.status_counts();
    if json {
        print_json(&counts)?;
        return Ok(());
    }

    let actor = controller.actor();
    println!("signed in as {} ({})", actor.name, actor.role.as_str());
    println!("total     {}", counts.total);
    println!("pending   {}", counts.pending);
    println!("approved  {}", counts.approved);
    println!("declined  {}", counts.declined);
    Ok(())
}
