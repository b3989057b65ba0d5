//! Sync status command.

use anyhow::Result;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.sync_status);
    Ok(())
}
