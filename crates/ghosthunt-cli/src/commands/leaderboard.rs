//! Leaderboard command.

use anyhow::Result;
use ghosthunt_core::{Leaderboard, format_leaderboard};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, limit: Option<usize>, json: bool) -> Result<()> {
    println!("{}", render(ctx, limit, json)?);
    Ok(())
}

fn render(ctx: &AppContext, limit: Option<usize>, json: bool) -> Result<String> {
    let board = Leaderboard::new(ctx.store.fetch_all());
    let limit = limit.unwrap_or(ctx.config.leaderboard_size);

    if json {
        return Ok(serde_json::to_string_pretty(board.top(limit))?);
    }
    Ok(format_leaderboard(&board, limit, ctx.max_score(), None))
}
