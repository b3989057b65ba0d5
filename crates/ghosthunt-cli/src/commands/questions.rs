//! Questions command.

use anyhow::Result;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    println!("{}", render(ctx));
    Ok(())
}

fn render(ctx: &AppContext) -> String {
    let mut lines = vec![format!("{} questions", ctx.bank.len())];
    for question in ctx.bank.iter() {
        lines.push(format!("\n[{}] {}", question.id, question.prompt));
        for (i, option) in question.options.iter().enumerate() {
            let marker = if question.is_correct(i) { "*" } else { " " };
            lines.push(format!("  {}{}. {}", marker, i + 1, option));
        }
    }
    lines.join("\n")
}
