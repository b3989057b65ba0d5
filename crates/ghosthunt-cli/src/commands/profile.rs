//! Profile command.

use anyhow::Result;

use crate::context::{AppContext, load_profile};

pub fn run(ctx: &AppContext, json: bool) -> Result<()> {
    println!("{}", render(ctx, json)?);
    Ok(())
}

fn render(ctx: &AppContext, json: bool) -> Result<String> {
    let profile = load_profile(&ctx.profiles);

    if json {
        return Ok(serde_json::to_string_pretty(&profile)?);
    }
    Ok(match profile {
        Some(p) => format!(
            "Name:         {}\nEmail:        {}\nGames played: {}\nHigh score:   {:.1}/{}\nTime played:  {:.1}s",
            p.name,
            p.contact,
            p.games_played,
            p.high_score,
            ctx.max_score(),
            p.total_time_played
        ),
        None => "No player profile yet".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support;
    use ghosthunt_core::{GameConfig, PlayerProfile, ScoreRecord};
    use tempfile::TempDir;

    #[test]
    fn test_missing_profile() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        assert_eq!(render(&ctx, false).unwrap(), "No player profile yet");
        assert_eq!(render(&ctx, true).unwrap(), "null");
    }

    #[test]
    fn test_profile_summary() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let mut profile = PlayerProfile::new("Alice", "a@x.com");
        profile.record_game(&ScoreRecord::new("Alice", "a@x.com", 7.5, 83.2));
        ctx.profiles.save(&profile).unwrap();

        let output = render(&ctx, false).unwrap();
        assert!(output.contains("Games played: 1"));
        assert!(output.contains("High score:   7.5/10"));

        let parsed: PlayerProfile = serde_json::from_str(&render(&ctx, true).unwrap()).unwrap();
        assert_eq!(parsed, profile);
    }
}
