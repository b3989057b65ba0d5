//! Interactive play session.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ghosthunt_core::{
    AnswerOutcome, ElapsedTicker, EndReason, Error, Leaderboard, PersistenceWorker,
    PlayerProfile, Question, QuestionId, ScoreRecord, SessionPhase, ShutdownSignal, SkipOutcome,
    StoreEvent, Tracker, format_leaderboard,
};
use tracing::{debug, info, warn};

use crate::context::{AppContext, load_profile};
use crate::prompter::{CliPrompter, Prompter};

/// What the play loop does after a question prompt.
enum Turn {
    Continue,
    Finished(ScoreRecord),
    InputClosed,
}

/// Run a session on the terminal. Ctrl+C stops the session like `q`.
pub fn run_interactive(ctx: &AppContext, name: Option<&str>, contact: Option<&str>) -> Result<()> {
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        info!("Received stop signal, ending session...");
        shutdown_ctrlc.trigger();
    })?;

    let prompter = CliPrompter::new(shutdown);
    run(ctx, &prompter, name, contact)?;
    Ok(())
}

/// Play one session and persist its record. Returns the record, if any.
pub fn run(
    ctx: &AppContext,
    prompter: &dyn Prompter,
    name: Option<&str>,
    contact: Option<&str>,
) -> Result<Option<ScoreRecord>> {
    let cached = load_profile(&ctx.profiles);
    if !ctx.config.allow_replay && cached.as_ref().is_some_and(PlayerProfile::has_played) {
        prompter.display_message("You have already played. Here is the leaderboard:");
        let board = Leaderboard::new(ctx.store.fetch_all());
        show_leaderboard(ctx, prompter, &board, None);
        return Ok(None);
    }

    let mut tracker = Tracker::new(ctx.bank.clone());
    if !enter_player(&mut tracker, prompter, name, contact)? {
        return Ok(None);
    }

    let mut profile = match (cached, tracker.player()) {
        (Some(p), Some(player)) if p.contact == player.contact => PlayerProfile {
            name: player.name.clone(),
            ..p
        },
        (_, Some(player)) => PlayerProfile::new(&player.name, &player.contact),
        (_, None) => return Ok(None),
    };
    save_profile(ctx, &profile);

    let elapsed_ms = Arc::new(AtomicU64::new(0));
    let ticker = {
        let elapsed_ms = Arc::clone(&elapsed_ms);
        let started_at = tracker.clock().started_at().unwrap_or_else(Instant::now);
        ElapsedTicker::spawn(started_at, ctx.config.tick_interval(), move |elapsed| {
            elapsed_ms.store(elapsed.as_millis() as u64, Ordering::Relaxed);
        })
    };

    let record = play_loop(&mut tracker, prompter, &elapsed_ms)?;
    ticker.stop();

    let Some(record) = record else {
        return Ok(None);
    };
    announce_result(ctx, prompter, &tracker, &record);

    let board = persist(ctx, prompter, &record)?;
    profile.record_game(&record);
    save_profile(ctx, &profile);

    show_leaderboard(ctx, prompter, &board, Some(&record));
    Ok(Some(record))
}

/// Ask for name and email until the session starts. Returns false if input ended.
fn enter_player(
    tracker: &mut Tracker,
    prompter: &dyn Prompter,
    name: Option<&str>,
    contact: Option<&str>,
) -> Result<bool> {
    let mut name_arg = name.map(str::to_string);
    let mut contact_arg = contact.map(str::to_string);

    loop {
        let Some(name) = name_arg.take().or_else(|| prompter.prompt_line("Name: ")) else {
            return Ok(false);
        };
        let Some(contact) = contact_arg.take().or_else(|| prompter.prompt_line("Email: ")) else {
            return Ok(false);
        };

        match tracker.start_session(&name, &contact) {
            Ok(()) => return Ok(true),
            Err(e @ (Error::InvalidPlayerName | Error::InvalidContact(_))) => {
                prompter.display_warning(&format!("{}. Please enter a valid name and email.", e));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn play_loop(
    tracker: &mut Tracker,
    prompter: &dyn Prompter,
    elapsed_ms: &AtomicU64,
) -> Result<Option<ScoreRecord>> {
    while tracker.is_active() {
        show_status(tracker, prompter, elapsed_ms);
        let pending: Vec<QuestionId> = tracker.pending_questions().into_iter().cloned().collect();
        for (i, id) in pending.iter().enumerate() {
            prompter.display_message(&target_line(tracker, i, id));
        }

        let Some(input) = prompter.prompt_line("Target number (q to stop): ") else {
            return Ok(tracker.end_session(EndReason::ManualStop));
        };

        if input.eq_ignore_ascii_case("q") {
            if confirm_stop(prompter) {
                return Ok(tracker.end_session(EndReason::ManualStop));
            }
            continue;
        }

        let Some(id) = parse_choice(&input, pending.len()).map(|i| &pending[i]) else {
            prompter.display_warning(&format!(
                "Enter a target number between 1 and {}",
                pending.len()
            ));
            continue;
        };

        match ask_question(tracker, prompter, id)? {
            Turn::Continue => {}
            Turn::Finished(record) => return Ok(Some(record)),
            Turn::InputClosed => return Ok(tracker.end_session(EndReason::ManualStop)),
        }
    }
    Ok(None)
}

fn ask_question(tracker: &mut Tracker, prompter: &dyn Prompter, id: &QuestionId) -> Result<Turn> {
    let question = tracker
        .bank()
        .get(id)
        .cloned()
        .with_context(|| format!("Question {} missing from the bank", id))?;

    loop {
        prompter.display_message(&format!("\n{}", question.prompt));
        for (i, option) in question.options.iter().enumerate() {
            prompter.display_message(&format!("  {}. {}", i + 1, option));
        }
        prompter.display_message(&format!(
            "Attempts remaining: {}",
            tracker.attempts_remaining(id)
        ));

        let Some(input) = prompter.prompt_line("Answer (s to skip): ") else {
            return Ok(Turn::InputClosed);
        };

        if input.eq_ignore_ascii_case("s") {
            return match tracker.record_skip(id)? {
                SkipOutcome::Deferred { attempts_remaining } => {
                    prompter.display_message(&format!(
                        "Skipped. Come back to this ghost later ({} attempt(s) left).",
                        attempts_remaining
                    ));
                    Ok(Turn::Continue)
                }
                SkipOutcome::Exhausted => {
                    prompter.display_warning("No attempts left - No points awarded");
                    show_correct_answer(prompter, &question);
                    collect(tracker, prompter, id)
                }
            };
        }

        let Some(choice) = parse_choice(&input, question.options.len()) else {
            prompter.display_warning(&format!(
                "Enter an option number between 1 and {}",
                question.options.len()
            ));
            continue;
        };

        match tracker.record_answer(id, choice)? {
            AnswerOutcome::Correct { awarded, total } => {
                prompter.display_message(&format!(
                    "Correct! Points awarded: {:.1}\nTotal points: {:.1}",
                    awarded.value(),
                    total
                ));
                return collect(tracker, prompter, id);
            }
            AnswerOutcome::TryAgain { attempts_remaining } => {
                prompter.display_warning(&format!(
                    "Wrong! Try again! Attempts remaining: {}",
                    attempts_remaining
                ));
            }
            AnswerOutcome::Exhausted { .. } => {
                prompter.display_warning("Incorrect - No points awarded");
                prompter.display_message(&format!(
                    "Your answer: {}",
                    question.option(choice).unwrap_or_default()
                ));
                show_correct_answer(prompter, &question);
                return collect(tracker, prompter, id);
            }
        }
    }
}

fn collect(tracker: &mut Tracker, prompter: &dyn Prompter, id: &QuestionId) -> Result<Turn> {
    match tracker.collect(id)? {
        Some(record) => Ok(Turn::Finished(record)),
        None => {
            prompter.display_message(&format!(
                "Ghost collected! {} left.",
                tracker.remaining()
            ));
            Ok(Turn::Continue)
        }
    }
}

/// Save through the worker and keep the leaderboard it refreshes afterwards.
///
/// The worker is told to exit right after the save, so draining its events
/// ends exactly when the save and refresh are done, however slow the store is.
fn persist(ctx: &AppContext, prompter: &dyn Prompter, record: &ScoreRecord) -> Result<Leaderboard> {
    let worker = PersistenceWorker::spawn(Arc::clone(&ctx.store));
    worker.submit_save(record.clone())?;
    worker.request_shutdown()?;
    prompter.display_message("Saving score...");

    let mut board = None;
    while let Some(event) = worker.recv() {
        match event {
            StoreEvent::Saved(saved) => debug!("Score {} saved", saved.id),
            StoreEvent::SaveFailed { message, .. } => {
                prompter.display_warning(&format!("Could not save your score: {}", message));
            }
            StoreEvent::Refreshed(refreshed) => board = Some(refreshed),
        }
    }
    worker.shutdown();

    Ok(board.unwrap_or_else(|| {
        warn!("Persistence worker exited without a leaderboard refresh");
        Leaderboard::new(vec![record.clone()])
    }))
}

fn save_profile(ctx: &AppContext, profile: &PlayerProfile) {
    if let Err(e) = ctx.profiles.save(profile) {
        warn!("Failed to save profile: {}", e);
    }
}

fn announce_result(
    ctx: &AppContext,
    prompter: &dyn Prompter,
    tracker: &Tracker,
    record: &ScoreRecord,
) {
    let headline = match tracker.phase() {
        SessionPhase::Completed => "All Questions Completed!",
        _ => "Game stopped.",
    };
    prompter.display_message(&format!(
        "\n{}\nFinal Score: {:.1}/{}\nTime: {:.1} seconds",
        headline,
        record.score,
        ctx.max_score(),
        record.elapsed_seconds
    ));
}

fn show_leaderboard(
    ctx: &AppContext,
    prompter: &dyn Prompter,
    board: &Leaderboard,
    current: Option<&ScoreRecord>,
) {
    prompter.display_message(&format_leaderboard(
        board,
        ctx.config.leaderboard_size,
        ctx.max_score(),
        current.map(|r| &r.id),
    ));
}

fn show_status(tracker: &Tracker, prompter: &dyn Prompter, elapsed_ms: &AtomicU64) {
    let elapsed = Duration::from_millis(elapsed_ms.load(Ordering::Relaxed));
    prompter.display_message(&format!(
        "\nPoints: {:.1} | Ghosts left: {} | Time: {}",
        tracker.points(),
        tracker.remaining(),
        format_clock(elapsed)
    ));
}

fn show_correct_answer(prompter: &dyn Prompter, question: &Question) {
    prompter.display_message(&format!(
        "Correct answer: {}",
        question.correct_answer().unwrap_or_default()
    ));
}

fn target_line(tracker: &Tracker, index: usize, id: &QuestionId) -> String {
    if tracker.is_skipped(id) {
        format!(
            "  {}. {} (skipped, {} attempt(s) left)",
            index + 1,
            id,
            tracker.attempts_remaining(id)
        )
    } else {
        format!("  {}. {}", index + 1, id)
    }
}

fn confirm_stop(prompter: &dyn Prompter) -> bool {
    match prompter.prompt_line("Stop the game? Your score will be saved. (y/N): ") {
        Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
        None => true,
    }
}

/// Parse a 1-based menu choice into an index below `len`.
fn parse_choice(input: &str, len: usize) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

/// `MM:SS` timer label.
fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::test_support;
    use crate::prompter::scripted::ScriptedPrompter;
    use ghosthunt_core::{GameConfig, MemoryStore, QuestionBank, ScoreStore};
    use std::sync::atomic::AtomicUsize;
    use tempfile::TempDir;

    fn answer(bank: &QuestionBank, id: &str, correct: bool) -> String {
        let question = bank.get(&QuestionId::new(id)).unwrap();
        let index = if correct {
            question.correct_index
        } else {
            (question.correct_index + 1) % question.options.len()
        };
        (index + 1).to_string()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 4), Some(0));
        assert_eq!(parse_choice("4", 4), Some(3));
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("x", 4), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_millis(0)), "00:00");
        assert_eq!(format_clock(Duration::from_millis(83_900)), "01:23");
    }

    #[test]
    fn test_full_clear_saves_and_highlights() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let bank = ctx.bank.clone();

        let mut inputs = Vec::new();
        for (i, id) in bank.ids().enumerate() {
            // The next unanswered ghost is always first in the list
            inputs.push("1".to_string());
            if i == 0 {
                inputs.push(answer(&bank, id.as_str(), false));
            }
            inputs.push(answer(&bank, id.as_str(), true));
        }
        let refs: Vec<&str> = inputs.iter().map(String::as_str).collect();
        let prompter = ScriptedPrompter::new(&refs);

        let record = run(&ctx, &prompter, Some("Alice"), Some("a@x.com"))
            .unwrap()
            .unwrap();

        assert_eq!(record.score, 9.5);
        assert_eq!(prompter.remaining_inputs(), 0);
        let output = prompter.output();
        assert!(output.contains("All Questions Completed!"));
        assert!(output.contains("Wrong! Try again! Attempts remaining: 1"));
        assert!(output.contains("1. Alice: Scored 9.5/10"));

        assert_eq!(ctx.store.fetch_all(), vec![record.clone()]);
        let profile = ctx.profiles.load().unwrap().unwrap();
        assert_eq!(profile.games_played, 1);
        assert_eq!(profile.high_score, 9.5);
    }

    struct SlowStore {
        inner: MemoryStore,
        delay: Duration,
        fetches: AtomicUsize,
    }

    impl ScoreStore for SlowStore {
        fn save(&self, record: &ScoreRecord) -> ghosthunt_core::Result<()> {
            std::thread::sleep(self.delay);
            self.inner.save(record)
        }

        fn fetch_all(&self) -> Vec<ScoreRecord> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(self.delay);
            self.inner.fetch_all()
        }
    }

    #[test]
    fn test_slow_store_uses_worker_refresh_only() {
        let temp = TempDir::new().unwrap();
        let store = Arc::new(SlowStore {
            inner: MemoryStore::new(),
            delay: Duration::from_millis(300),
            fetches: AtomicUsize::new(0),
        });
        let ctx =
            test_support::context_with_store(&temp, GameConfig::default(), store.clone());
        let prompter = ScriptedPrompter::new(&["q", "y"]);

        let record = run(&ctx, &prompter, Some("Hal"), Some("h@x.com"))
            .unwrap()
            .unwrap();

        assert_eq!(store.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(store.inner.len(), 1);
        let output = prompter.output();
        assert!(output.contains("1. Hal: Scored 0.0/10"));
        assert!(!output.contains("Could not save"));
        assert_eq!(record.name, "Hal");
    }

    #[test]
    fn test_quit_with_confirmation_saves_partial_score() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let first = answer(&ctx.bank, "ghost1", true);
        let prompter = ScriptedPrompter::new(&["1", first.as_str(), "q", "n", "q", "y"]);

        let record = run(&ctx, &prompter, Some("Bob"), Some("b@x.com"))
            .unwrap()
            .unwrap();

        assert_eq!(record.score, 1.0);
        assert!(prompter.output().contains("Game stopped."));
        assert_eq!(ctx.store.fetch_all().len(), 1);
    }

    #[test]
    fn test_exhausted_question_is_collected_without_points() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let wrong = answer(&ctx.bank, "ghost1", false);
        let prompter = ScriptedPrompter::new(&["1", wrong.as_str(), wrong.as_str(), "q", "y"]);

        let record = run(&ctx, &prompter, Some("Cy"), Some("c@x.com"))
            .unwrap()
            .unwrap();

        assert_eq!(record.score, 0.0);
        let output = prompter.output();
        assert!(output.contains("Incorrect - No points awarded"));
        assert!(output.contains("Correct answer: "));
        assert!(output.contains("Ghost collected! 9 left."));
    }

    #[test]
    fn test_skipped_question_is_listed_first() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let prompter = ScriptedPrompter::new(&["2", "s", "q", "y"]);

        run(&ctx, &prompter, Some("Dee"), Some("d@x.com")).unwrap();

        let output = prompter.output();
        assert!(output.contains("  1. ghost2 (skipped, 1 attempt(s) left)"));
    }

    #[test]
    fn test_invalid_player_is_prompted_again() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let prompter = ScriptedPrompter::new(&["Eve", "eve@x.com", "q", "y"]);

        let record = run(&ctx, &prompter, Some("  "), Some("eve@x.com"))
            .unwrap()
            .unwrap();

        assert_eq!(record.name, "Eve");
        assert!(
            prompter
                .output()
                .contains("Please enter a valid name and email.")
        );
    }

    #[test]
    fn test_input_closed_before_start_records_nothing() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let prompter = ScriptedPrompter::new(&[]);

        assert!(run(&ctx, &prompter, None, None).unwrap().is_none());
        assert!(ctx.store.fetch_all().is_empty());
        assert!(ctx.profiles.load().unwrap().is_none());
    }

    #[test]
    fn test_replay_gate_shows_leaderboard_only() {
        let temp = TempDir::new().unwrap();
        let ctx = test_support::context(&temp, GameConfig::default());
        let mut profile = PlayerProfile::new("Fay", "f@x.com");
        profile.record_game(&ScoreRecord::new("Fay", "f@x.com", 4.0, 50.0));
        ctx.profiles.save(&profile).unwrap();

        let prompter = ScriptedPrompter::new(&["1"]);
        assert!(run(&ctx, &prompter, Some("Fay"), Some("f@x.com")).unwrap().is_none());
        assert!(prompter.output().contains("You have already played"));
        assert_eq!(prompter.remaining_inputs(), 1);
    }

    #[test]
    fn test_returning_player_keeps_totals() {
        let temp = TempDir::new().unwrap();
        let config = GameConfig {
            allow_replay: true,
            ..Default::default()
        };
        let ctx = test_support::context(&temp, config);
        let mut profile = PlayerProfile::new("Gil", "g@x.com");
        profile.record_game(&ScoreRecord::new("Gil", "g@x.com", 6.0, 70.0));
        ctx.profiles.save(&profile).unwrap();

        let prompter = ScriptedPrompter::new(&["q", "y"]);
        run(&ctx, &prompter, Some("Gil"), Some("g@x.com")).unwrap();

        let profile = ctx.profiles.load().unwrap().unwrap();
        assert_eq!(profile.games_played, 2);
        assert_eq!(profile.high_score, 6.0);
    }
}
