//! Console input for interactive play.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use ghosthunt_core::ShutdownSignal;
use owo_colors::OwoColorize;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// User interaction seam for the play loop.
pub trait Prompter {
    /// Read one trimmed line. `None` means input ended or a stop was requested.
    fn prompt_line(&self, prompt: &str) -> Option<String>;

    fn display_message(&self, message: &str);

    fn display_warning(&self, message: &str);
}

/// Stdin/stdout prompter that gives up as soon as the shutdown signal fires.
///
/// Stdin is read on its own thread so a blocked read never keeps Ctrl+C from
/// ending the session.
pub struct CliPrompter {
    lines: Receiver<String>,
    shutdown: Arc<ShutdownSignal>,
}

impl CliPrompter {
    pub fn new(shutdown: Arc<ShutdownSignal>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self {
            lines: rx,
            shutdown,
        }
    }
}

impl Prompter for CliPrompter {
    fn prompt_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();

        loop {
            if self.shutdown.is_shutdown() {
                println!();
                return None;
            }
            match self.lines.recv_timeout(POLL_INTERVAL) {
                Ok(line) => return Some(line.trim().to_string()),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    fn display_message(&self, message: &str) {
        println!("{}", message);
    }

    fn display_warning(&self, message: &str) {
        println!("{}", message.yellow());
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::Prompter;

    /// Replays canned input and records everything shown.
    pub struct ScriptedPrompter {
        inputs: RefCell<VecDeque<String>>,
        output: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: RefCell::new(inputs.iter().map(|s| s.to_string()).collect()),
                output: RefCell::new(Vec::new()),
            }
        }

        pub fn output(&self) -> String {
            self.output.borrow().join("\n")
        }

        pub fn remaining_inputs(&self) -> usize {
            self.inputs.borrow().len()
        }
    }

    impl Prompter for ScriptedPrompter {
        fn prompt_line(&self, prompt: &str) -> Option<String> {
            self.output.borrow_mut().push(prompt.to_string());
            self.inputs.borrow_mut().pop_front()
        }

        fn display_message(&self, message: &str) {
            self.output.borrow_mut().push(message.to_string());
        }

        fn display_warning(&self, message: &str) {
            self.output.borrow_mut().push(message.to_string());
        }
    }
}
