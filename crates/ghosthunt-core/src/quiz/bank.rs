use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::quiz::{Question, QuestionId};

/// Ordered set of questions for a session. Each question backs one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty sets, duplicate ids and malformed questions.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::InvalidQuestionBank("no questions".to_string()));
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(&q.id) {
                return Err(Error::InvalidQuestionBank(format!(
                    "duplicate question id {}",
                    q.id
                )));
            }
            if q.options.len() < 2 {
                return Err(Error::InvalidQuestionBank(format!(
                    "question {} needs at least two options",
                    q.id
                )));
            }
            if q.correct_index >= q.options.len() {
                return Err(Error::InvalidQuestionBank(format!(
                    "question {} has correct index {} but {} options",
                    q.id,
                    q.correct_index,
                    q.options.len()
                )));
            }
        }

        Ok(Self { questions })
    }

    /// Parse a JSON array of questions.
    pub fn from_json(content: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(content)?;
        Self::new(questions)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let bank = Self::from_json(&content)?;
        info!(
            "Loaded {} questions from {}",
            bank.len(),
            path.as_ref().display()
        );
        Ok(bank)
    }

    /// The ten programming-trivia questions the game ships with.
    pub fn builtin() -> Self {
        let questions = vec![
            Question::new(
                "ghost1",
                "What's the primary programming language for iOS development?",
                &["Java", "Swift", "Python"],
                1,
            ),
            Question::new(
                "ghost2",
                "Which tool is commonly used for version control?",
                &["Git", "Word", "Excel"],
                0,
            ),
            Question::new(
                "ghost3",
                "What does API stand for?",
                &[
                    "Application Programming Interface",
                    "Applied Programming Institute",
                    "Advanced Program Integration",
                ],
                0,
            ),
            Question::new(
                "ghost4",
                "Which is NOT a common HTTP method?",
                &["GET", "POST", "SEND"],
                2,
            ),
            Question::new(
                "ghost5",
                "What's the purpose of UIKit in iOS?",
                &["Database Management", "User Interface Framework", "Network Calls"],
                1,
            ),
            Question::new(
                "ghost6",
                "Which pattern is commonly used in iOS development?",
                &["MVC", "ABC", "XYZ"],
                0,
            ),
            Question::new(
                "ghost7",
                "What's the default package manager for iOS?",
                &["npm", "CocoaPods", "SPM"],
                2,
            ),
            Question::new(
                "ghost8",
                "What framework is used for AR in iOS?",
                &["ARKit", "CoreAR", "RealityKit"],
                0,
            ),
            Question::new(
                "ghost9",
                "Which is a valid Swift variable declaration?",
                &["var x = 5", "int x = 5", "x := 5"],
                0,
            ),
            Question::new(
                "ghost10",
                "What's the entry point of an iOS app?",
                &["main.swift", "AppDelegate", "ViewController"],
                1,
            ),
        ];
        Self { questions }
    }

    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.questions.iter().map(|q| &q.id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
