use serde::{Deserialize, Serialize};

/// Identifier of a question, which is also the name of the target carrying it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: &[&str],
        correct_index: usize,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_index,
        }
    }

    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }

    pub fn correct_answer(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct() {
        let q = Question::new("ghost2", "Version control?", &["Git", "Word", "Excel"], 0);
        assert!(q.is_correct(0));
        assert!(!q.is_correct(2));
        assert_eq!(q.correct_answer(), Some("Git"));
        assert_eq!(q.option(3), None);
    }

    #[test]
    fn test_question_id_serializes_as_string() {
        let id = QuestionId::new("ghost7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ghost7\"");
        assert_eq!(id.to_string(), "ghost7");
    }
}
