//! # Domain models
//!
//! Plain data shared by the router, the tabs and the views. Every type is
//! `Serialize + Deserialize` with camelCase field names, so values written to
//! local storage keep the shape the browser build has always used
//! (`isAdmin`, `bankNumber`, `isCorrect`, ...).
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in account, persisted under `user`. |
//! | [`Exam`] | An exam a student can take. |
//! | [`ExamResult`] | A finished attempt, past or just submitted. |
//! | [`GatTopic`] / [`GatQuestion`] | The GAT question bank. |
//! | [`Announcement`] | An entry of the announcements feed. |

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_root: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_time: Option<DateTime<Utc>>,
}

impl User {
    /// A student account.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_admin: false,
            is_root: false,
            login_time: None,
        }
    }

    /// Builder method to grant admin rights.
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// Builder method to grant root admin rights (implies admin).
    pub fn root(mut self) -> Self {
        self.is_admin = true;
        self.is_root = true;
        self
    }

    /// Builder method to stamp the login time.
    pub fn logged_in_at(mut self, at: DateTime<Utc>) -> Self {
        self.login_time = Some(at);
        self
    }
}

/// An exam offered to students.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub name: String,
    pub organizer: String,
    pub end_date: NaiveDate,
    pub added_date: NaiveDate,
    /// Minutes.
    pub duration: u32,
    pub question_count: u32,
}

/// Outcome of an exam attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Percentage, 0..=100.
    pub score: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
}

impl ExamResult {
    /// Percentage of `correct` out of `total`, rounded to the nearest integer.
    pub fn percentage(correct: u32, total: u32) -> u32 {
        if total == 0 {
            return 0;
        }
        ((correct as f64 / total as f64) * 100.0).round() as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Display label, also the translation key.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Value used in form controls and storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

/// GAT subject. Doubles as the GAT mode chosen on the student dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    #[default]
    Math,
    Arabic,
}

impl Subject {
    pub const ALL: [Subject; 2] = [Subject::Math, Subject::Arabic];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Mathematics",
            Subject::Arabic => "Arabic",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::Arabic => "arabic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

/// A question-bank topic and the number of questions filed under it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GatTopic {
    pub id: String,
    pub name: String,
    pub count: u32,
}

/// One of the four answers of a GAT question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    /// "a" through "d".
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatQuestion {
    /// Blank for entries stored without an id.
    #[serde(default)]
    pub id: String,
    /// Id of the owning [`GatTopic`].
    pub topic: String,
    pub difficulty: Difficulty,
    pub subject: Subject,
    pub bank_number: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl GatQuestion {
    /// Options marked correct.
    pub fn correct_options(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options.iter().filter(|o| o.is_correct)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    General,
    Urgent,
    #[serde(rename = "System Maintenance")]
    SystemMaintenance,
    #[serde(rename = "New Feature")]
    NewFeature,
    #[serde(rename = "Exam Updates")]
    ExamUpdates,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::Urgent,
        Category::SystemMaintenance,
        Category::NewFeature,
        Category::ExamUpdates,
    ];

    /// Display label, also the translation key and the form value.
    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Urgent => "Urgent",
            Category::SystemMaintenance => "System Maintenance",
            Category::NewFeature => "New Feature",
            Category::ExamUpdates => "Exam Updates",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Decimal string id.
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub category: Category,
    pub is_published: bool,
    pub is_new: bool,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User::new("42", "Layla").admin();
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"id":"42","name":"Layla","isAdmin":true,"isRoot":false}"#);
    }

    #[test]
    fn test_user_missing_flags_default_to_false() {
        let user: User = serde_json::from_str(r#"{"id":"7","name":"Omar"}"#).unwrap();
        assert!(!user.is_admin);
        assert!(!user.is_root);
        assert!(user.login_time.is_none());
    }

    #[test]
    fn test_question_json_shape() {
        let raw = r#"{
            "id": "q9", "topic": "topic1", "difficulty": "hard", "subject": "arabic",
            "bankNumber": 5, "text": "?", "imageUrl": null,
            "options": [{"id": "a", "text": "x", "isCorrect": true}, {"id": "b", "text": "y"}]
        }"#;
        let q: GatQuestion = serde_json::from_str(raw).unwrap();
        assert_eq!(q.difficulty, Difficulty::Hard);
        assert_eq!(q.subject, Subject::Arabic);
        assert_eq!(q.bank_number, 5);
        assert_eq!(q.correct_options().count(), 1);
        assert!(!q.options[1].is_correct);
    }

    #[test]
    fn test_category_labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
        let json = serde_json::to_string(&Category::SystemMaintenance).unwrap();
        assert_eq!(json, "\"System Maintenance\"");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(ExamResult::percentage(20, 25), 80);
        assert_eq!(ExamResult::percentage(2, 3), 67);
        assert_eq!(ExamResult::percentage(0, 0), 0);
    }
}
