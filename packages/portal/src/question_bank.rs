//! # GAT question-bank management
//!
//! [`QuestionBank`] is the state behind the admin "GAT Bank" tab. It owns its
//! topics and questions (seeded from [`crate::mock`], replaced by whatever is
//! stored under `gatQuestions`) and moves between four screens:
//!
//! ```text
//! Topics ──select──▶ Questions ──new/edit──▶ NewQuestion | EditQuestion
//!   ▲                    │  ▲                        │
//!   └──────back──────────┘  └──────submit/back───────┘
//! ```
//!
//! ## Counts
//!
//! A topic's `count` is maintained per mutation path only: +1 on create, -1
//! (never below zero) on delete, and -1/+1 when an edit moves a question to
//! another topic. Nothing recounts from the question list.
//!
//! ## Persistence
//!
//! Every successful submit and every delete writes the full question list
//! to the store.

use crate::error::{Error, Result, ValidationError};
use crate::gat::bank_range;
use crate::mock;
use crate::models::{AnswerOption, Difficulty, GatQuestion, GatTopic, Subject};
use crate::storage::{KeyValueStore, GAT_QUESTIONS_KEY};

/// Topics listed under Mathematics; every other topic is Arabic.
pub const MATH_TOPICS: [&str; 5] = ["Algebra", "Geometry", "Calculus", "Statistics", "Trigonometry"];

pub fn is_math_topic(name: &str) -> bool {
    MATH_TOPICS.contains(&name)
}

const OPTION_IDS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BankView {
    #[default]
    Topics,
    Questions,
    NewQuestion,
    EditQuestion,
}

/// Conjunctive question filter. `None` means "all".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuestionFilter {
    pub difficulty: Option<Difficulty>,
    pub subject: Option<Subject>,
    /// Bank start slot (1, 5, 9, ...); matches every slot of that bank.
    pub bank: Option<u32>,
    pub search: String,
}

impl QuestionFilter {
    pub fn matches(&self, question: &GatQuestion, topic: Option<&str>) -> bool {
        if topic.is_some_and(|t| question.topic != t) {
            return false;
        }
        if self.difficulty.is_some_and(|d| question.difficulty != d) {
            return false;
        }
        if self.subject.is_some_and(|s| question.subject != s) {
            return false;
        }
        if self.bank.is_some_and(|b| bank_range(question.bank_number).0 != b) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || question.text.to_lowercase().contains(&needle)
    }
}

/// The new/edit question form.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionForm {
    pub topic: String,
    pub difficulty: Difficulty,
    pub subject: Subject,
    pub bank_number: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub image_url: Option<String>,
}

impl QuestionForm {
    /// Empty form filed under `topic`.
    pub fn blank(topic: Option<&str>) -> Self {
        Self {
            topic: topic.unwrap_or_default().to_string(),
            difficulty: Difficulty::Medium,
            subject: Subject::Math,
            bank_number: 1,
            text: String::new(),
            options: OPTION_IDS
                .into_iter()
                .map(|id| AnswerOption {
                    id: id.to_string(),
                    text: String::new(),
                    is_correct: false,
                })
                .collect(),
            image_url: None,
        }
    }

    pub fn from_question(question: &GatQuestion) -> Self {
        Self {
            topic: question.topic.clone(),
            difficulty: question.difficulty,
            subject: question.subject,
            bank_number: question.bank_number,
            text: question.text.clone(),
            options: question.options.clone(),
            image_url: question.image_url.clone(),
        }
    }

    pub fn set_option_text(&mut self, option_id: &str, text: impl Into<String>) {
        if let Some(option) = self.options.iter_mut().find(|o| o.id == option_id) {
            option.text = text.into();
        }
    }

    /// Mark one option correct and every other option incorrect.
    pub fn mark_correct(&mut self, option_id: &str) {
        for option in &mut self.options {
            option.is_correct = option.id == option_id;
        }
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|o| o.is_correct).count()
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let complete = !self.topic.is_empty()
            && !self.text.trim().is_empty()
            && self.options.len() == OPTION_IDS.len()
            && self.options.iter().all(|o| !o.text.trim().is_empty());
        match self.correct_count() {
            _ if !complete => Err(ValidationError::IncompleteQuestion),
            0 => Err(ValidationError::IncompleteQuestion),
            1 => Ok(()),
            _ => Err(ValidationError::CorrectAnswerCount),
        }
    }

    fn to_question(&self, id: String) -> GatQuestion {
        GatQuestion {
            id,
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            subject: self.subject,
            bank_number: self.bank_number,
            text: self.text.clone(),
            options: self.options.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// State of the GAT bank management tab.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionBank {
    pub topics: Vec<GatTopic>,
    pub questions: Vec<GatQuestion>,
    pub view: BankView,
    pub selected_topic: Option<String>,
    /// Id of the question open in the edit form.
    pub editing: Option<String>,
    pub filter: QuestionFilter,
    pub form: QuestionForm,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::with_data(mock::topics(), mock::questions())
    }
}

impl QuestionBank {
    pub fn with_data(topics: Vec<GatTopic>, questions: Vec<GatQuestion>) -> Self {
        Self {
            topics,
            questions,
            view: BankView::Topics,
            selected_topic: None,
            editing: None,
            filter: QuestionFilter::default(),
            form: QuestionForm::blank(None),
        }
    }

    /// Mock data, replaced by the stored question list when there is one.
    ///
    /// Older builds appended the open form to the stored list, so entries may
    /// arrive without an id or repeat an earlier id. Blank ids get a fresh
    /// id; repeats are dropped, keeping the first.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let mut bank = Self::default();
        match store.get_json::<Vec<GatQuestion>>(GAT_QUESTIONS_KEY) {
            Ok(Some(stored)) => {
                tracing::info!("Loaded {} stored GAT questions", stored.len());
                bank.questions = Vec::with_capacity(stored.len());
                let mut unnamed = Vec::new();
                for question in stored {
                    if question.id.trim().is_empty() {
                        unnamed.push(question);
                    } else if bank.questions.iter().any(|q| q.id == question.id) {
                        tracing::warn!("Dropping repeated stored question {}", question.id);
                    } else {
                        bank.questions.push(question);
                    }
                }
                for mut question in unnamed {
                    question.id = bank.next_question_id();
                    bank.questions.push(question);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring stored GAT questions: {e}"),
        }
        bank
    }

    pub fn topic(&self, id: &str) -> Option<&GatTopic> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Topic name, or an empty string for unknown ids.
    pub fn topic_name(&self, id: &str) -> &str {
        self.topic(id).map(|t| t.name.as_str()).unwrap_or_default()
    }

    pub fn topics_for_subject(&self, subject: Subject) -> Vec<&GatTopic> {
        self.topics
            .iter()
            .filter(|t| is_math_topic(&t.name) == (subject == Subject::Math))
            .collect()
    }

    /// Append a topic with a trimmed name and a zero count.
    pub fn create_topic(&mut self, name: &str) -> std::result::Result<&GatTopic, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyTopicName);
        }
        let mut n = self.topics.len() + 1;
        while self.topic(&format!("topic{n}")).is_some() {
            n += 1;
        }
        self.topics.push(GatTopic {
            id: format!("topic{n}"),
            name: name.to_string(),
            count: 0,
        });
        tracing::info!("Created GAT topic {name}");
        Ok(&self.topics[self.topics.len() - 1])
    }

    pub fn select_topic(&mut self, id: &str) {
        self.selected_topic = Some(id.to_string());
        self.view = BankView::Questions;
    }

    pub fn show_topics(&mut self) {
        self.view = BankView::Topics;
    }

    /// Leave the form without saving.
    pub fn back_to_questions(&mut self) {
        self.editing = None;
        self.view = BankView::Questions;
    }

    /// Questions of the selected topic that pass the filter.
    pub fn filtered(&self) -> Vec<&GatQuestion> {
        let topic = self.selected_topic.as_deref();
        self.questions
            .iter()
            .filter(|q| self.filter.matches(q, topic))
            .collect()
    }

    pub fn new_question(&mut self) {
        self.form = QuestionForm::blank(self.selected_topic.as_deref());
        self.editing = None;
        self.view = BankView::NewQuestion;
    }

    /// Open the edit form for `id`. Returns false for unknown ids.
    pub fn edit_question(&mut self, id: &str) -> bool {
        let Some(question) = self.questions.iter().find(|q| q.id == id) else {
            return false;
        };
        self.form = QuestionForm::from_question(question);
        self.editing = Some(id.to_string());
        self.view = BankView::EditQuestion;
        true
    }

    fn next_question_id(&self) -> String {
        let floor = self.questions.len() as u64;
        let max = self
            .questions
            .iter()
            .filter_map(|q| q.id.strip_prefix('q')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        if let Some(next) = max.max(floor).checked_add(1) {
            return format!("q{next}");
        }
        // The largest suffix is saturated: take the first free slot instead.
        let mut n = 1u64;
        while self.questions.iter().any(|q| q.id == format!("q{n}")) {
            n += 1;
        }
        format!("q{n}")
    }

    fn adjust_count(&mut self, topic_id: &str, delta: i32) {
        if let Some(topic) = self.topics.iter_mut().find(|t| t.id == topic_id) {
            topic.count = topic.count.saturating_add_signed(delta);
        }
    }

    /// Save the form. Nothing changes when validation fails.
    pub fn submit<S: KeyValueStore>(&mut self, store: &S) -> Result<String> {
        self.form.validate()?;

        let id = match self.view {
            BankView::EditQuestion => {
                let id = self
                    .editing
                    .clone()
                    .ok_or_else(|| Error::NotFound("question being edited".into()))?;
                let index = self
                    .questions
                    .iter()
                    .position(|q| q.id == id)
                    .ok_or_else(|| Error::NotFound(id.clone()))?;
                let previous_topic = self.questions[index].topic.clone();
                self.questions[index] = self.form.to_question(id.clone());
                if previous_topic != self.form.topic {
                    let new_topic = self.form.topic.clone();
                    self.adjust_count(&previous_topic, -1);
                    self.adjust_count(&new_topic, 1);
                }
                tracing::info!("Updated GAT question {id}");
                id
            }
            _ => {
                let id = self.next_question_id();
                let question = self.form.to_question(id.clone());
                self.adjust_count(&question.topic, 1);
                self.questions.push(question);
                tracing::info!("Created GAT question {id}");
                id
            }
        };

        self.persist(store);
        self.editing = None;
        self.view = BankView::Questions;
        Ok(id)
    }

    /// Remove a question and decrement its topic count.
    pub fn delete_question<S: KeyValueStore>(&mut self, id: &str, store: &S) -> Option<GatQuestion> {
        let index = self.questions.iter().position(|q| q.id == id)?;
        let removed = self.questions.remove(index);
        self.adjust_count(&removed.topic, -1);
        if self.editing.as_deref() == Some(id) {
            self.back_to_questions();
        }
        self.persist(store);
        tracing::info!("Deleted GAT question {id}");
        Some(removed)
    }

    fn persist<S: KeyValueStore>(&self, store: &S) {
        if let Err(e) = store.set_json(GAT_QUESTIONS_KEY, &self.questions) {
            tracing::warn!("Cannot persist GAT questions: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn filled_form(bank: &mut QuestionBank, topic: &str) {
        bank.select_topic(topic);
        bank.new_question();
        bank.form.text = "What is 2 + 2?".into();
        for (id, text) in [("a", "3"), ("b", "4"), ("c", "5"), ("d", "6")] {
            bank.form.set_option_text(id, text);
        }
        bank.form.mark_correct("b");
    }

    fn count(bank: &QuestionBank, topic: &str) -> u32 {
        bank.topic(topic).map(|t| t.count).unwrap()
    }

    #[test]
    fn test_create_question_increments_topic_count() {
        let store = MemoryStore::new();
        let mut bank = QuestionBank::default();
        let before = count(&bank, "topic1");
        let total = bank.questions.len();

        filled_form(&mut bank, "topic1");
        let id = bank.submit(&store).unwrap();

        assert_eq!(count(&bank, "topic1"), before + 1);
        assert_eq!(count(&bank, "topic2"), 35);
        assert_eq!(bank.questions.len(), total + 1);
        assert_eq!(bank.view, BankView::Questions);
        assert_eq!(id, "q5");

        // The canonical list is persisted, not the list plus the form.
        let stored: Vec<GatQuestion> = store.get_json(GAT_QUESTIONS_KEY).unwrap().unwrap();
        assert_eq!(stored, bank.questions);
    }

    #[test]
    fn test_wrong_correct_count_is_rejected_without_mutation() {
        let store = MemoryStore::new();
        let mut bank = QuestionBank::default();
        filled_form(&mut bank, "topic1");

        // Zero correct.
        for option in &mut bank.form.options {
            option.is_correct = false;
        }
        let snapshot = bank.clone();
        assert!(matches!(
            bank.submit(&store),
            Err(Error::Validation(ValidationError::IncompleteQuestion))
        ));
        assert_eq!(bank, snapshot);

        // Two correct.
        bank.form.options[0].is_correct = true;
        bank.form.options[1].is_correct = true;
        let snapshot = bank.clone();
        assert!(matches!(
            bank.submit(&store),
            Err(Error::Validation(ValidationError::CorrectAnswerCount))
        ));
        assert_eq!(bank, snapshot);
        assert!(store.is_empty());
    }

    #[test]
    fn test_incomplete_form_is_rejected() {
        let mut form = QuestionForm::blank(Some("topic1"));
        form.text = "Q".into();
        form.mark_correct("a");
        assert_eq!(form.validate(), Err(ValidationError::IncompleteQuestion));

        for id in OPTION_IDS {
            form.set_option_text(id, "x");
        }
        assert_eq!(form.validate(), Ok(()));

        form.topic.clear();
        assert_eq!(form.validate(), Err(ValidationError::IncompleteQuestion));
    }

    #[test]
    fn test_mark_correct_is_exclusive() {
        let mut form = QuestionForm::blank(None);
        form.mark_correct("a");
        form.mark_correct("c");
        assert_eq!(form.correct_count(), 1);
        assert!(form.options[2].is_correct);
    }

    #[test]
    fn test_edit_moves_question_between_topics() {
        let store = MemoryStore::new();
        let mut bank = QuestionBank::default();
        assert!(bank.edit_question("q1"));
        assert_eq!(bank.view, BankView::EditQuestion);
        assert_eq!(bank.form.text, "If x + 3 = 7, what is the value of x?");

        bank.form.topic = "topic2".into();
        bank.form.text = "If x + 4 = 7, what is the value of x?".into();
        let id = bank.submit(&store).unwrap();

        assert_eq!(id, "q1");
        assert_eq!(count(&bank, "topic1"), 41);
        assert_eq!(count(&bank, "topic2"), 36);
        assert_eq!(bank.questions.len(), 4);
        assert_eq!(bank.questions[0].text, "If x + 4 = 7, what is the value of x?");
        assert!(!bank.edit_question("nope"));
    }

    #[test]
    fn test_delete_question() {
        let store = MemoryStore::new();
        let mut bank = QuestionBank::with_data(
            vec![GatTopic {
                id: "topic1".into(),
                name: "Algebra".into(),
                count: 0,
            }],
            mock::questions(),
        );
        let removed = bank.delete_question("q1", &store).unwrap();
        assert_eq!(removed.id, "q1");
        assert_eq!(count(&bank, "topic1"), 0);
        assert!(bank.questions.iter().all(|q| q.id != "q1"));
        assert!(bank.delete_question("q1", &store).is_none());

        let stored: Vec<GatQuestion> = store.get_json(GAT_QUESTIONS_KEY).unwrap().unwrap();
        assert_eq!(stored.len(), 3);
    }

    #[test]
    fn test_new_ids_never_collide_after_delete() {
        let store = MemoryStore::new();
        let mut bank = QuestionBank::default();
        bank.delete_question("q2", &store);
        filled_form(&mut bank, "topic1");
        let id = bank.submit(&store).unwrap();
        assert_eq!(id, "q5");
        let ids: std::collections::HashSet<_> = bank.questions.iter().map(|q| &q.id).collect();
        assert_eq!(ids.len(), bank.questions.len());
    }

    #[test]
    fn test_new_id_after_largest_possible_suffix() {
        let store = MemoryStore::new();
        let mut stored = mock::questions();
        stored[0].id = format!("q{}", u64::MAX);
        store.set_json(GAT_QUESTIONS_KEY, &stored).unwrap();

        let mut bank = QuestionBank::load(&store);
        filled_form(&mut bank, "topic1");
        let id = bank.submit(&store).unwrap();
        assert_eq!(id, "q1");

        let ids: std::collections::HashSet<_> = bank.questions.iter().map(|q| &q.id).collect();
        assert_eq!(ids.len(), bank.questions.len());

        let stored: Vec<GatQuestion> = store.get_json(GAT_QUESTIONS_KEY).unwrap().unwrap();
        assert_eq!(stored.len(), 5);
    }

    #[test]
    fn test_load_assigns_ids_to_stored_form_entries() {
        let store = MemoryStore::new();
        let mut stored = serde_json::to_value(mock::questions()).unwrap();
        let entries = stored.as_array_mut().unwrap();
        let mut form = entries[0].clone();
        form.as_object_mut().unwrap().remove("id");
        form["text"] = "Half-finished question".into();
        entries.push(form);
        entries.push(entries[1].clone());
        store.set(GAT_QUESTIONS_KEY, &stored.to_string());

        let bank = QuestionBank::load(&store);
        assert_eq!(bank.questions.len(), 5);
        let last = bank.questions.last().unwrap();
        assert_eq!(last.id, "q5");
        assert_eq!(last.text, "Half-finished question");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let mut bank = QuestionBank::default();
        assert_eq!(bank.filtered().len(), 4);

        bank.filter.subject = Some(Subject::Math);
        assert_eq!(bank.filtered().len(), 3);

        bank.filter.difficulty = Some(Difficulty::Medium);
        let ids: Vec<_> = bank.filtered().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids, vec!["q2"]);

        bank.filter.search = "CIRCLE".into();
        assert_eq!(bank.filtered().len(), 1);
        bank.filter.search = "triangle".into();
        assert!(bank.filtered().is_empty());

        let mut bank = QuestionBank::default();
        bank.filter.bank = Some(1);
        assert_eq!(bank.filtered().len(), 4);
        bank.filter.bank = Some(5);
        assert!(bank.filtered().is_empty());
        bank.filter.bank = Some(1);
        bank.select_topic("topic6");
        let ids: Vec<_> = bank.filtered().iter().map(|q| q.id.clone()).collect();
        assert_eq!(ids, vec!["q4"]);
    }

    #[test]
    fn test_create_topic() {
        let mut bank = QuestionBank::default();
        assert_eq!(bank.create_topic("   "), Err(ValidationError::EmptyTopicName));
        let topic = bank.create_topic("  Logic ").unwrap().clone();
        assert_eq!(topic.id, "topic11");
        assert_eq!(topic.name, "Logic");
        assert_eq!(topic.count, 0);
        assert_eq!(bank.topics.len(), 11);
    }

    #[test]
    fn test_topics_for_subject() {
        let bank = QuestionBank::default();
        assert_eq!(bank.topics_for_subject(Subject::Math).len(), 5);
        let arabic: Vec<_> = bank
            .topics_for_subject(Subject::Arabic)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert!(arabic.contains(&"Grammar"));
        assert!(!arabic.contains(&"Algebra"));
    }

    #[test]
    fn test_load_prefers_stored_questions() {
        let store = MemoryStore::new();
        assert_eq!(QuestionBank::load(&store).questions.len(), 4);

        store.set_json(GAT_QUESTIONS_KEY, &mock::questions()[..1]).unwrap();
        assert_eq!(QuestionBank::load(&store).questions.len(), 1);

        store.set(GAT_QUESTIONS_KEY, "[{]");
        assert_eq!(QuestionBank::load(&store).questions.len(), 4);
    }
}
