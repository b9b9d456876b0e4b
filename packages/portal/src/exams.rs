//! # Student exam flow
//!
//! Dashboard data, the question sheet an exam generates, and the
//! [`ExamSession`] that turns a student's answers into an [`ExamResult`].

use chrono::NaiveDate;

use crate::mock;
use crate::models::{Exam, ExamResult, User};

/// Summary card on the student dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentInfo {
    pub id: String,
    pub name: String,
    pub total_exams_taken: usize,
    /// Mean of past scores, one decimal.
    pub average_score: f64,
    /// `YYYY-MM-DD`, or `"-"` when the login time is unknown.
    pub last_login: String,
}

impl StudentInfo {
    pub fn from_user(user: &User, past: &[ExamResult]) -> Self {
        let average_score = if past.is_empty() {
            0.0
        } else {
            let sum: u32 = past.iter().map(|r| r.score).sum();
            (sum as f64 / past.len() as f64 * 10.0).round() / 10.0
        };
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            total_exams_taken: past.len(),
            average_score,
            last_login: user
                .login_time
                .map(|t| t.date_naive().to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Everything the student dashboard shows once loading finishes.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentDashboardData {
    pub info: StudentInfo,
    pub available: Vec<Exam>,
    pub past: Vec<ExamResult>,
}

impl StudentDashboardData {
    pub fn load(user: &User) -> Self {
        let past = mock::past_exams();
        Self {
            info: StudentInfo::from_user(user, &past),
            available: mock::available_exams(),
            past,
        }
    }
}

/// A multiple-choice question of a regular exam.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct: usize,
}

/// Question sheet for `exam`: `question_count` arithmetic items. The same
/// exam always yields the same sheet.
pub fn generate_questions(exam: &Exam) -> Vec<ExamQuestion> {
    (0..exam.question_count as usize)
        .map(|i| {
            let a = i as i64 + 2;
            let b = (i as i64 * 3) % 7 + 1;
            let answer = a * b;
            let correct = i % 4;
            let options = (0..4)
                .map(|slot| (answer + (slot as i64 - correct as i64) * b).to_string())
                .collect();
            ExamQuestion {
                id: format!("{}-q{}", exam.id, i + 1),
                text: format!("What is {a} × {b}?"),
                options,
                correct,
            }
        })
        .collect()
}

/// An exam in progress.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamSession {
    pub exam: Exam,
    pub questions: Vec<ExamQuestion>,
    pub answers: Vec<Option<usize>>,
    pub current: usize,
}

impl ExamSession {
    pub fn new(exam: Exam) -> Self {
        let questions = generate_questions(&exam);
        let answers = vec![None; questions.len()];
        Self {
            exam,
            questions,
            answers,
            current: 0,
        }
    }

    pub fn current_question(&self) -> Option<&ExamQuestion> {
        self.questions.get(self.current)
    }

    /// Record an answer for the current question.
    pub fn answer(&mut self, option: usize) {
        let in_range = self
            .current_question()
            .is_some_and(|q| option < q.options.len());
        if in_range {
            self.answers[self.current] = Some(option);
        }
    }

    pub fn next(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.questions.len() {
            self.current = index;
        }
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn correct_count(&self) -> u32 {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| **a == Some(q.correct))
            .count() as u32
    }

    /// Grade the session. Unanswered questions count as wrong.
    pub fn submit(&self, date: NaiveDate) -> ExamResult {
        let total = self.questions.len() as u32;
        let correct = self.correct_count();
        tracing::info!("Submitted {}: {correct}/{total}", self.exam.id);
        ExamResult {
            id: format!("{}-result", self.exam.id),
            name: self.exam.name.clone(),
            date,
            score: ExamResult::percentage(correct, total),
            total_questions: total,
            correct_answers: correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::mock::date;

    #[test]
    fn test_student_info_from_user() {
        let user = User::new("2024001", "Fatima")
            .logged_in_at(Utc.with_ymd_and_hms(2025, 3, 9, 8, 30, 0).unwrap());
        let info = StudentInfo::from_user(&user, &mock::past_exams());
        assert_eq!(info.total_exams_taken, 3);
        assert_eq!(info.average_score, 81.7);
        assert_eq!(info.last_login, "2025-03-09");

        let info = StudentInfo::from_user(&User::new("x", "y"), &[]);
        assert_eq!(info.average_score, 0.0);
        assert_eq!(info.last_login, "-");
    }

    #[test]
    fn test_generated_sheet() {
        let exam = mock::available_exams().remove(0);
        let sheet = generate_questions(&exam);
        assert_eq!(sheet.len(), 20);
        assert_eq!(sheet, generate_questions(&exam));
        for q in &sheet {
            assert_eq!(q.options.len(), 4);
            let mut unique = q.options.clone();
            unique.dedup();
            assert_eq!(unique.len(), 4, "{}", q.id);
        }
        assert_eq!(sheet[0].text, "What is 2 × 1?");
        assert_eq!(sheet[0].options[sheet[0].correct], "2");
    }

    #[test]
    fn test_session_grading() {
        let exam = mock::available_exams().remove(0);
        let mut session = ExamSession::new(exam);
        let total = session.questions.len();

        // Answer the first half correctly, leave the rest blank.
        for i in 0..total / 2 {
            session.go_to(i);
            let correct = session.questions[i].correct;
            session.answer(correct);
        }
        assert_eq!(session.answered_count(), total / 2);

        let result = session.submit(date(2025, 3, 14));
        assert_eq!(result.total_questions, 20);
        assert_eq!(result.correct_answers, 10);
        assert_eq!(result.score, 50);
        assert_eq!(result.name, "Introduction to Computer Science");
    }

    #[test]
    fn test_session_navigation_bounds() {
        let mut session = ExamSession::new(mock::available_exams().remove(0));
        session.previous();
        assert_eq!(session.current, 0);
        session.go_to(19);
        assert!(session.is_last());
        session.next();
        assert_eq!(session.current, 19);
        session.go_to(50);
        assert_eq!(session.current, 19);

        session.answer(9);
        assert_eq!(session.answers[19], None);
        session.answer(3);
        session.answer(1);
        assert_eq!(session.answers[19], Some(1));
    }
}
