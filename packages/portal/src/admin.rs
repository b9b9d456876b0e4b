//! # Admin dashboard tabs
//!
//! Each tab owns a private copy of its mock collection and nothing is shared
//! between tabs: a student added in one place does not appear in another.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::mock::{self, date};
use crate::models::{Exam, User};

/// Score at or above which an attempt passes.
pub const PASS_MARK: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AdminTab {
    #[default]
    Students,
    ExamScores,
    CreateExam,
    GatBank,
    Announcements,
    AdminManagement,
}

impl AdminTab {
    pub const ALL: [AdminTab; 6] = [
        AdminTab::Students,
        AdminTab::ExamScores,
        AdminTab::CreateExam,
        AdminTab::GatBank,
        AdminTab::Announcements,
        AdminTab::AdminManagement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Students => "Students",
            AdminTab::ExamScores => "Exam Scores",
            AdminTab::CreateExam => "Create Exam",
            AdminTab::GatBank => "GAT Bank",
            AdminTab::Announcements => "Announcements",
            AdminTab::AdminManagement => "Admin Management",
        }
    }

    /// Tabs shown to `user`. Admin management is root only.
    pub fn visible_for(user: &User) -> Vec<AdminTab> {
        Self::ALL
            .into_iter()
            .filter(|tab| *tab != AdminTab::AdminManagement || user.is_root)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub exams_taken: u32,
    pub average_score: u32,
}

pub fn students() -> Vec<Student> {
    [
        ("2024001", "Ahmed Al-Harbi", 5, 84),
        ("2024002", "Sara Al-Qahtani", 4, 91),
        ("2024003", "Mohammed Al-Otaibi", 6, 72),
        ("2024004", "Noura Al-Shehri", 3, 88),
        ("2024005", "Khalid Al-Dossari", 2, 65),
        ("2024006", "Reem Al-Zahrani", 5, 79),
    ]
    .into_iter()
    .map(|(id, name, exams_taken, average_score)| Student {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@students.example.edu"),
        exams_taken,
        average_score,
    })
    .collect()
}

/// Case-insensitive match on name or id. A blank query keeps everyone.
pub fn search_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    let needle = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| {
            needle.is_empty() || s.name.to_lowercase().contains(&needle) || s.id.contains(&needle)
        })
        .collect()
}

/// One student's attempt at one exam.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRecord {
    pub exam_id: String,
    pub exam_name: String,
    pub student_id: String,
    pub student_name: String,
    pub score: u32,
    pub date: NaiveDate,
}

pub fn score_records() -> Vec<ScoreRecord> {
    let roster = students();
    let exams = [
        ("exam001", "Introduction to Computer Science", date(2025, 3, 2)),
        ("exam002", "Data Structures and Algorithms", date(2025, 3, 4)),
        ("exam003", "Basic Mathematics", date(2025, 1, 15)),
    ];
    let scores: [[u32; 6]; 3] = [
        [84, 93, 58, 90, 61, 77],
        [79, 88, 70, 85, 49, 81],
        [90, 95, 74, 87, 66, 80],
    ];
    exams
        .iter()
        .zip(scores)
        .flat_map(|((exam_id, exam_name, when), row)| {
            roster.iter().zip(row).map(move |(student, score)| ScoreRecord {
                exam_id: exam_id.to_string(),
                exam_name: exam_name.to_string(),
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                score,
                date: *when,
            })
        })
        .collect()
}

/// Aggregates for one exam.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamSummary {
    pub exam_id: String,
    pub exam_name: String,
    pub attempts: usize,
    pub average: f64,
    pub highest: u32,
    pub lowest: u32,
    /// Percent of attempts at or above [`PASS_MARK`].
    pub pass_rate: u32,
}

fn summarize(exam_id: &str, records: &[&ScoreRecord]) -> Option<ExamSummary> {
    let first = records.first()?;
    let attempts = records.len();
    let sum: u32 = records.iter().map(|r| r.score).sum();
    let passed = records.iter().filter(|r| r.score >= PASS_MARK).count();
    Some(ExamSummary {
        exam_id: exam_id.to_string(),
        exam_name: first.exam_name.clone(),
        attempts,
        average: (sum as f64 / attempts as f64 * 10.0).round() / 10.0,
        highest: records.iter().map(|r| r.score).max().unwrap_or(0),
        lowest: records.iter().map(|r| r.score).min().unwrap_or(0),
        pass_rate: (passed * 100 / attempts) as u32,
    })
}

/// One summary per exam, in first-seen order.
pub fn exam_summaries(records: &[ScoreRecord]) -> Vec<ExamSummary> {
    let mut ids: Vec<&str> = Vec::new();
    for r in records {
        if !ids.contains(&r.exam_id.as_str()) {
            ids.push(&r.exam_id);
        }
    }
    ids.into_iter()
        .filter_map(|id| {
            let rows: Vec<&ScoreRecord> = records.iter().filter(|r| r.exam_id == id).collect();
            summarize(id, &rows)
        })
        .collect()
}

/// Detail page of one exam: its summary and every attempt, best first.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamDetail {
    pub summary: ExamSummary,
    pub records: Vec<ScoreRecord>,
}

pub fn exam_detail(records: &[ScoreRecord], exam_id: &str) -> Option<ExamDetail> {
    let mut rows: Vec<&ScoreRecord> = records.iter().filter(|r| r.exam_id == exam_id).collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    let summary = summarize(exam_id, &rows)?;
    Some(ExamDetail {
        summary,
        records: rows.into_iter().cloned().collect(),
    })
}

/// Headline numbers on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardStats {
    pub total_students: usize,
    pub active_exams: usize,
    pub average_score: f64,
}

impl DashboardStats {
    pub fn compute(students: &[Student], exams: &[Exam], records: &[ScoreRecord]) -> Self {
        let average_score = if records.is_empty() {
            0.0
        } else {
            let sum: u32 = records.iter().map(|r| r.score).sum();
            (sum as f64 / records.len() as f64 * 10.0).round() / 10.0
        };
        Self {
            total_students: students.len(),
            active_exams: exams.len(),
            average_score,
        }
    }
}

/// The create-exam form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamDraft {
    pub name: String,
    pub organizer: String,
    pub end_date: Option<NaiveDate>,
    pub duration: u32,
    pub question_count: u32,
}

impl ExamDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let complete = !self.name.trim().is_empty()
            && !self.organizer.trim().is_empty()
            && self.end_date.is_some()
            && self.duration > 0
            && self.question_count > 0;
        if complete {
            Ok(())
        } else {
            Err(ValidationError::IncompleteExam)
        }
    }
}

/// Exams created from the admin tab, seeded with the published ones.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamCatalog {
    pub exams: Vec<Exam>,
}

impl Default for ExamCatalog {
    fn default() -> Self {
        Self {
            exams: mock::available_exams(),
        }
    }
}

impl ExamCatalog {
    /// Append an exam built from `draft`, added `today`.
    pub fn create(&mut self, draft: &ExamDraft, today: NaiveDate) -> Result<&Exam, ValidationError> {
        draft.validate()?;
        let id = format!("exam{:03}", self.exams.len() + 1);
        self.exams.push(Exam {
            id: id.clone(),
            name: draft.name.trim().to_string(),
            organizer: draft.organizer.trim().to_string(),
            end_date: draft.end_date.unwrap_or(today),
            added_date: today,
            duration: draft.duration,
            question_count: draft.question_count,
        });
        tracing::info!("Created exam {id}");
        Ok(&self.exams[self.exams.len() - 1])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminAccount {
    pub username: String,
    pub name: String,
    pub is_root: bool,
}

/// Root-only administrator list.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminRoster {
    pub admins: Vec<AdminAccount>,
}

impl Default for AdminRoster {
    fn default() -> Self {
        let admin = |username: &str, name: &str, is_root: bool| AdminAccount {
            username: username.to_string(),
            name: name.to_string(),
            is_root,
        };
        Self {
            admins: vec![
                admin("root", "Root Administrator", true),
                admin("registrar", "Registrar Office", false),
                admin("gat.coordinator", "GAT Coordinator", false),
            ],
        }
    }
}

impl AdminRoster {
    pub fn add(&mut self, username: &str, name: &str) -> Result<(), ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        if self.admins.iter().any(|a| a.username.eq_ignore_ascii_case(username)) {
            return Err(ValidationError::DuplicateAdmin);
        }
        let name = if name.trim().is_empty() { username } else { name.trim() };
        self.admins.push(AdminAccount {
            username: username.to_string(),
            name: name.to_string(),
            is_root: false,
        });
        tracing::info!("Added administrator {username}");
        Ok(())
    }

    /// Remove a non-root administrator. Unknown usernames are a no-op.
    pub fn remove(&mut self, username: &str) -> Result<(), ValidationError> {
        if let Some(index) = self.admins.iter().position(|a| a.username == username) {
            if self.admins[index].is_root {
                return Err(ValidationError::RootAdmin);
            }
            self.admins.remove(index);
            tracing::info!("Removed administrator {username}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_management_is_root_only() {
        let admin = User::new("a", "A").admin();
        assert!(!AdminTab::visible_for(&admin).contains(&AdminTab::AdminManagement));
        assert_eq!(AdminTab::visible_for(&admin).len(), 5);

        let root = User::new("r", "R").root();
        assert_eq!(AdminTab::visible_for(&root), AdminTab::ALL.to_vec());
    }

    #[test]
    fn test_search_students() {
        let roster = students();
        assert_eq!(search_students(&roster, "").len(), 6);
        assert_eq!(search_students(&roster, "  sara ").len(), 1);
        assert_eq!(search_students(&roster, "2024004")[0].name, "Noura Al-Shehri");
        assert!(search_students(&roster, "zzz").is_empty());
    }

    #[test]
    fn test_exam_summaries() {
        let records = score_records();
        assert_eq!(records.len(), 18);
        let summaries = exam_summaries(&records);
        assert_eq!(summaries.len(), 3);

        let first = &summaries[0];
        assert_eq!(first.exam_id, "exam001");
        assert_eq!(first.attempts, 6);
        assert_eq!(first.highest, 93);
        assert_eq!(first.lowest, 58);
        assert_eq!(first.average, 77.2);
        assert_eq!(first.pass_rate, 83);
    }

    #[test]
    fn test_exam_detail_sorted_best_first() {
        let records = score_records();
        let detail = exam_detail(&records, "exam002").unwrap();
        assert_eq!(detail.records.len(), 6);
        assert_eq!(detail.records[0].score, 88);
        assert_eq!(detail.records[5].score, 49);
        assert!(exam_detail(&records, "missing").is_none());
    }

    #[test]
    fn test_dashboard_stats() {
        let stats = DashboardStats::compute(&students(), &mock::available_exams(), &[]);
        assert_eq!(stats.total_students, 6);
        assert_eq!(stats.active_exams, 2);
        assert_eq!(stats.average_score, 0.0);
    }

    #[test]
    fn test_create_exam() {
        let today = date(2025, 3, 1);
        let mut catalog = ExamCatalog::default();

        let mut draft = ExamDraft {
            name: "Physics I".into(),
            organizer: "Dr. Hassan".into(),
            end_date: None,
            duration: 45,
            question_count: 15,
        };
        assert_eq!(catalog.create(&draft, today), Err(ValidationError::IncompleteExam));
        assert_eq!(catalog.exams.len(), 2);

        draft.end_date = Some(date(2025, 4, 1));
        let exam = catalog.create(&draft, today).unwrap();
        assert_eq!(exam.id, "exam003");
        assert_eq!(exam.added_date, today);
        assert_eq!(catalog.exams.len(), 3);
    }

    #[test]
    fn test_admin_roster() {
        let mut roster = AdminRoster::default();
        assert_eq!(roster.add(" ", "x"), Err(ValidationError::EmptyUsername));
        assert_eq!(roster.add("Registrar", "x"), Err(ValidationError::DuplicateAdmin));

        roster.add("exams", "").unwrap();
        assert_eq!(roster.admins.last().unwrap().name, "exams");

        assert_eq!(roster.remove("root"), Err(ValidationError::RootAdmin));
        roster.remove("exams").unwrap();
        roster.remove("nobody").unwrap();
        assert_eq!(roster.admins.len(), 3);
    }
}
