//! # View router
//!
//! The portal has no URLs. A single [`Shell`] value holds the current
//! [`View`] tag plus the payloads a view needs (the exam being taken, the
//! result being shown, the exam an admin is inspecting, the GAT mode and
//! action). User actions are [`Action`] values; [`Shell::apply`] maps the
//! current state and an action to the next state.
//!
//! No transition is guarded: every action is accepted from every view, the
//! same as calling the corresponding handler directly. [`Shell::dispatch`]
//! wraps `apply` with the one side effect the shell owns, writing the session
//! on login and clearing it on logout.
//!
//! | Action | Next view |
//! |--------|-----------|
//! | `Login` | `AdminDashboard` for admins, otherwise `StudentDashboard` |
//! | `Logout` | `Login` |
//! | `StartExam` | `ExamIntro` |
//! | `BeginQuestions` | `ExamQuestion` |
//! | `CancelExam`, `ReturnToDashboard` | `StudentDashboard` |
//! | `SubmitExam` | `ExamResults` |
//! | `ViewExamDetails` | `ExamDetail` |
//! | `BackToAdmin` | `AdminDashboard` |
//! | `GatNavigate` | `GatExam` or `GatTraining` |

use crate::error::Result;
use crate::gat::GatAction;
use crate::models::{Exam, ExamResult, Subject, User};
use crate::session::SessionStore;
use crate::storage::KeyValueStore;

/// Top-level screen selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Login,
    StudentDashboard,
    ExamIntro,
    ExamQuestion,
    ExamResults,
    AdminDashboard,
    ExamDetail,
    GatExam,
    GatTraining,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Login,
        View::StudentDashboard,
        View::ExamIntro,
        View::ExamQuestion,
        View::ExamResults,
        View::AdminDashboard,
        View::ExamDetail,
        View::GatExam,
        View::GatTraining,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            View::Login => "login",
            View::StudentDashboard => "studentDashboard",
            View::ExamIntro => "examIntro",
            View::ExamQuestion => "examQuestion",
            View::ExamResults => "examResults",
            View::AdminDashboard => "adminDashboard",
            View::ExamDetail => "examDetail",
            View::GatExam => "gatExam",
            View::GatTraining => "gatTraining",
        }
    }

    /// Parse a view name. Unknown names render the login view.
    pub fn parse(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .unwrap_or(View::Login)
    }

    /// Landing view for a signed-in user.
    pub fn home_for(user: &User) -> Self {
        if user.is_admin {
            View::AdminDashboard
        } else {
            View::StudentDashboard
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Login(User),
    Logout,
    StartExam(Exam),
    BeginQuestions,
    CancelExam,
    SubmitExam(ExamResult),
    ReturnToDashboard,
    ViewExamDetails(String),
    BackToAdmin,
    GatNavigate(Subject, GatAction),
}

/// Shell state: current view plus view payloads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shell {
    pub view: View,
    pub user: Option<User>,
    pub selected_exam: Option<Exam>,
    pub exam_results: Option<ExamResult>,
    pub selected_exam_id: Option<String>,
    pub gat_mode: Option<Subject>,
    pub gat_action: Option<GatAction>,
}

impl Shell {
    /// Initial state for an optional restored user.
    pub fn start(user: Option<User>) -> Self {
        let view = user.as_ref().map(View::home_for).unwrap_or_default();
        Self {
            view,
            user,
            ..Self::default()
        }
    }

    /// Initial state from the stored session. A malformed session is logged,
    /// removed, and treated as signed out.
    pub fn restore<S: KeyValueStore>(session: &SessionStore<S>) -> Self {
        match session.restore() {
            Ok(user) => {
                if let Some(ref u) = user {
                    tracing::info!("Restored session for {}", u.id);
                }
                Self::start(user)
            }
            Err(e) => {
                tracing::warn!("Discarding stored session: {e}");
                session.clear();
                Self::start(None)
            }
        }
    }

    /// Apply an action. Pure: no storage is touched.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Login(user) => {
                self.view = View::home_for(&user);
                self.user = Some(user);
            }
            Action::Logout => {
                *self = Self::default();
            }
            Action::StartExam(exam) => {
                self.selected_exam = Some(exam);
                self.view = View::ExamIntro;
            }
            Action::BeginQuestions => {
                self.view = View::ExamQuestion;
            }
            Action::CancelExam => {
                self.selected_exam = None;
                self.view = View::StudentDashboard;
            }
            Action::SubmitExam(result) => {
                self.exam_results = Some(result);
                self.view = View::ExamResults;
            }
            Action::ReturnToDashboard => {
                self.selected_exam = None;
                self.exam_results = None;
                self.view = View::StudentDashboard;
            }
            Action::ViewExamDetails(id) => {
                self.selected_exam_id = Some(id);
                self.view = View::ExamDetail;
            }
            Action::BackToAdmin => {
                self.selected_exam_id = None;
                self.view = View::AdminDashboard;
            }
            Action::GatNavigate(mode, action) => {
                self.gat_mode = Some(mode);
                self.gat_action = Some(action);
                self.view = match action {
                    GatAction::Exam => View::GatExam,
                    GatAction::Train => View::GatTraining,
                };
            }
        }
    }

    /// Apply an action, persisting the session on login and clearing it on
    /// logout.
    pub fn dispatch<S: KeyValueStore>(
        &mut self,
        action: Action,
        session: &SessionStore<S>,
    ) -> Result<()> {
        match &action {
            Action::Login(user) => session.save(user)?,
            Action::Logout => session.clear(),
            _ => {}
        }
        tracing::debug!("{} -> {:?}", self.view.as_str(), action);
        self.apply(action);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::{mock, MemoryStore};

    fn all_actions() -> Vec<Action> {
        let exam = mock::available_exams().remove(0);
        let result = mock::past_exams().remove(0);
        vec![
            Action::Login(User::new("s", "Student")),
            Action::Login(User::new("a", "Admin").admin()),
            Action::Logout,
            Action::StartExam(exam),
            Action::BeginQuestions,
            Action::CancelExam,
            Action::SubmitExam(result),
            Action::ReturnToDashboard,
            Action::ViewExamDetails("exam001".into()),
            Action::BackToAdmin,
            Action::GatNavigate(Subject::Math, GatAction::Exam),
            Action::GatNavigate(Subject::Arabic, GatAction::Train),
        ]
    }

    #[test]
    fn test_random_action_sequences_stay_in_view_set() {
        let actions = all_actions();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut shell = Shell::default();
            for _ in 0..25 {
                let action = actions[rng.gen_range(0..actions.len())].clone();
                shell.apply(action);
                assert!(View::ALL.contains(&shell.view));
                assert_eq!(View::parse(shell.view.as_str()), shell.view);
            }
        }
    }

    #[test]
    fn test_login_routes_by_role() {
        let mut shell = Shell::default();
        shell.apply(Action::Login(User::new("1", "A").admin()));
        assert_eq!(shell.view, View::AdminDashboard);

        let mut shell = Shell::default();
        shell.apply(Action::Login(User::new("2", "B")));
        assert_eq!(shell.view, View::StudentDashboard);

        let absent: User = serde_json::from_str(r#"{"id":"3","name":"C"}"#).unwrap();
        let mut shell = Shell::default();
        shell.apply(Action::Login(absent));
        assert_eq!(shell.view, View::StudentDashboard);
    }

    #[test]
    fn test_exam_flow_payloads() {
        let exam = mock::available_exams().remove(1);
        let mut shell = Shell::start(Some(User::new("s", "S")));

        shell.apply(Action::StartExam(exam.clone()));
        assert_eq!(shell.view, View::ExamIntro);
        assert_eq!(shell.selected_exam.as_ref(), Some(&exam));

        shell.apply(Action::BeginQuestions);
        assert_eq!(shell.view, View::ExamQuestion);

        let result = mock::past_exams().remove(0);
        shell.apply(Action::SubmitExam(result.clone()));
        assert_eq!(shell.view, View::ExamResults);
        assert_eq!(shell.exam_results, Some(result));

        shell.apply(Action::ReturnToDashboard);
        assert_eq!(shell.view, View::StudentDashboard);
        assert!(shell.selected_exam.is_none());
        assert!(shell.exam_results.is_none());
    }

    #[test]
    fn test_cancel_clears_selected_exam() {
        let mut shell = Shell::default();
        shell.apply(Action::StartExam(mock::available_exams().remove(0)));
        shell.apply(Action::CancelExam);
        assert_eq!(shell.view, View::StudentDashboard);
        assert!(shell.selected_exam.is_none());
    }

    #[test]
    fn test_admin_detail_roundtrip() {
        let mut shell = Shell::start(Some(User::new("a", "A").admin()));
        shell.apply(Action::ViewExamDetails("exam002".into()));
        assert_eq!(shell.view, View::ExamDetail);
        assert_eq!(shell.selected_exam_id.as_deref(), Some("exam002"));
        shell.apply(Action::BackToAdmin);
        assert_eq!(shell.view, View::AdminDashboard);
        assert!(shell.selected_exam_id.is_none());
    }

    #[test]
    fn test_gat_navigation() {
        let mut shell = Shell::default();
        shell.apply(Action::GatNavigate(Subject::Arabic, GatAction::Exam));
        assert_eq!(shell.view, View::GatExam);
        assert_eq!(shell.gat_mode, Some(Subject::Arabic));

        shell.apply(Action::GatNavigate(Subject::Math, GatAction::Train));
        assert_eq!(shell.view, View::GatTraining);
        assert_eq!(shell.gat_action, Some(GatAction::Train));
    }

    #[test]
    fn test_unknown_view_name_falls_back_to_login() {
        assert_eq!(View::parse("settings"), View::Login);
        assert_eq!(View::parse("gatTraining"), View::GatTraining);
    }

    #[test]
    fn test_dispatch_writes_and_clears_session() {
        let store = MemoryStore::new();
        let session = SessionStore::new(&store);
        let mut shell = Shell::restore(&session);
        assert_eq!(shell.view, View::Login);

        let user = User::new("9", "Noor").root();
        shell.dispatch(Action::Login(user.clone()), &session).unwrap();
        assert_eq!(session.restore().unwrap(), Some(user.clone()));

        // A fresh shell picks the stored session up.
        let restored = Shell::restore(&session);
        assert_eq!(restored.view, View::AdminDashboard);
        assert_eq!(restored.user, Some(user));

        shell.dispatch(Action::Logout, &session).unwrap();
        assert_eq!(shell, Shell::default());
        assert!(store.get(crate::storage::USER_KEY).is_none());
    }

    #[test]
    fn test_restore_discards_malformed_session() {
        let store = MemoryStore::new();
        store.set(crate::storage::USER_KEY, "{\"id\":");
        let shell = Shell::restore(&SessionStore::new(&store));
        assert_eq!(shell.view, View::Login);
        assert!(store.get(crate::storage::USER_KEY).is_none());
    }
}
