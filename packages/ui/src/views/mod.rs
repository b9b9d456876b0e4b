mod modal_overlay;
pub use modal_overlay::{AlertDialog, ConfirmDialog, ModalOverlay};

mod header;
pub use header::{AppHeader, AppearanceToggles};

pub mod admin;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod exam_detail;
pub use exam_detail::ExamDetailView;

mod exam_intro;
pub use exam_intro::{ExamIntroView, MissingExam};

mod exam_question;
pub use exam_question::ExamQuestionView;

mod exam_results;
pub use exam_results::ExamResultsView;

mod gat_exam;
pub use gat_exam::GatExamView;

mod gat_training;
pub use gat_training::GatTrainingView;

mod login;
pub use login::LoginView;

mod student_dashboard;
pub use student_dashboard::StudentDashboardView;

mod shell;
pub use shell::Portal;
