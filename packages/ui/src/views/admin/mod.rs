//! Admin dashboard tabs. Each tab seeds its own copy of the mock data on
//! mount and drops it on unmount.

mod admin_management;
pub use admin_management::AdminManagementTab;

mod announcements;
pub use announcements::AnnouncementsTab;

mod create_exam;
pub use create_exam::CreateExamTab;

mod exam_scores;
pub use exam_scores::ExamScoresTab;

mod gat_bank;
pub use gat_bank::GatBankTab;

mod students;
pub use students::StudentsTab;
