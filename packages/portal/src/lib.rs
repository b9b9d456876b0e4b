pub mod admin;
pub mod announcements;
pub mod config;
pub mod error;
pub mod exams;
pub mod gat;
pub mod i18n;
pub mod mock;
pub mod models;
pub mod question_bank;
pub mod router;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use announcements::AnnouncementBoard;
pub use config::PortalConfig;
pub use error::{Error, Result, ValidationError};
pub use exams::ExamSession;
pub use i18n::{Language, Preferences};
pub use models::{Announcement, Exam, ExamResult, GatQuestion, GatTopic, User};
pub use question_bank::QuestionBank;
pub use router::{Action, Shell, View};
pub use session::SessionStore;
pub use storage::KeyValueStore;
