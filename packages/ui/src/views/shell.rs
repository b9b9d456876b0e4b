use dioxus::prelude::*;
use portal::View;

use crate::activity_log_panel::ActivityLogPanel;
use crate::context::use_shell;
use crate::views::{
    AdminDashboardView, ExamDetailView, ExamIntroView, ExamQuestionView, ExamResultsView,
    GatExamView, GatTrainingView, LoginView, StudentDashboardView,
};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Renders the view selected by the shell state.
#[component]
pub fn Portal() -> Element {
    let shell = use_shell();
    let view = shell().view;

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }
        {match view {
            View::Login => rsx! { LoginView {} },
            View::StudentDashboard => rsx! { StudentDashboardView {} },
            View::ExamIntro => rsx! { ExamIntroView {} },
            View::ExamQuestion => rsx! { ExamQuestionView {} },
            View::ExamResults => rsx! { ExamResultsView {} },
            View::AdminDashboard => rsx! { AdminDashboardView {} },
            View::ExamDetail => rsx! { ExamDetailView {} },
            View::GatExam => rsx! { GatExamView {} },
            View::GatTraining => rsx! { GatTrainingView {} },
        }}
        ActivityLogPanel {}
    }
}
