use dioxus::prelude::*;
use portal::admin::{score_records, students, AdminTab, DashboardStats};
use portal::mock;

use crate::context::{use_prefs, use_shell};
use crate::views::admin::{
    AdminManagementTab, AnnouncementsTab, CreateExamTab, ExamScoresTab, GatBankTab, StudentsTab,
};
use crate::views::AppHeader;

#[component]
pub fn AdminDashboardView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let mut active = use_signal(AdminTab::default);
    let stats = use_hook(|| {
        DashboardStats::compute(&students(), &mock::available_exams(), &score_records())
    });

    let Some(user) = shell().user else {
        return rsx! {};
    };
    let tabs: Vec<(AdminTab, &str)> = AdminTab::visible_for(&user)
        .into_iter()
        .map(|tab| (tab, prefs.t(tab.label())))
        .collect();
    // A root tab stays out of reach for plain admins even if it was active.
    let current = if tabs.iter().any(|(tab, _)| *tab == active()) {
        active()
    } else {
        AdminTab::default()
    };

    rsx! {
        AppHeader { title: prefs.t("Admin Dashboard").to_string() }
        main {
            class: "dashboard admin-dashboard",
            div {
                class: "stat-grid",
                div { class: "stat-card", span { class: "muted", {prefs.t("Total Students")} } strong { "{stats.total_students}" } }
                div { class: "stat-card", span { class: "muted", {prefs.t("Active Exams")} } strong { "{stats.active_exams}" } }
                div { class: "stat-card", span { class: "muted", {prefs.t("Average Score")} } strong { "{stats.average_score}%" } }
            }
            nav {
                class: "tab-bar",
                for (tab, label) in tabs {
                    button {
                        class: if tab == current { "tab active" } else { "tab" },
                        onclick: move |_| active.set(tab),
                        "{label}"
                    }
                }
            }
            section {
                class: "card tab-panel",
                {match current {
                    AdminTab::Students => rsx! { StudentsTab {} },
                    AdminTab::ExamScores => rsx! { ExamScoresTab {} },
                    AdminTab::CreateExam => rsx! { CreateExamTab {} },
                    AdminTab::GatBank => rsx! { GatBankTab {} },
                    AdminTab::Announcements => rsx! { AnnouncementsTab {} },
                    AdminTab::AdminManagement => rsx! { AdminManagementTab {} },
                }}
            }
            footer { class: "muted app-footer", {prefs.t("Admin Portal v1.0")} }
        }
    }
}
