use std::time::Duration;

use dioxus::prelude::*;
use portal::exams::StudentDashboardData;
use portal::gat::GatAction;
use portal::models::Subject;
use portal::{Action, AnnouncementBoard};

use crate::activity_log::use_activity_log;
use crate::context::{navigate, use_config, use_prefs, use_shell};
use crate::icons::{FaBookOpen, FaCalculator, FaClock, FaGraduationCap};
use crate::timer::sleep;
use crate::views::AppHeader;
use crate::Icon;

#[component]
pub fn StudentDashboardView() -> Element {
    let prefs = use_prefs()();
    let shell = use_shell();
    let config = use_config();
    let log = use_activity_log();
    let mut data = use_signal(|| Option::<StudentDashboardData>::None);
    let announcements = use_hook(|| {
        AnnouncementBoard::default()
            .published()
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    // Simulated fetch; the task dies with the component.
    use_hook(move || {
        let delay = u64::from(config.peek().dashboard.load_delay_ms);
        spawn(async move {
            sleep(Duration::from_millis(delay)).await;
            let user = shell.peek().user.clone();
            if let Some(user) = user {
                data.set(Some(StudentDashboardData::load(&user)));
            }
        })
    });

    let title = prefs.t("Student Dashboard").to_string();

    let Some(loaded) = data() else {
        return rsx! {
            AppHeader { title }
            div { class: "loading", {prefs.t("Loading...")} }
        };
    };
    let info = loaded.info;
    let organizer = prefs.t("Organizer");
    let end_date = prefs.t("End Date");
    let tips = prefs.t("Tips for Success");
    let gat_cards: Vec<(Subject, &str, &str)> = Subject::ALL
        .into_iter()
        .map(|s| (s, s.as_str(), prefs.t(s.label())))
        .collect();

    rsx! {
        AppHeader { title }
        main {
            class: "dashboard student-dashboard",

            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("Student Information")} }
                div {
                    class: "info-grid",
                    div { span { class: "muted", {prefs.t("Name")} } p { "{info.name}" } }
                    div { span { class: "muted", {prefs.t("ID")} } p { "{info.id}" } }
                    div { span { class: "muted", {prefs.t("Exams Taken")} } p { "{info.total_exams_taken}" } }
                    div { span { class: "muted", {prefs.t("Avg. Score")} } p { "{info.average_score}%" } }
                    div { span { class: "muted", {prefs.t("Last Login")} } p { "{info.last_login}" } }
                }
            }

            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("Available Exams")} }
                if loaded.available.is_empty() {
                    div {
                        class: "empty-state",
                        p { {prefs.t("No available exams at the moment")} }
                        p { class: "muted", {prefs.t("Check back later for upcoming exams")} }
                    }
                }
                div {
                    class: "exam-grid",
                    for exam in loaded.available {
                        div {
                            key: "{exam.id}",
                            class: "exam-card",
                            h3 { "{exam.name}" }
                            p { class: "muted", "{organizer}: {exam.organizer}" }
                            p {
                                Icon { icon: FaClock, width: 12, height: 12 }
                                " {exam.duration} min · {exam.question_count} Q"
                            }
                            p { class: "muted", "{end_date}: {exam.end_date}" }
                            button {
                                class: "btn btn-primary",
                                onclick: {
                                    let exam = exam.clone();
                                    move |_| navigate(shell, log, Action::StartExam(exam.clone()))
                                },
                                {prefs.t("Start")}
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("GAT Training")} }
                div {
                    class: "gat-grid",
                    for (subject, key, label) in gat_cards {
                        div {
                            key: "{key}",
                            class: "gat-card",
                            h3 {
                                if subject == Subject::Math {
                                    Icon { icon: FaCalculator, width: 16, height: 16 }
                                } else {
                                    Icon { icon: FaBookOpen, width: 16, height: 16 }
                                }
                                " {label}"
                            }
                            div {
                                class: "gat-card-actions",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| navigate(shell, log, Action::GatNavigate(subject, GatAction::Train)),
                                    {prefs.t("Train")}
                                }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| navigate(shell, log, Action::GatNavigate(subject, GatAction::Exam)),
                                    {prefs.t("Exam")}
                                }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("Past Exams")} }
                table {
                    class: "table",
                    thead {
                        tr {
                            th { {prefs.t("Name")} }
                            th { {prefs.t("Date")} }
                            th { "%" }
                            th { {prefs.t("correct")} }
                        }
                    }
                    tbody {
                        for result in loaded.past {
                            tr {
                                key: "{result.id}",
                                td { "{result.name}" }
                                td { "{result.date}" }
                                td { "{result.score}%" }
                                td { "{result.correct_answers}/{result.total_questions}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "card",
                h2 { class: "section-title", {prefs.t("Announcements")} }
                for item in announcements {
                    article {
                        key: "{item.id}",
                        class: "announcement",
                        div {
                            class: "announcement-meta",
                            span { class: "badge", {prefs.t(item.category.label())} }
                            if item.is_new {
                                span { class: "badge badge-new", "NEW" }
                            }
                            span { class: "muted", "{item.date}" }
                        }
                        h3 { {prefs.t(&item.title)} }
                        p { {prefs.t(&item.content)} }
                    }
                }
            }

            section {
                class: "card",
                h2 {
                    class: "section-title",
                    Icon { icon: FaGraduationCap, width: 16, height: 16 }
                    " {tips}"
                }
                ul {
                    li { {prefs.t("Read all instructions carefully before starting an exam")} }
                    li { {prefs.t("Make sure you have a stable internet connection")} }
                    li { {prefs.t("Use the GAT Training modules to prepare for your exams")} }
                }
            }
        }
    }
}
