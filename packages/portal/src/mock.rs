//! Built-in mock data. Every tab clones what it needs on mount and never
//! writes back here.

use chrono::NaiveDate;

use crate::models::{
    AnswerOption, Announcement, Category, Difficulty, Exam, ExamResult, GatQuestion, GatTopic,
    Subject,
};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

pub fn topics() -> Vec<GatTopic> {
    [
        ("topic1", "Algebra", 42),
        ("topic2", "Geometry", 35),
        ("topic3", "Calculus", 28),
        ("topic4", "Statistics", 21),
        ("topic5", "Trigonometry", 19),
        ("topic6", "Grammar", 32),
        ("topic7", "Vocabulary", 27),
        ("topic8", "Reading Comprehension", 24),
        ("topic9", "Syntax", 18),
        ("topic10", "Literary Analysis", 15),
    ]
    .into_iter()
    .map(|(id, name, count)| GatTopic {
        id: id.to_string(),
        name: name.to_string(),
        count,
    })
    .collect()
}

fn options(texts: [&str; 4], correct: usize) -> Vec<AnswerOption> {
    ["a", "b", "c", "d"]
        .into_iter()
        .zip(texts)
        .enumerate()
        .map(|(i, (id, text))| AnswerOption {
            id: id.to_string(),
            text: text.to_string(),
            is_correct: i == correct,
        })
        .collect()
}

pub fn questions() -> Vec<GatQuestion> {
    vec![
        GatQuestion {
            id: "q1".into(),
            topic: "topic1".into(),
            difficulty: Difficulty::Easy,
            subject: Subject::Math,
            bank_number: 1,
            text: "If x + 3 = 7, what is the value of x?".into(),
            options: options(["2", "3", "4", "5"], 2),
            image_url: None,
        },
        GatQuestion {
            id: "q2".into(),
            topic: "topic2".into(),
            difficulty: Difficulty::Medium,
            subject: Subject::Math,
            bank_number: 2,
            text: "What is the area of a circle with radius 5?".into(),
            options: options(["25π", "10π", "5π", "15π"], 0),
            image_url: None,
        },
        GatQuestion {
            id: "q3".into(),
            topic: "topic3".into(),
            difficulty: Difficulty::Hard,
            subject: Subject::Math,
            bank_number: 3,
            text: "Find the derivative of f(x) = x³ + 2x² - 5x + 3".into(),
            options: options(
                ["3x² + 4x - 5", "3x² + 2x - 5", "3x² + 4x - 1", "2x² + 4x - 5"],
                0,
            ),
            image_url: None,
        },
        GatQuestion {
            id: "q4".into(),
            topic: "topic6".into(),
            difficulty: Difficulty::Medium,
            subject: Subject::Arabic,
            bank_number: 1,
            text: "أي مما يلي هو استخدام صحيح للضمير؟".into(),
            options: options(
                [
                    "أنا ذهبت إلى المدرسة",
                    "أنا ذهبتُ إلى المدرسة",
                    "أنا ذهبتِ إلى المدرسة",
                    "أنا ذهبوا إلى المدرسة",
                ],
                1,
            ),
            image_url: None,
        },
    ]
}

pub fn announcements() -> Vec<Announcement> {
    let entry = |id: &str,
                 title: &str,
                 content: &str,
                 date: NaiveDate,
                 category: Category,
                 is_published: bool,
                 is_new: bool,
                 author: &str| Announcement {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date,
        category,
        is_published,
        is_new,
        author: author.to_string(),
    };

    vec![
        entry(
            "1",
            "GAT preparation workshops will be held this weekend",
            "We are hosting a series of GAT preparation workshops this weekend. The sessions will cover key topics and strategies for success. Register now to secure your spot!",
            date(2025, 3, 8),
            Category::General,
            true,
            true,
            "Admin",
        ),
        entry(
            "2",
            "New practice exams have been added to the system",
            "We have added several new practice exams to the system. These cover a wide range of topics and difficulty levels to help you prepare for your upcoming tests.",
            date(2025, 3, 7),
            Category::NewFeature,
            true,
            true,
            "Admin",
        ),
        entry(
            "3",
            "System will be under maintenance on Friday night from 11 PM to 2 AM",
            "Our system will be undergoing scheduled maintenance this Friday night from 11 PM to 2 AM. During this time, the platform may be temporarily unavailable. We apologize for any inconvenience this may cause.",
            date(2025, 3, 5),
            Category::SystemMaintenance,
            true,
            false,
            "System",
        ),
        entry(
            "4",
            "The new GAT Training module is now available",
            "We are excited to announce that our new GAT Training module is now available! This comprehensive module includes practice questions, study guides, and performance tracking to help you excel in your exams.",
            date(2025, 3, 1),
            Category::NewFeature,
            true,
            false,
            "Admin",
        ),
        entry(
            "5",
            "Draft announcement - not published",
            "This is a draft announcement that has not been published yet. Only administrators can see this.",
            date(2025, 3, 10),
            Category::General,
            false,
            false,
            "Admin",
        ),
    ]
}

pub fn available_exams() -> Vec<Exam> {
    vec![
        Exam {
            id: "exam001".into(),
            name: "Introduction to Computer Science".into(),
            organizer: "Prof. Smith".into(),
            end_date: date(2025, 3, 15),
            added_date: date(2025, 2, 10),
            duration: 60,
            question_count: 20,
        },
        Exam {
            id: "exam002".into(),
            name: "Data Structures and Algorithms".into(),
            organizer: "Prof. Johnson".into(),
            end_date: date(2025, 3, 20),
            added_date: date(2025, 2, 15),
            duration: 90,
            question_count: 30,
        },
    ]
}

pub fn past_exams() -> Vec<ExamResult> {
    vec![
        ExamResult {
            id: "past001".into(),
            name: "Basic Mathematics".into(),
            date: date(2025, 1, 15),
            score: 82,
            total_questions: 25,
            correct_answers: 20,
        },
        ExamResult {
            id: "past002".into(),
            name: "Programming Fundamentals".into(),
            date: date(2025, 2, 1),
            score: 75,
            total_questions: 20,
            correct_answers: 15,
        },
        ExamResult {
            id: "past003".into(),
            name: "Web Development Basics".into(),
            date: date(2025, 2, 20),
            score: 88,
            total_questions: 30,
            correct_answers: 26,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_questions_have_one_correct_option() {
        for q in questions() {
            assert_eq!(q.options.len(), 4, "{}", q.id);
            assert_eq!(q.correct_options().count(), 1, "{}", q.id);
        }
    }

    #[test]
    fn test_mock_questions_reference_known_topics() {
        let topics = topics();
        for q in questions() {
            assert!(topics.iter().any(|t| t.id == q.topic), "{}", q.topic);
        }
    }
}
