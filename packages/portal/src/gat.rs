//! # GAT pages: banks, exam setup and training board
//!
//! A *bank* groups four consecutive question slots. Slots run from 1 to
//! [`BANK_SLOTS`], so there are 25 banks: 1-4, 5-8, ... 97-100. A question's
//! `bankNumber` is a slot; [`bank_range`] maps it to the bank that contains it.

use rand::Rng;

use crate::models::{Difficulty, Subject};

pub const BANK_SLOTS: u32 = 100;
pub const BANK_SIZE: u32 = 4;

/// Exam facts shown on the GAT exam page.
pub const GAT_DURATION_MINUTES: u32 = 60;
pub const GAT_QUESTION_COUNT: u32 = 55;
pub const GAT_PASSING_SCORE: u32 = 70;

/// What the student chose on a GAT card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GatAction {
    Exam,
    Train,
}

/// First slot of every bank: 1, 5, 9, ...
pub fn bank_starts() -> impl Iterator<Item = u32> {
    (1..=BANK_SLOTS).step_by(BANK_SIZE as usize)
}

/// Inclusive slot range of the bank that holds `slot`.
pub fn bank_range(slot: u32) -> (u32, u32) {
    let start = (slot.max(1) - 1) / BANK_SIZE * BANK_SIZE + 1;
    (start, start + BANK_SIZE - 1)
}

/// `"Bank 5-8"` for any slot in 5..=8.
pub fn bank_label(slot: u32) -> String {
    let (lo, hi) = bank_range(slot);
    format!("Bank {lo}-{hi}")
}

/// Difficulty choice on the GAT exam page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExamDifficulty {
    Fixed(Difficulty),
    Random,
}

impl ExamDifficulty {
    pub const ALL: [ExamDifficulty; 4] = [
        ExamDifficulty::Fixed(Difficulty::Easy),
        ExamDifficulty::Fixed(Difficulty::Medium),
        ExamDifficulty::Fixed(Difficulty::Hard),
        ExamDifficulty::Random,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExamDifficulty::Fixed(d) => d.label(),
            ExamDifficulty::Random => "Random",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExamDifficulty::Fixed(d) => d.as_str(),
            ExamDifficulty::Random => "random",
        }
    }
}

/// Selection state of the GAT exam page.
#[derive(Clone, Debug, PartialEq)]
pub struct GatExamSetup {
    pub mode: Subject,
    pub selected: Option<ExamDifficulty>,
}

impl GatExamSetup {
    pub fn new(mode: Subject) -> Self {
        Self {
            mode,
            selected: None,
        }
    }

    pub fn select(&mut self, difficulty: ExamDifficulty) {
        self.selected = Some(difficulty);
    }

    pub fn can_start(&self) -> bool {
        self.selected.is_some()
    }

    /// Notice shown when the exam starts, or `None` while no difficulty is
    /// chosen.
    pub fn start_notice(&self) -> Option<String> {
        let difficulty = self.selected?;
        Some(format!(
            "Starting {} GAT exam with {} difficulty",
            self.mode.as_str(),
            difficulty.as_str()
        ))
    }
}

/// A previous GAT attempt shown in the history sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct GatAttempt {
    pub difficulty: Difficulty,
    pub score: u32,
    pub correct: u32,
    pub total: u32,
    pub minutes: u32,
}

pub fn attempt_history() -> Vec<GatAttempt> {
    vec![
        GatAttempt {
            difficulty: Difficulty::Medium,
            score: 82,
            correct: 45,
            total: GAT_QUESTION_COUNT,
            minutes: 48,
        },
        GatAttempt {
            difficulty: Difficulty::Hard,
            score: 73,
            correct: 40,
            total: GAT_QUESTION_COUNT,
            minutes: 55,
        },
        GatAttempt {
            difficulty: Difficulty::Easy,
            score: 91,
            correct: 50,
            total: GAT_QUESTION_COUNT,
            minutes: 42,
        },
    ]
}

/// Whether the training page lists banks to practice or to review.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrainingMode {
    #[default]
    Unsolved,
    Solved,
}

impl TrainingMode {
    pub fn toggled(self) -> Self {
        match self {
            TrainingMode::Unsolved => TrainingMode::Solved,
            TrainingMode::Solved => TrainingMode::Unsolved,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrainingMode::Unsolved => "Unsolved",
            TrainingMode::Solved => "Solved",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrainingMode::Unsolved => "unsolved",
            TrainingMode::Solved => "solved",
        }
    }
}

/// Progress of one training bank.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingBank {
    /// `"bank-5"`.
    pub id: String,
    pub start: u32,
    pub end: u32,
    pub completed: bool,
    /// Percent, 0..100.
    pub progress: u32,
}

impl TrainingBank {
    pub fn range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

/// The training page: banks with mock progress plus the view mode.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingBoard {
    pub mode: Subject,
    pub view_mode: TrainingMode,
    pub banks: Vec<TrainingBank>,
}

impl TrainingBoard {
    /// Build a board whose progress is drawn from `rng`. About four banks in
    /// ten come out completed.
    pub fn generate<R: Rng>(mode: Subject, rng: &mut R) -> Self {
        let banks = bank_starts()
            .map(|start| TrainingBank {
                id: format!("bank-{start}"),
                start,
                end: start + BANK_SIZE - 1,
                completed: rng.gen::<f64>() > 0.6,
                progress: rng.gen_range(0..100),
            })
            .collect();
        Self {
            mode,
            view_mode: TrainingMode::default(),
            banks,
        }
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    pub fn completed_count(&self) -> usize {
        self.banks.iter().filter(|b| b.completed).count()
    }

    /// Notice shown when a bank is opened.
    pub fn open_notice(&self, bank_id: &str) -> String {
        format!(
            "Opening question bank {bank_id} in {} mode",
            self.view_mode.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_bank_grouping() {
        let starts: Vec<u32> = bank_starts().collect();
        assert_eq!(starts.len(), 25);
        assert_eq!(starts.first(), Some(&1));
        assert_eq!(starts.last(), Some(&97));

        assert_eq!(bank_range(1), (1, 4));
        assert_eq!(bank_range(4), (1, 4));
        assert_eq!(bank_range(5), (5, 8));
        assert_eq!(bank_range(100), (97, 100));
        assert_eq!(bank_label(7), "Bank 5-8");
    }

    #[test]
    fn test_exam_setup_requires_difficulty() {
        let mut setup = GatExamSetup::new(Subject::Math);
        assert!(!setup.can_start());
        assert!(setup.start_notice().is_none());

        setup.select(ExamDifficulty::Random);
        assert!(setup.can_start());
        assert_eq!(
            setup.start_notice().as_deref(),
            Some("Starting math GAT exam with random difficulty")
        );

        setup.select(ExamDifficulty::Fixed(Difficulty::Hard));
        assert_eq!(setup.selected.map(|d| d.label()), Some("Hard"));
    }

    #[test]
    fn test_training_board() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut board = TrainingBoard::generate(Subject::Arabic, &mut rng);
        assert_eq!(board.banks.len(), 25);
        assert_eq!(board.banks[1].range(), "5-8");
        assert!(board.banks.iter().all(|b| b.progress < 100));
        assert!(board.completed_count() <= board.banks.len());

        assert_eq!(board.view_mode, TrainingMode::Unsolved);
        board.toggle_view_mode();
        assert_eq!(board.view_mode, TrainingMode::Solved);
        assert_eq!(
            board.open_notice("bank-5"),
            "Opening question bank bank-5 in solved mode"
        );
    }
}
