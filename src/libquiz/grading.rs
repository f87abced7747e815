use log::debug;
use std::fmt;

use crate::store::QuizStore;

/// The student's recorded choice for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub selected_index: usize,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub total: usize,
    pub correct_count: usize,
    pub percent: u32,
}

/// Performance band for a percentage. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl Band {
    pub fn for_percent(percent: u32) -> Self {
        match percent {
            90.. => Band::Excellent,
            75..=89 => Band::Good,
            50..=74 => Band::Average,
            _ => Band::NeedsImprovement,
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Average => "Average",
            Band::NeedsImprovement => "Needs Improvement",
        })
    }
}

impl Score {
    pub fn new(total: usize, correct_count: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (correct_count as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            correct_count,
            percent,
        }
    }

    pub fn band(&self) -> Option<Band> {
        (self.total > 0).then(|| Band::for_percent(self.percent))
    }

    pub fn summary(&self) -> String {
        match self.band() {
            None => "No questions in the quiz.".to_string(),
            Some(band) => format!(
                "{}/{} correct — {}% — {}",
                self.correct_count, self.total, self.percent, band
            ),
        }
    }
}

impl QuizStore {
    /// Records the student's choice, replacing any earlier one. Unknown ids
    /// are recorded as incorrect.
    pub fn select_answer(&mut self, question_id: &str, choice_index: usize) -> AnswerRecord {
        let correct = self
            .question(question_id)
            .is_some_and(|q| q.is_correct(choice_index));
        let record = AnswerRecord {
            selected_index: choice_index,
            correct,
        };
        debug!("[Grading] {} -> {:?}", question_id, record);
        self.answers.insert(question_id.to_string(), record);
        record
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerRecord> {
        self.answers.get(question_id)
    }

    /// Answers for questions no longer in the quiz are ignored.
    pub fn compute_score(&self) -> Score {
        let correct_count = self
            .quiz
            .iter()
            .filter(|q| self.answers.get(&q.id).is_some_and(|a| a.correct))
            .count();
        Score::new(self.quiz.len(), correct_count)
    }

    pub fn performance_summary(&self) -> String {
        self.compute_score().summary()
    }

    pub fn reset_answers(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arithmetic_quiz() -> (QuizStore, String) {
        let mut store = QuizStore::new();
        let id = store
            .add_question("2+2?", ["3", "4", "5", "6"].map(String::from), 1)
            .unwrap()
            .id
            .clone();
        (store, id)
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let store = QuizStore::new();
        assert_eq!(store.compute_score(), Score::default());
        assert_eq!(store.performance_summary(), "No questions in the quiz.");
    }

    #[test]
    fn right_answer_is_excellent() {
        let (mut store, id) = arithmetic_quiz();
        assert!(store.select_answer(&id, 1).correct);
        assert_eq!(
            store.compute_score(),
            Score {
                total: 1,
                correct_count: 1,
                percent: 100
            }
        );
        assert_eq!(store.performance_summary(), "1/1 correct — 100% — Excellent");
    }

    #[test]
    fn wrong_answer_needs_improvement() {
        let (mut store, id) = arithmetic_quiz();
        store.select_answer(&id, 0);
        let score = store.compute_score();
        assert_eq!(score.correct_count, 0);
        assert_eq!(score.percent, 0);
        assert_eq!(score.band(), Some(Band::NeedsImprovement));
    }

    #[test]
    fn reselecting_overwrites() {
        let (mut store, id) = arithmetic_quiz();
        store.select_answer(&id, 0);
        store.select_answer(&id, 1);
        assert_eq!(
            store.answer(&id),
            Some(&AnswerRecord {
                selected_index: 1,
                correct: true
            })
        );
        store.select_answer(&id, 3);
        assert_eq!(store.compute_score().correct_count, 0);
    }

    #[test]
    fn unknown_question_is_recorded_as_incorrect() {
        let (mut store, _) = arithmetic_quiz();
        let record = store.select_answer("ghost", 1);
        assert!(!record.correct);
        assert_eq!(store.answer("ghost").map(|a| a.selected_index), Some(1));
        assert_eq!(store.compute_score().correct_count, 0);
    }

    #[test]
    fn orphaned_answers_are_ignored() {
        let (mut store, id) = arithmetic_quiz();
        store.select_answer(&id, 1);
        store.delete_question(&id, |_| true);
        assert_eq!(store.compute_score(), Score::default());
        assert!(store.answer(&id).is_some());
    }

    #[test]
    fn reset_keeps_questions() {
        let (mut store, id) = arithmetic_quiz();
        store.select_answer(&id, 1);
        store.reset_answers();
        assert!(store.answer(&id).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.compute_score().correct_count, 0);
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(Band::for_percent(100), Band::Excellent);
        assert_eq!(Band::for_percent(90), Band::Excellent);
        assert_eq!(Band::for_percent(89), Band::Good);
        assert_eq!(Band::for_percent(75), Band::Good);
        assert_eq!(Band::for_percent(74), Band::Average);
        assert_eq!(Band::for_percent(50), Band::Average);
        assert_eq!(Band::for_percent(49), Band::NeedsImprovement);
        assert_eq!(Band::for_percent(0), Band::NeedsImprovement);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(Score::new(3, 2).percent, 67);
        assert_eq!(Score::new(3, 1).percent, 33);
        assert_eq!(Score::new(8, 1).percent, 13);
        assert_eq!(Score::new(4, 3).summary(), "3/4 correct — 75% — Good");
        assert_eq!(Score::new(2, 1).summary(), "1/2 correct — 50% — Average");
    }
}
