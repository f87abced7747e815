use rand::{rng, Rng};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of choices an authored question carries.
pub const CHOICES_PER_QUESTION: usize = 4;

/// One quiz item. Serialized as `{id, question, choices, correctIndex}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub choices: Vec<String>,
    /// `None` for imported questions whose index is absent or not a
    /// non-negative integer. Such a question never grades as correct.
    #[serde(default, rename = "correctIndex")]
    pub correct_index: Option<usize>,
}

impl Question {
    pub fn is_correct(&self, choice_index: usize) -> bool {
        self.correct_index == Some(choice_index)
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.correct_index
            .and_then(|index| self.choices.get(index))
            .map(String::as_str)
    }

    /// `Q<n>: <text>` line used by listings, `n` being 1-based.
    pub fn headline(&self, position: usize) -> String {
        format!("Q{}: {}", position + 1, self.question)
    }
}

/// Hands out question ids.
///
/// Ids combine base-36 wall-clock millis, a monotonic sequence number and a
/// random salt, so two ids minted in the same millisecond still differ.
#[derive(Debug, Default)]
pub struct IdGenerator {
    sequence: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let sequence = self.sequence;
        self.sequence += 1;
        let salt: u32 = rng().random();
        format!("{}-{}-{:08x}", base36(millis), sequence, salt)
    }
}

fn base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(char::from(DIGITS[(value % 36) as usize]));
        value /= 36;
    }
    out.iter().rev().collect::<String>()
}
