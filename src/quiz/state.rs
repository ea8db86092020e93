use crate::kana::KanaEntry;

/// Result message shown after an answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub correct: bool,
    pub visible: bool,
}

/// Observable quiz state. The engine owns the live copy; readers get clones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current_question: Option<KanaEntry>,
    /// Options in display order (multiple-choice only, but always kept current).
    pub options: Vec<String>,
    pub score: u32,
    pub is_loading: bool,
    pub feedback: Feedback,
}

/// Logical state of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A question is waiting for an answer.
    Ready,
    /// The next question is being prepared.
    Loading,
    /// An answer was just submitted and its result is on screen.
    Feedback,
}

impl QuizState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else if self.feedback.visible {
            Phase::Feedback
        } else {
            Phase::Ready
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_precedence() {
        let mut state = QuizState::default();
        assert_eq!(state.phase(), Phase::Ready);

        state.feedback.visible = true;
        assert_eq!(state.phase(), Phase::Feedback);

        state.is_loading = true;
        assert_eq!(state.phase(), Phase::Loading);
    }
}
