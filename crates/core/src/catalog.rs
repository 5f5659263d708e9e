//! Question sequences per subject.

use std::collections::HashMap;

use crate::model::{Illustration, Question, QuestionError, Subject};

/// Fixed, ordered question sequences keyed by subject, plus one preview
/// question per subject for the Learn page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sequences: HashMap<Subject, Vec<Question>>,
    examples: HashMap<Subject, Question>,
}

impl Catalog {
    /// An empty catalog. Subjects without a sequence cannot be started.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sequence(mut self, subject: Subject, questions: Vec<Question>) -> Self {
        self.sequences.insert(subject, questions);
        self
    }

    #[must_use]
    pub fn with_example(mut self, subject: Subject, question: Question) -> Self {
        self.examples.insert(subject, question);
        self
    }

    /// The ordered sequence for `subject`; empty if none was registered.
    #[must_use]
    pub fn sequence(&self, subject: Subject) -> &[Question] {
        self.sequences.get(&subject).map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn question(&self, subject: Subject, index: usize) -> Option<&Question> {
        self.sequence(subject).get(index)
    }

    #[must_use]
    pub fn example(&self, subject: Subject) -> Option<&Question> {
        self.examples.get(&subject)
    }

    /// The questions shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a built-in question fails validation.
    pub fn builtin() -> Result<Self, QuestionError> {
        let math = vec![
            Question::choice("What is 2 + 3?", ["4", "5", "6"], "5")?
                .with_illustration(Illustration::parse(MATH_IMG)?),
            Question::choice("What is 7 - 4?", ["2", "3", "4"], "3")?
                .with_illustration(Illustration::parse(CIRCUIT_IMG)?),
        ];
        let english = vec![
            Question::text(
                SPELL_PROMPT,
                "cat",
                Some("This is a cute animal!".to_string()),
            )?
            .with_illustration(Illustration::parse(CAT_IMG)?),
            Question::text(
                SPELL_PROMPT,
                "ear",
                Some("A three-letter word from the word LEARN.".to_string()),
            )?
            .with_illustration(Illustration::parse(EAR_IMG)?),
        ];
        let plant = Question::choice(PLANT_PROMPT, ["Stem", "Root", "Leaf"], "Root")?
            .with_illustration(Illustration::parse(PLANT_IMG)?);
        let science = vec![
            plant.clone(),
            Question::choice("What animal is in this picture?", ["Sheep", "Dog", "Cat"], "Sheep")?
                .with_illustration(Illustration::parse(SHEEP_IMG)?),
        ];

        let math_example = Question::choice("What is 5 + 2?", ["6", "7", "8"], "7")?
            .with_illustration(Illustration::parse(MATH_IMG)?);
        let english_example = Question::text(SPELL_PROMPT, "cat", Some("This is a cute animal!".to_string()))?
            .with_illustration(Illustration::parse(CAT_IMG)?);

        Ok(Self::new()
            .with_sequence(Subject::Math, math)
            .with_sequence(Subject::English, english)
            .with_sequence(Subject::Science, science)
            .with_example(Subject::Math, math_example)
            .with_example(Subject::English, english_example)
            .with_example(Subject::Science, plant))
    }
}

const SPELL_PROMPT: &str = "Spell the word in the picture.";
const PLANT_PROMPT: &str = "Which part of the plant is shown in this image?";

const MATH_IMG: &str =
    "https://images.unsplash.com/photo-1581090464777-f3220bbe1b8b?auto=format&fit=crop&w=400&q=80";
const CIRCUIT_IMG: &str =
    "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=400&q=80";
const CAT_IMG: &str =
    "https://images.unsplash.com/photo-1582562124811-c09040d0a901?auto=format&fit=crop&w=800&q=80";
const PLANT_IMG: &str =
    "https://images.unsplash.com/photo-1615729947596-a598e5de0ab3?auto=format&fit=crop&w=400&q=80";
const SHEEP_IMG: &str =
    "https://images.unsplash.com/photo-1517022812141-23620dba5c23?auto=format&fit=crop&w=800&q=80";
/// Bundled with the ui crate under `assets/`.
const EAR_IMG: &str = "/assets/ear.svg";
