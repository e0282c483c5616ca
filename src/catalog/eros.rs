//! Dual control model quiz and trigger tags.
//!
//! Accelerator (SES) and brake (SIS) are measured independently; an option
//! scores `(accelerator, brake)` and never mixes turn-ons with turn-offs.
//! All weights are non-negative.

use super::models::{QuizQuestion, WeightedOption};

pub static EROS_QUIZ: &[QuizQuestion<2>] = &[
    QuizQuestion {
        id: "eros_01",
        question: "How stress (work, money) affects desire:",
        options: &[
            WeightedOption {
                text: "Stress kills my libido completely.",
                weights: [0.0, 1.0],
            },
            WeightedOption {
                text: "Sex helps me relax.",
                weights: [0.5, 0.0],
            },
            WeightedOption {
                text: "It depends on how stressed I am.",
                weights: [0.0, 0.5],
            },
        ],
    },
    QuizQuestion {
        id: "eros_02",
        question: "Spontaneous arousal:",
        options: &[
            WeightedOption {
                text: "I often feel aroused out of nowhere.",
                weights: [1.0, 0.0],
            },
            WeightedOption {
                text: "I need context (romance) to feel desire.",
                weights: [0.3, 0.0],
            },
            WeightedOption {
                text: "I rarely think about sex until my partner initiates.",
                weights: [0.0, 0.0],
            },
        ],
    },
];

/// Trigger tags offered to the respondent.  Informational only: selected
/// tags are stored as given.
pub static EROS_TAGS: &[&str] = &[
    "Intellect (Sapiosexual)",
    "Emotions (Demisexual)",
    "Power/Pain (Kinky)",
    "Sensory",
    "Visual",
    "Service",
];
