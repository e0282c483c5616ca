//! Attachment (shadow) quiz.
//!
//! Each question presents separation distress or conflict; attachment
//! systems stay dormant in calm water.  Option scores are one-hot over
//! `(secure, anxious, avoidant)`.

use super::models::{QuizQuestion, WeightedOption};

const SECURE: [f64; 3] = [1.0, 0.0, 0.0];
const ANXIOUS: [f64; 3] = [0.0, 1.0, 0.0];
const AVOIDANT: [f64; 3] = [0.0, 0.0, 1.0];

pub static ATTACHMENT_QUIZ: &[QuizQuestion<3>] = &[
    QuizQuestion {
        id: "att_01",
        question: "When your partner acts cold or distant:",
        options: &[
            WeightedOption {
                text: "I panic and try to find out what happened right away.",
                weights: ANXIOUS,
            },
            WeightedOption {
                text: "I do not care. I get on with my own things.",
                weights: AVOIDANT,
            },
            WeightedOption {
                text: "I ask whether everything is alright, then give them space.",
                weights: SECURE,
            },
        ],
    },
    QuizQuestion {
        id: "att_02",
        question: "How do you feel about depending on a partner?",
        options: &[
            WeightedOption {
                text: "I am afraid to depend on anyone. I have to be self-sufficient.",
                weights: AVOIDANT,
            },
            WeightedOption {
                text: "I want to merge with my partner into one whole.",
                weights: ANXIOUS,
            },
            WeightedOption {
                text: "I am comfortable relying on my partner.",
                weights: SECURE,
            },
        ],
    },
    QuizQuestion {
        id: "att_03",
        question: "During a serious conflict:",
        options: &[
            WeightedOption {
                text: "I want to run or go quiet so as not to make it worse.",
                weights: AVOIDANT,
            },
            WeightedOption {
                text: "I cannot calm down until we resolve everything. I may shout.",
                weights: ANXIOUS,
            },
            WeightedOption {
                text: "We can pause, and I know we will come back to the conversation.",
                weights: SECURE,
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_one_hot() {
        for q in ATTACHMENT_QUIZ {
            assert_eq!(q.options.len(), 3);
            let mut covered = [0.0; 3];
            for o in q.options {
                let sum: f64 = o.weights.iter().sum();
                assert_eq!(sum, 1.0, "{} option not normalized", q.id);
                for (c, w) in covered.iter_mut().zip(o.weights) {
                    *c += w;
                }
            }
            // every style is reachable from every question
            assert_eq!(covered, [1.0, 1.0, 1.0], "{} misses a style", q.id);
        }
    }
}
