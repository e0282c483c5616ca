//! SRME forced-choice scenarios.
//!
//! Every scenario places the respondent in a deficit or a conflict and asks
//! what they choose when two needs clash.  Option weights are
//! `(safety, resource, resonance, expansion)`; a negative component is the
//! price of the trade-off.

use super::models::{Scenario, ScenarioOption};

const fn opt(text: &'static str, s: f64, r: f64, m: f64, e: f64) -> ScenarioOption {
    ScenarioOption {
        text,
        weights: [s, r, m, e],
    }
}

/// The full scenario catalog, in presentation order.
pub static SCENARIOS: &[Scenario] = &[
    // ── Conflict and safety ─────────────────────────────────────────────
    Scenario {
        id: "conf_01",
        question: "Tone of voice during an argument",
        description: "Sensory sensitivity and the need for emotional safety.",
        options: &[
            opt("I can only hear arguments if the voice stays calm. Shouting paralyses me.", 0.7, 0.0, 0.0, 0.0),
            opt("Emotions are normal. Shouting shows the other person cares.", 0.0, 0.0, 0.3, 0.2),
            opt("The tone irritates me, but I focus on the words to win the argument.", 0.0, 0.0, 0.5, 0.0),
        ],
    },
    Scenario {
        id: "conf_02",
        question: "Reconciliation strategy",
        description: "How connection is restored after a rupture.",
        options: &[
            opt("I need time alone (a day or more) to cool down.", 0.3, 0.0, -0.2, 0.2),
            opt("We should hug and reassure each other as soon as possible.", 0.6, 0.0, 0.2, 0.0),
            opt("We should analyse what happened and agree how to avoid it next time.", 0.0, 0.3, 0.5, 0.0),
        ],
    },
    Scenario {
        id: "conf_03",
        question: "Logic versus feelings",
        description: "The classic resonance versus safety dilemma.",
        options: &[
            opt("If I am logically right, my partner should admit it even if it hurts.", 0.0, 0.0, 0.7, 0.0),
            opt("Truth does not matter if it breaks us. Better to stay silent.", 0.6, 0.0, -0.2, 0.0),
            opt("I want my emotions validated, not a solution.", 0.4, 0.0, 0.4, 0.0),
        ],
    },
    Scenario {
        id: "conf_04",
        question: "Criticism in public",
        description: "Level of social safety.",
        options: &[
            opt("It is betrayal. We must be a united front.", 0.8, 0.0, 0.0, 0.0),
            opt("Unpleasant, but if the criticism is fair I will accept it.", 0.0, 0.0, 0.4, 0.0),
            opt("I turn it into a joke, it does not get to me.", 0.1, 0.0, 0.0, 0.3),
        ],
    },
    Scenario {
        id: "conf_05",
        question: "Past grievances",
        description: "Accumulating versus letting go.",
        options: &[
            opt("I often bring up old mistakes during new fights.", 0.4, 0.0, 0.0, -0.2),
            opt("Once resolved, it is forgotten. I do not carry baggage.", 0.0, 0.2, 0.3, 0.2),
            opt("I remember the facts to see patterns of behaviour.", 0.0, 0.0, 0.5, 0.0),
        ],
    },
    // ── Resource, household and executive function ──────────────────────
    Scenario {
        id: "res_01",
        question: "Budget allocation",
        description: "Financial safety versus spontaneity.",
        options: &[
            opt("We need a shared, explicit budget with expense tracking.", 0.3, 0.5, 0.0, 0.0),
            opt("As long as there is enough. I do not like counting pennies.", 0.0, -0.3, 0.0, 0.4),
            opt("I want my partner to take over finances, I am lost there.", 0.0, 0.8, 0.0, 0.0),
        ],
    },
    Scenario {
        id: "res_02",
        question: "Mess at home",
        description: "Sensitivity to entropy (relevant for ADHD/ASD).",
        options: &[
            opt("Visual noise (things lying around) makes me anxious or aggressive.", 0.2, 0.5, 0.0, 0.0),
            opt("I do not notice mess. It is creative chaos.", 0.0, -0.2, 0.0, 0.3),
            opt("I am ashamed of my mess and want help without reproach.", 0.2, 0.6, 0.0, 0.0),
        ],
    },
    Scenario {
        id: "res_03",
        question: "Planning a holiday",
        description: "Need for control versus adventure.",
        options: &[
            opt("I need the route, hotels and timing a month ahead.", 0.5, 0.3, 0.0, -0.3),
            opt("Tickets and backpacks, we will figure it out there.", 0.0, -0.2, 0.0, 0.8),
            opt("We research together and make a flexible plan.", 0.1, 0.1, 0.4, 0.2),
        ],
    },
    Scenario {
        id: "res_04",
        question: "Partner falls ill",
        description: "Caregiving style.",
        options: &[
            opt("I organise medicine, food and the doctor's appointment.", 0.0, 0.7, 0.0, 0.0),
            opt("I sit beside them, hold their hand and empathise.", 0.3, 0.0, 0.4, 0.0),
            opt("I get lost. I hope they tell me clearly what to do.", 0.0, 0.3, 0.0, 0.0),
        ],
    },
    Scenario {
        id: "res_05",
        question: "Making decisions",
        description: "Decision fatigue.",
        options: &[
            opt("I like to lead and decide for both of us.", 0.0, 0.4, 0.0, 0.3),
            opt("I hate choosing. I want my partner to just say where we are going.", 0.2, 0.7, 0.0, 0.0),
            opt("We must reach consensus, even if it takes three hours.", 0.0, 0.0, 0.6, 0.0),
        ],
    },
    // ── Closeness, resonance and communication ───────────────────────────
    Scenario {
        id: "res_deep_01",
        question: "The ideal evening of conversation",
        description: "Type of intellectual connection.",
        options: &[
            opt("Debating politics, science or philosophy until morning.", 0.0, 0.0, 0.8, 0.0),
            opt("Talking about our feelings, dreams and relationship.", 0.2, 0.0, 0.6, 0.0),
            opt("Being together in silence, each on our own device.", 0.3, 0.0, 0.2, 0.0),
        ],
    },
    Scenario {
        id: "res_deep_02",
        question: "Shared hobbies",
        description: "Importance of shared interests.",
        options: &[
            opt("We must share passions, otherwise what would we talk about?", 0.2, 0.0, 0.6, 0.0),
            opt("One likes football, the other opera. That is fine, we are different.", 0.0, 0.0, -0.2, 0.5),
            opt("I will try to love their hobby for their sake.", 0.4, 0.0, 0.2, 0.0),
        ],
    },
    Scenario {
        id: "res_deep_03",
        question: "Humour",
        description: "Synchronised sense of humour.",
        options: &[
            opt("If we do not laugh at the same memes, it is a failure.", 0.0, 0.0, 0.7, 0.0),
            opt("What matters is that jokes are not hurtful.", 0.4, 0.0, 0.0, 0.0),
            opt("I like dark or niche humour, my partner has to handle it.", 0.0, 0.0, 0.3, 0.3),
        ],
    },
    Scenario {
        id: "res_deep_04",
        question: "Emotional support for good news",
        description: "Capitalisation: the response to success.",
        options: &[
            opt("My partner should jump for joy with me.", 0.0, 0.0, 0.6, 0.2),
            opt("A simple 'well done' is enough.", 0.2, 0.0, 0.0, 0.0),
            opt("They should help me think through the next career steps.", 0.0, 0.4, 0.2, 0.0),
        ],
    },
    // ── Expansion, novelty and autonomy ──────────────────────────────────
    Scenario {
        id: "exp_01",
        question: "Routine",
        description: "Need for dopamine (relevant for high openness/ADHD).",
        options: &[
            opt("Stability is happiness. I love groundhog day.", 0.6, 0.0, 0.0, -0.5),
            opt("I wither and get depressed without new experiences.", 0.0, 0.0, 0.0, 0.8),
            opt("Routine is fine if we add micro-changes.", 0.2, 0.0, 0.2, 0.3),
        ],
    },
    Scenario {
        id: "exp_02",
        question: "Social activity",
        description: "Extraversion and social resource.",
        options: &[
            opt("We should go out or have guests every week.", 0.0, 0.0, 0.0, 0.6),
            opt("My home is my fortress. Guests only on holidays.", 0.4, 0.0, 0.0, -0.2),
            opt("I go out alone while my partner stays home, or the other way round.", 0.0, 0.0, 0.0, 0.5),
        ],
    },
    Scenario {
        id: "exp_03",
        question: "Career risk",
        description: "Safety versus growth.",
        options: &[
            opt("I would quit a stable job for a dream or a startup.", 0.0, -0.3, 0.0, 0.8),
            opt("A bird in the hand. The mortgage will not pay itself.", 0.5, 0.4, 0.0, -0.3),
            opt("Risk is possible if we have a financial cushion.", 0.2, 0.3, 0.0, 0.2),
        ],
    },
    Scenario {
        id: "exp_04",
        question: "Personal boundaries (passwords)",
        description: "Transparency versus privacy.",
        options: &[
            opt("We share passwords to everything. No secrets.", 0.6, 0.0, 0.0, -0.4),
            opt("My phone is my private territory. Hands off.", 0.0, 0.0, 0.0, 0.5),
            opt("I will give the password if asked, but checks offend me.", 0.2, 0.0, 0.3, 0.1),
        ],
    },
    Scenario {
        id: "exp_05",
        question: "Separate holidays",
        description: "Autonomy.",
        options: &[
            opt("It is the beginning of the end.", 0.5, 0.0, 0.0, -0.5),
            opt("Wonderful! We get to miss each other.", 0.0, 0.0, 0.0, 0.7),
            opt("Only if it is tied to a hobby or work, not just leisure.", 0.2, 0.0, 0.2, 0.0),
        ],
    },
    // ── Eros and embodiment ──────────────────────────────────────────────
    Scenario {
        id: "sex_01",
        question: "Initiative in sex",
        description: "Dynamics of desire.",
        options: &[
            opt("I need to feel desired (my partner initiates).", 0.4, 0.0, 0.2, 0.0),
            opt("I like to pursue and seduce.", 0.0, 0.0, 0.0, 0.5),
            opt("It should happen by itself, without planning.", 0.0, 0.0, 0.3, 0.2),
        ],
    },
    Scenario {
        id: "sex_02",
        question: "Experiments",
        description: "Novelty in bed.",
        options: &[
            opt("I know what I like. Why change what works?", 0.4, 0.0, 0.0, -0.2),
            opt("I want to try everything: toys, role play, places.", 0.0, 0.0, 0.0, 0.8),
            opt("I am open to new things if my partner introduces them slowly.", 0.2, 0.0, 0.3, 0.2),
        ],
    },
    Scenario {
        id: "sex_03",
        question: "After sex",
        description: "Aftercare needs.",
        options: &[
            opt("Hugs, talking, tenderness.", 0.5, 0.0, 0.3, 0.0),
            opt("Shower, food or sleep. The energy is spent.", 0.0, 0.2, 0.0, 0.0),
            opt("A surge of energy, I want to do something.", 0.0, 0.0, 0.0, 0.4),
        ],
    },
    Scenario {
        id: "sex_04",
        question: "Rejection",
        description: "Rejection sensitivity.",
        options: &[
            opt("When refused, I feel repulsive and unloved.", 0.7, 0.0, 0.0, 0.0),
            opt("No means no. We will try tomorrow.", 0.0, 0.0, 0.2, 0.0),
            opt("I try to persuade my partner or take offence.", 0.0, 0.0, 0.0, 0.3),
        ],
    },
    // ── Neurodivergence ──────────────────────────────────────────────────
    Scenario {
        id: "nd_01",
        question: "Body doubling",
        description: "Need for passive presence to be productive.",
        options: &[
            opt("Working or cleaning is easier when my partner just sits nearby.", 0.0, 0.7, 0.3, 0.0),
            opt("When someone watches me work, I cannot do anything.", 0.3, 0.0, 0.0, 0.2),
            opt("I do not care, I can focus anywhere.", 0.0, 0.1, 0.0, 0.0),
        ],
    },
    Scenario {
        id: "nd_02",
        question: "Sensory overload",
        description: "Response to overstimulation.",
        options: &[
            opt("When overloaded, nobody may touch me.", 0.5, 0.0, 0.0, 0.0),
            opt("I need deep pressure (a firm hug) to ground myself.", 0.4, 0.0, 0.4, 0.0),
            opt("I need a distraction: video games, scrolling.", 0.0, 0.0, 0.0, 0.3),
        ],
    },
    Scenario {
        id: "nd_03",
        question: "Forgetfulness",
        description: "Response to memory slips.",
        options: &[
            opt("If my partner forgets an important date, it means they do not love me.", 0.6, 0.0, 0.0, 0.0),
            opt("I set reminders. We are only human.", 0.0, 0.5, 0.0, 0.0),
            opt("We laugh about it. Chaos is part of life.", 0.0, 0.0, 0.3, 0.2),
        ],
    },
    Scenario {
        id: "nd_04",
        question: "Info-dumping",
        description: "Expressing love by sharing facts.",
        options: &[
            opt("I love hearing forty minutes about trains or tabletop lore.", 0.0, 0.0, 0.8, 0.0),
            opt("It is tiring. Let us talk about us instead.", 0.0, 0.0, -0.3, 0.0),
            opt("I listen out of politeness but do not remember.", 0.2, 0.0, 0.0, 0.0),
        ],
    },
];
