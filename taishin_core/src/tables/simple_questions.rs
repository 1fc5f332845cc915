//! Ten-question home screening bank ("anyone can do it" self check).
//!
//! Each option scores 1 (safe side) or 0 (risk side). The bank is built once
//! on first use and shared read-only afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;

/// One selectable answer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionOption {
    /// Option id, e.g. `"3b"`
    pub id: &'static str,
    pub label: &'static str,
    pub score: u8,
}

/// One screening question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleQuestion {
    pub id: u8,
    pub question: &'static str,
    pub help_text: &'static str,
    pub options: Vec<QuestionOption>,
}

impl SimpleQuestion {
    /// The option with the given id, if it belongs to this question
    pub fn option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

fn opt(id: &'static str, label: &'static str, score: u8) -> QuestionOption {
    QuestionOption { id, label, score }
}

static QUESTIONS: Lazy<Vec<SimpleQuestion>> = Lazy::new(|| {
    vec![
        SimpleQuestion {
            id: 1,
            question: "When was the house built?",
            help_text: "The seismic provisions of the Building Standard Law were overhauled in June 1981.",
            options: vec![
                opt("1a", "June 1981 or later", 1),
                opt("1b", "May 1981 or earlier", 0),
            ],
        },
        SimpleQuestion {
            id: 2,
            question: "Has the house been hit by a major disaster?",
            help_text: "Large earthquakes, above-floor flooding, fire and similar damage.",
            options: vec![
                opt("2a", "No", 1),
                opt("2b", "Yes", 0),
            ],
        },
        SimpleQuestion {
            id: 3,
            question: "Has the house been extended?",
            help_text: "Extensions can upset the overall seismic balance of the building.",
            options: vec![
                opt("3a", "Not extended", 1),
                opt("3b", "Extended with the required permits", 1),
                opt("3c", "Extended without the required permits, or unknown", 0),
            ],
        },
        SimpleQuestion {
            id: 4,
            question: "What is the state of damage and repair?",
            help_text: "Ageing, termite damage and rot.",
            options: vec![
                opt("4a", "No damage", 1),
                opt("4b", "Damage found and repaired", 1),
                opt("4c", "Unrepaired damage (termites, rot, etc.)", 0),
            ],
        },
        SimpleQuestion {
            id: 5,
            question: "What shape is the floor plan?",
            help_text: "Near-rectangular plans resist earthquakes well; L, T and U shapes tend to be weak.",
            options: vec![
                opt("5a", "Roughly rectangular", 1),
                opt("5b", "L, T, U or otherwise irregular", 0),
            ],
        },
        SimpleQuestion {
            id: 6,
            question: "Is there a large open well between floors?",
            help_text: "A large void reduces the in-plane stiffness of the floor.",
            options: vec![
                opt("6a", "No", 1),
                opt("6b", "Yes", 0),
            ],
        },
        SimpleQuestion {
            id: 7,
            question: "Do the first- and second-floor walls line up?",
            help_text: "Offset walls interrupt the load path. Single-storey houses answer yes.",
            options: vec![
                opt("7a", "Yes (or single storey)", 1),
                opt("7b", "No, they are offset", 0),
            ],
        },
        SimpleQuestion {
            id: 8,
            question: "Are the walls evenly distributed?",
            help_text: "Walls concentrated on one side make the building twist.",
            options: vec![
                opt("8a", "Walls are balanced in every direction on every floor", 1),
                opt("8b", "Walls are concentrated on one side or sparse in one direction", 0),
            ],
        },
        SimpleQuestion {
            id: 9,
            question: "Is the wall quantity adequate for the roof?",
            help_text: "Heavy tile roofs need many walls.",
            options: vec![
                opt("9a", "Heavy roof with many walls, or a light roof", 1),
                opt("9b", "Heavy roof with few walls", 0),
            ],
        },
        SimpleQuestion {
            id: 10,
            question: "What kind of foundation does the house have?",
            help_text: "Reinforced concrete strip or mat foundations perform well; stone or cracked foundations are weak points.",
            options: vec![
                opt("10a", "Reinforced concrete strip or mat", 1),
                opt("10b", "Other (stone, unreinforced concrete, etc.)", 0),
                opt("10c", "Cracked foundation", 0),
            ],
        },
    ]
});

/// All screening questions in order
pub fn questions() -> &'static [SimpleQuestion] {
    &QUESTIONS
}

/// Look up a question by id
pub fn question(id: u8) -> Option<&'static SimpleQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}
