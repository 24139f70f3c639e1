use super::{ExerciseSeed, QuestionSeed};
use crate::model::DifficultyLevel::{Advanced, Beginner, Intermediate};

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "css-b-1",
        difficulty: Beginner,
        prompt: "Which property changes the text color of an element?",
        options: &["color", "font-color", "text-color", "foreground"],
        correct: "color",
        explanation: "color sets the foreground color of text.",
        code: None,
        points: 10,
        feedback: &[("text-color", "Close, but CSS simply calls it color.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-b-2",
        difficulty: Beginner,
        prompt: "Which selector targets an element with id=\"hero\"?",
        options: &["#hero", ".hero", "hero", "*hero"],
        correct: "#hero",
        explanation: "# selects by id, . selects by class.",
        code: None,
        points: 10,
        feedback: &[(".hero", "The dot selects a class, not an id.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-b-3",
        difficulty: Beginner,
        prompt: "In the standard box model, which layer sits between padding and margin?",
        options: &["border", "content", "outline", "gap"],
        correct: "border",
        explanation: "Content, padding, border, margin: from the inside out.",
        code: None,
        points: 10,
        feedback: &[("outline", "Outlines are drawn outside the border and take no space.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-i-1",
        difficulty: Intermediate,
        prompt: "Which declaration centers flex items along the main axis?",
        options: &[
            "justify-content: center",
            "align-items: center",
            "text-align: center",
            "place-self: center",
        ],
        correct: "justify-content: center",
        explanation: "justify-content distributes items along the main axis; align-items works on the cross axis.",
        code: Some(".row {\n  display: flex;\n  ___;\n}"),
        points: 15,
        feedback: &[("align-items: center", "That centers along the cross axis.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-i-2",
        difficulty: Intermediate,
        prompt: "What does box-sizing: border-box change?",
        options: &[
            "Width includes padding and border",
            "Width includes margin",
            "Borders are drawn inside the content",
            "Boxes can no longer overflow",
        ],
        correct: "Width includes padding and border",
        explanation: "With border-box, the declared width covers content, padding and border.",
        code: None,
        points: 15,
        feedback: &[("Width includes margin", "Margin is never part of the box size.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-i-3",
        difficulty: Intermediate,
        prompt: "Which selector has the highest specificity?",
        options: &["#nav a", ".nav a", "nav a", "a:hover"],
        correct: "#nav a",
        explanation: "An id selector outweighs any number of class or type selectors.",
        code: None,
        points: 15,
        feedback: &[],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-a-1",
        difficulty: Advanced,
        prompt: "Which grid template creates as many 200px-minimum columns as fit?",
        options: &[
            "repeat(auto-fit, minmax(200px, 1fr))",
            "repeat(200px, auto)",
            "minmax(auto-fit, 200px)",
            "repeat(3, 200px)",
        ],
        correct: "repeat(auto-fit, minmax(200px, 1fr))",
        explanation: "auto-fit with minmax builds a responsive grid without media queries.",
        code: Some(".cards {\n  display: grid;\n  grid-template-columns: ___;\n}"),
        points: 20,
        feedback: &[("repeat(3, 200px)", "That always creates exactly three columns.")],
        time_limit_secs: Some(45),
    },
    QuestionSeed {
        id: "css-a-2",
        difficulty: Advanced,
        prompt: "How do you read a custom property named --accent?",
        options: &["var(--accent)", "$accent", "@accent", "attr(--accent)"],
        correct: "var(--accent)",
        explanation: "Custom properties are read with var() and can take a fallback value.",
        code: None,
        points: 20,
        feedback: &[("$accent", "That is Sass syntax, not CSS.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "css-a-3",
        difficulty: Advanced,
        prompt: "Which property creates a new stacking context without affecting layout?",
        options: &["isolation: isolate", "position: static", "display: contents", "float: none"],
        correct: "isolation: isolate",
        explanation: "isolation: isolate forms a stacking context purely for compositing.",
        code: None,
        points: 20,
        feedback: &[],
        time_limit_secs: None,
    },
];

pub(super) const EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: "css-ex-b-1",
        difficulty: Beginner,
        prompt: "Give .card 16px of padding and a 1px solid gray border.",
        starter_code: ".card {\n}\n",
        tests: &[
            (".card", "has padding: 16px"),
            (".card", "has a 1px solid border"),
        ],
        explanation: "Shorthand properties keep declarations compact.",
        hints: &["border: <width> <style> <color>"],
        points: 20,
    },
    ExerciseSeed {
        id: "css-ex-i-1",
        difficulty: Intermediate,
        prompt: "Center .child horizontally and vertically inside .parent using flexbox.",
        starter_code: ".parent {\n  height: 300px;\n}\n",
        tests: &[
            (".parent", "uses display: flex"),
            (".parent", "centers on the main axis"),
            (".parent", "centers on the cross axis"),
        ],
        explanation: "justify-content and align-items together center a single flex child.",
        hints: &["Start with display: flex.", "You need two alignment properties."],
        points: 30,
    },
    ExerciseSeed {
        id: "css-ex-a-1",
        difficulty: Advanced,
        prompt: "Make .layout a two-column grid that collapses to one column under 600px.",
        starter_code: ".layout {\n}\n",
        tests: &[
            (".layout", "uses display: grid"),
            ("Viewport >= 600px", "shows two columns"),
            ("Viewport < 600px", "shows one column"),
        ],
        explanation: "A media query can redefine grid-template-columns for narrow screens.",
        hints: &["@media (max-width: 599px) { ... }"],
        points: 40,
    },
];
