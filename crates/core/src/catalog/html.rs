use super::{ExerciseSeed, QuestionSeed};
use crate::model::DifficultyLevel::{Advanced, Beginner, Intermediate};

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "html-b-1",
        difficulty: Beginner,
        prompt: "Which element defines a paragraph?",
        options: &["<p>", "<para>", "<text>", "<pg>"],
        correct: "<p>",
        explanation: "The <p> element represents a paragraph of text.",
        code: None,
        points: 10,
        feedback: &[("<para>", "There is no <para> element in HTML.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-b-2",
        difficulty: Beginner,
        prompt: "Which attribute provides alternative text for an image?",
        options: &["title", "alt", "src", "desc"],
        correct: "alt",
        explanation: "The alt attribute describes the image for screen readers and when it fails to load.",
        code: Some("<img src=\"cat.png\" ___=\"A sleeping cat\">"),
        points: 10,
        feedback: &[(
            "title",
            "title shows a tooltip, but assistive technology relies on alt.",
        )],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-b-3",
        difficulty: Beginner,
        prompt: "Which element creates a hyperlink?",
        options: &["<link>", "<a>", "<href>", "<nav>"],
        correct: "<a>",
        explanation: "The anchor element <a> with an href attribute creates a hyperlink.",
        code: None,
        points: 10,
        feedback: &[("<link>", "<link> connects external resources such as stylesheets.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-b-4",
        difficulty: Beginner,
        prompt: "What does the DOCTYPE declaration at the top of a page do?",
        options: &[
            "Tells the browser to use standards mode",
            "Imports the HTML library",
            "Sets the page title",
            "Declares the character encoding",
        ],
        correct: "Tells the browser to use standards mode",
        explanation: "<!DOCTYPE html> switches the browser into standards mode rather than quirks mode.",
        code: Some("<!DOCTYPE html>\n<html lang=\"en\">"),
        points: 10,
        feedback: &[],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-i-1",
        difficulty: Intermediate,
        prompt: "Which element is the best fit for a site's primary navigation links?",
        options: &["<div>", "<nav>", "<menu>", "<section>"],
        correct: "<nav>",
        explanation: "<nav> marks a block of major navigation links and is exposed as a landmark.",
        code: None,
        points: 15,
        feedback: &[("<div>", "A <div> works visually but carries no meaning.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-i-2",
        difficulty: Intermediate,
        prompt: "Which input type shows a date picker in supporting browsers?",
        options: &["text", "calendar", "date", "datetime"],
        correct: "date",
        explanation: "type=\"date\" renders a native date control and validates the value format.",
        code: Some("<input type=\"___\" name=\"birthday\">"),
        points: 15,
        feedback: &[("datetime", "datetime was dropped from the standard; use datetime-local.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-i-3",
        difficulty: Intermediate,
        prompt: "How do you associate a <label> with an input?",
        options: &[
            "Match the label's for attribute to the input's id",
            "Match the label's name attribute to the input's name",
            "Put the label after the input",
            "Give both the same class",
        ],
        correct: "Match the label's for attribute to the input's id",
        explanation: "for=\"email\" on the label points to id=\"email\" on the input; wrapping the input also works.",
        code: Some("<label for=\"email\">Email</label>\n<input id=\"email\" type=\"email\">"),
        points: 15,
        feedback: &[],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-a-1",
        difficulty: Advanced,
        prompt: "Which attribute defers a classic script until the document is parsed, preserving order?",
        options: &["async", "defer", "lazy", "module"],
        correct: "defer",
        explanation: "defer scripts run in document order after parsing; async scripts run as soon as they load.",
        code: Some("<script src=\"app.js\" ___></script>"),
        points: 20,
        feedback: &[("async", "async does not preserve execution order.")],
        time_limit_secs: Some(45),
    },
    QuestionSeed {
        id: "html-a-2",
        difficulty: Advanced,
        prompt: "Which ARIA attribute announces dynamic content changes politely?",
        options: &["aria-live=\"polite\"", "aria-hidden=\"true\"", "role=\"alert\"", "aria-busy=\"false\""],
        correct: "aria-live=\"polite\"",
        explanation: "A polite live region is announced when the screen reader is idle.",
        code: None,
        points: 20,
        feedback: &[("role=\"alert\"", "alert is assertive and interrupts the user.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "html-a-3",
        difficulty: Advanced,
        prompt: "Which element lets the browser choose between image sources by media query?",
        options: &["<picture>", "<figure>", "<canvas>", "<srcset>"],
        correct: "<picture>",
        explanation: "<picture> holds <source> elements with media conditions and a fallback <img>.",
        code: None,
        points: 20,
        feedback: &[("<srcset>", "srcset is an attribute, not an element.")],
        time_limit_secs: None,
    },
];

pub(super) const EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: "html-ex-b-1",
        difficulty: Beginner,
        prompt: "Build a page heading and an introductory paragraph.",
        starter_code: "<body>\n  <!-- your markup here -->\n</body>\n",
        tests: &[
            ("The body", "contains exactly one <h1>"),
            ("The <h1>", "is followed by a <p>"),
        ],
        explanation: "Every page should have a single top-level heading describing its content.",
        hints: &["Headings run from <h1> to <h6>.", "Paragraphs use <p>."],
        points: 20,
    },
    ExerciseSeed {
        id: "html-ex-i-1",
        difficulty: Intermediate,
        prompt: "Create an accessible sign-up form with an email field and a submit button.",
        starter_code: "<form>\n</form>\n",
        tests: &[
            ("The form", "has an <input type=\"email\">"),
            ("The email input", "has an associated <label>"),
            ("The form", "has a submit <button>"),
        ],
        explanation: "Labels make inputs usable with assistive technology and enlarge the click target.",
        hints: &[
            "Use for/id to connect the label.",
            "A <button> inside a form submits by default.",
        ],
        points: 30,
    },
    ExerciseSeed {
        id: "html-ex-a-1",
        difficulty: Advanced,
        prompt: "Mark up an article with a header, main content and a footer using semantic elements.",
        starter_code: "<article>\n</article>\n",
        tests: &[
            ("The article", "starts with a <header> containing a heading"),
            ("The article", "ends with a <footer>"),
            ("The markup", "contains no <div> elements"),
        ],
        explanation: "Semantic sectioning elements give documents a meaningful outline.",
        hints: &["<header> and <footer> can live inside an <article>."],
        points: 40,
    },
];
