use super::{ExerciseSeed, QuestionSeed};
use crate::model::DifficultyLevel::{Advanced, Beginner, Intermediate};

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "js-b-1",
        difficulty: Beginner,
        prompt: "Which keyword declares a variable that cannot be reassigned?",
        options: &["var", "let", "const", "static"],
        correct: "const",
        explanation: "const bindings cannot be reassigned, though objects they hold can still change.",
        code: None,
        points: 10,
        feedback: &[("let", "let allows reassignment.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-b-2",
        difficulty: Beginner,
        prompt: "What does typeof null return?",
        options: &["\"null\"", "\"object\"", "\"undefined\"", "\"number\""],
        correct: "\"object\"",
        explanation: "A long-standing quirk: typeof null is \"object\".",
        code: Some("console.log(typeof null);"),
        points: 10,
        feedback: &[("\"null\"", "Reasonable guess, but the language says otherwise.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-b-3",
        difficulty: Beginner,
        prompt: "Which operator checks equality without type coercion?",
        options: &["==", "===", "=", "!="],
        correct: "===",
        explanation: "=== compares value and type; == coerces types first.",
        code: None,
        points: 10,
        feedback: &[("=", "A single = is assignment.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-i-1",
        difficulty: Intermediate,
        prompt: "What does [1, 2, 3].map(n => n * 2) return?",
        options: &["[2, 4, 6]", "[1, 2, 3]", "12", "undefined"],
        correct: "[2, 4, 6]",
        explanation: "map returns a new array with the callback applied to every element.",
        code: Some("const doubled = [1, 2, 3].map(n => n * 2);"),
        points: 15,
        feedback: &[("undefined", "That is what forEach returns.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-i-2",
        difficulty: Intermediate,
        prompt: "Which method stops an event from reaching parent elements?",
        options: &[
            "event.stopPropagation()",
            "event.preventDefault()",
            "event.cancel()",
            "return false",
        ],
        correct: "event.stopPropagation()",
        explanation: "stopPropagation halts bubbling; preventDefault cancels the browser's default action.",
        code: None,
        points: 15,
        feedback: &[("event.preventDefault()", "That cancels the default action, not bubbling.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-i-3",
        difficulty: Intermediate,
        prompt: "What is logged?",
        options: &["3 3 3", "0 1 2", "undefined x3", "An error"],
        correct: "0 1 2",
        explanation: "let creates a fresh binding per iteration, so each callback sees its own i.",
        code: Some("for (let i = 0; i < 3; i++) {\n  setTimeout(() => console.log(i));\n}"),
        points: 15,
        feedback: &[("3 3 3", "That would happen with var.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-a-1",
        difficulty: Advanced,
        prompt: "In what order are these logged?",
        options: &["A C B", "A B C", "C A B", "B A C"],
        correct: "A C B",
        explanation: "Synchronous code runs first, then microtasks such as resolved promise callbacks.",
        code: Some("console.log('A');\nPromise.resolve().then(() => console.log('B'));\nconsole.log('C');"),
        points: 20,
        feedback: &[("A B C", "Promise callbacks always run after the current task.")],
        time_limit_secs: Some(45),
    },
    QuestionSeed {
        id: "js-a-2",
        difficulty: Advanced,
        prompt: "What does Promise.allSettled resolve with?",
        options: &[
            "An array of status objects for every promise",
            "The first fulfilled value",
            "Only the fulfilled values",
            "It rejects on the first failure",
        ],
        correct: "An array of status objects for every promise",
        explanation: "allSettled never rejects; each entry is {status, value} or {status, reason}.",
        code: None,
        points: 20,
        feedback: &[("It rejects on the first failure", "That describes Promise.all.")],
        time_limit_secs: None,
    },
    QuestionSeed {
        id: "js-a-3",
        difficulty: Advanced,
        prompt: "What is a closure?",
        options: &[
            "A function bundled with the scope it was created in",
            "A function that has finished executing",
            "A way to make properties private with #",
            "An immediately invoked function",
        ],
        correct: "A function bundled with the scope it was created in",
        explanation: "Closures keep access to outer variables after the outer function returns.",
        code: None,
        points: 20,
        feedback: &[],
        time_limit_secs: None,
    },
];

pub(super) const EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: "js-ex-b-1",
        difficulty: Beginner,
        prompt: "Write a function sum(a, b) that returns the sum of two numbers.",
        starter_code: "function sum(a, b) {\n  // your code here\n}\n",
        tests: &[
            ("sum(1, 2)", "3"),
            ("sum(-1, 1)", "0"),
            ("sum(0.5, 0.25)", "0.75"),
        ],
        explanation: "Return the result; logging it is not the same as returning it.",
        hints: &["Use the return keyword.", "The + operator adds numbers."],
        points: 30,
    },
    ExerciseSeed {
        id: "js-ex-i-1",
        difficulty: Intermediate,
        prompt: "Write evens(numbers) returning only the even numbers, in order.",
        starter_code: "function evens(numbers) {\n}\n",
        tests: &[
            ("evens([1, 2, 3, 4])", "[2, 4]"),
            ("evens([])", "[]"),
            ("evens([7, 9])", "[]"),
        ],
        explanation: "Array.prototype.filter keeps elements whose callback returns true.",
        hints: &["n % 2 === 0 tests for even numbers.", "Try numbers.filter(...)."],
        points: 30,
    },
    ExerciseSeed {
        id: "js-ex-a-1",
        difficulty: Advanced,
        prompt: "Write debounce(fn, ms) that delays calls until ms have passed without another call.",
        starter_code: "function debounce(fn, ms) {\n}\n",
        tests: &[
            ("Three calls within 50ms, ms = 100", "fn runs once"),
            ("Two calls 150ms apart, ms = 100", "fn runs twice"),
            ("Arguments of the last call", "are passed to fn"),
        ],
        explanation: "Keep the timer id in a closure and clear it on every call.",
        hints: &["clearTimeout cancels a pending timer.", "Return a new function."],
        points: 40,
    },
];
