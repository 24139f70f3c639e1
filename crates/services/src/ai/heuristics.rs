//! Keyword heuristics behind the mock code review.

use codequest_core::model::LearningTrack;

use super::strategy::CodeFeedback;

const BASE_SCORE: i32 = 70;
const STRENGTH_BONUS: i32 = 8;
const SUGGESTION_PENALTY: i32 = 6;

struct Rule {
    matches: fn(&str) -> bool,
    note: &'static str,
}

const HTML_STRENGTHS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("<!doctype html"),
        note: "Declares the HTML5 doctype.",
    },
    Rule {
        matches: |c| {
            ["<header", "<nav", "<main", "<article", "<section", "<footer"]
                .iter()
                .any(|tag| c.contains(tag))
        },
        note: "Uses semantic sectioning elements.",
    },
    Rule {
        matches: |c| c.contains("<label"),
        note: "Labels form controls.",
    },
];

const HTML_SUGGESTIONS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("<img") && !c.contains("alt="),
        note: "Add alt text to images for screen readers.",
    },
    Rule {
        matches: |c| c.contains("style=\""),
        note: "Move inline styles into a stylesheet.",
    },
    Rule {
        matches: |c| c.matches("<div").count() > 3,
        note: "Replace generic <div> wrappers with semantic elements where possible.",
    },
];

const CSS_STRENGTHS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("flex") || c.contains("grid"),
        note: "Uses a modern layout technique (flexbox or grid).",
    },
    Rule {
        matches: |c| c.contains("var(--"),
        note: "Reuses values through custom properties.",
    },
    Rule {
        matches: |c| c.contains("@media"),
        note: "Adapts to different screen sizes.",
    },
];

const CSS_SUGGESTIONS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("!important"),
        note: "Avoid !important; raise specificity or restructure selectors instead.",
    },
    Rule {
        matches: |c| c.contains("font-size") && c.contains("px") && !c.contains("rem"),
        note: "Consider rem units for font sizes so text scales with user settings.",
    },
    Rule {
        matches: |c| c.contains("float:"),
        note: "Flexbox or grid usually replace float-based layouts.",
    },
];

const JS_STRENGTHS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("const ") || c.contains("let "),
        note: "Uses block-scoped declarations.",
    },
    Rule {
        matches: |c| c.contains("==="),
        note: "Uses strict equality.",
    },
    Rule {
        matches: |c| c.contains("=>"),
        note: "Uses arrow functions.",
    },
    Rule {
        matches: |c| c.contains("async ") || c.contains("await "),
        note: "Handles asynchronous work with async/await.",
    },
];

const JS_SUGGESTIONS: &[Rule] = &[
    Rule {
        matches: |c| c.contains("var "),
        note: "Prefer let or const over var.",
    },
    Rule {
        matches: |c| c.contains(" == ") || c.contains(" != "),
        note: "Use === and !== to avoid type coercion.",
    },
    Rule {
        matches: |c| c.contains("console.log"),
        note: "Remove console.log calls before shipping.",
    },
];

fn rules_for(track: LearningTrack) -> (&'static [Rule], &'static [Rule]) {
    match track {
        LearningTrack::Html => (HTML_STRENGTHS, HTML_SUGGESTIONS),
        LearningTrack::Css => (CSS_STRENGTHS, CSS_SUGGESTIONS),
        LearningTrack::Javascript => (JS_STRENGTHS, JS_SUGGESTIONS),
    }
}

fn apply(rules: &[Rule], code: &str) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.matches)(code))
        .map(|rule| rule.note.to_string())
        .collect()
}

/// Review `code` for `track`. Matching is case-insensitive.
#[must_use]
pub fn review(code: &str, track: LearningTrack) -> CodeFeedback {
    let lowered = code.to_lowercase();
    let (strength_rules, suggestion_rules) = rules_for(track);
    let strengths = apply(strength_rules, &lowered);
    let mut suggestions = apply(suggestion_rules, &lowered);
    if strengths.is_empty() && suggestions.is_empty() {
        suggestions.push(format!(
            "Try applying a {} concept from the current lesson.",
            track.label()
        ));
    }

    let raw = BASE_SCORE + STRENGTH_BONUS * strengths.len() as i32
        - SUGGESTION_PENALTY * suggestions.len() as i32;
    let score = u8::try_from(raw.clamp(0, 100)).unwrap_or(0);

    let summary = match score {
        90..=100 => "Excellent work. This is clean, idiomatic code.",
        75..=89 => "Good job. A few tweaks would make it even better.",
        60..=74 => "A solid start with room to improve.",
        _ => "Keep practicing. Focus on the suggestions below.",
    }
    .to_string();

    CodeFeedback {
        score,
        strengths,
        suggestions,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_layout_gets_a_compliment() {
        let feedback = review(".row { display: flex; }", LearningTrack::Css);
        assert!(feedback.strengths.iter().any(|s| s.contains("layout")));
        assert_eq!(feedback.score, 78);
    }

    #[test]
    fn javascript_var_gets_a_suggestion() {
        let feedback = review("var total = 0;", LearningTrack::Javascript);
        assert!(feedback.suggestions.iter().any(|s| s.contains("let or const")));
        assert!(feedback.score < 70);
    }

    #[test]
    fn html_image_without_alt_is_flagged() {
        let feedback = review("<IMG src=\"a.png\">", LearningTrack::Html);
        assert!(feedback.suggestions.iter().any(|s| s.contains("alt text")));

        let fixed = review("<img src=\"a.png\" alt=\"A\">", LearningTrack::Html);
        assert!(!fixed.suggestions.iter().any(|s| s.contains("alt text")));
    }

    #[test]
    fn plain_code_gets_a_generic_nudge() {
        let feedback = review("hello", LearningTrack::Html);
        assert!(feedback.strengths.is_empty());
        assert_eq!(feedback.suggestions.len(), 1);
    }
}
