//! Static catalogue of illustrative patterns

use std::fmt;

/// A pattern paired with a short human-readable description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternExample {
    pub pattern: &'static str,
    pub description: &'static str,
}

impl fmt::Display for PatternExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  : {}", self.pattern, self.description)
    }
}

/// Character classes, shorthand classes and their negations, quantifiers and
/// word-boundary anchors
pub const PATTERN_EXAMPLES: &[PatternExample] = &[
    PatternExample {
        pattern: "[a-z]",
        description: "Match a lowercase letter",
    },
    PatternExample {
        pattern: "[A-Z]",
        description: "Match an uppercase letter",
    },
    PatternExample {
        pattern: r"\d",
        description: "Match any digit (0-9)",
    },
    PatternExample {
        pattern: r"\D",
        description: "Match any non-digit character",
    },
    PatternExample {
        pattern: r"\w",
        description: "Match any word character (alphanumeric + underscore)",
    },
    PatternExample {
        pattern: r"\W",
        description: "Match any non-word character",
    },
    PatternExample {
        pattern: r"\s",
        description: "Match any whitespace character (space, tab, newline)",
    },
    PatternExample {
        pattern: r"\S",
        description: "Match any non-whitespace character",
    },
    PatternExample {
        pattern: ".*",
        description: "Match any string (including empty string) of any length",
    },
    PatternExample {
        pattern: "[a-z]+",
        description: "Match one or more lowercase letters",
    },
    PatternExample {
        pattern: r"\bword\b",
        description: "Match the word 'word' as a whole word (word boundary)",
    },
    PatternExample {
        pattern: "[a-zA-Z0-9]+",
        description: "Match alphanumeric characters (letters and digits) one or more times",
    },
];

/// A labelled pattern applied by the feature demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDemo {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// Sets, ranges and quantifiers shown against the user's own text
pub const FEATURE_DEMOS: [FeatureDemo; 6] = [
    FeatureDemo {
        label: "Digits in the text",
        pattern: r"\d+",
    },
    FeatureDemo {
        label: "Lowercase letters in the text",
        pattern: "[a-z]+",
    },
    FeatureDemo {
        label: "Uppercase letters in the text",
        pattern: "[A-Z]+",
    },
    FeatureDemo {
        label: "Words with exactly 4 letters",
        pattern: r"\b[a-zA-Z]{4}\b",
    },
    FeatureDemo {
        label: "Words starting with 't'",
        pattern: r"\bt\w+\b",
    },
    FeatureDemo {
        label: "Non-space characters",
        pattern: r"\S+",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_display_format() {
        let example = PATTERN_EXAMPLES[0];
        assert_eq!(example.to_string(), "[a-z]  : Match a lowercase letter");
    }

    #[test]
    fn test_catalogue_patterns_compile() {
        for example in PATTERN_EXAMPLES {
            assert!(regex::Regex::new(example.pattern).is_ok(), "{}", example);
        }
        for demo in &FEATURE_DEMOS {
            assert!(regex::Regex::new(demo.pattern).is_ok(), "{}", demo.label);
        }
    }
}
