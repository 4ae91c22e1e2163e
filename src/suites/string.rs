use super::{qualified, timed};
use crate::harness::RecordConfig;
use crate::schema::ResultValue;

pub const SUITE: &str = "StringSuite";

const WORDS: [&str; 4] = ["hello", "world", "python", "benchmark"];
const REPEAT: usize = 100;

#[derive(Debug, Clone)]
pub struct StringSuite {
    pub words: Vec<String>,
    pub text: String,
}

impl StringSuite {
    pub fn setup() -> Self {
        let words: Vec<String> = std::iter::repeat(WORDS)
            .take(REPEAT)
            .flatten()
            .map(str::to_string)
            .collect();
        let text = words.join(" ");
        Self { words, text }
    }

    pub fn string_join(&self) -> String {
        self.words.join(" ")
    }

    pub fn string_split(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn string_upper(&self) -> Vec<String> {
        self.words.iter().map(|w| w.to_uppercase()).collect()
    }

    pub fn string_replace(&self) -> String {
        self.text.replace("hello", "hi")
    }
}

pub fn record(cfg: &RecordConfig) -> Vec<(String, ResultValue)> {
    let suite = StringSuite::setup();
    vec![
        (
            qualified(SUITE, "time_string_join"),
            timed(cfg, || suite.string_join()),
        ),
        (
            qualified(SUITE, "time_string_split"),
            timed(cfg, || suite.string_split().len()),
        ),
        (
            qualified(SUITE, "time_string_upper"),
            timed(cfg, || suite.string_upper()),
        ),
        (
            qualified(SUITE, "time_string_replace"),
            timed(cfg, || suite.string_replace()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_inverts_join() {
        let suite = StringSuite::setup();
        assert_eq!(suite.words.len(), 400);
        assert_eq!(suite.string_join(), suite.text);
        assert_eq!(suite.string_split(), suite.words);
    }

    #[test]
    fn upper_and_replace() {
        let suite = StringSuite::setup();
        assert_eq!(suite.string_upper()[3], "BENCHMARK");
        let replaced = suite.string_replace();
        assert!(!replaced.contains("hello"));
        assert_eq!(replaced.matches("hi ").count(), 100);
    }
}
