use crate::results::KeywordCount;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Upper bound on keywords searched per batch
pub const MAX_KEYWORDS: usize = 5;

/// Ordered list of keywords to count, at most [`MAX_KEYWORDS`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpec {
    keywords: Vec<String>,
}

impl KeywordSpec {
    /// Builds a spec from raw lines: entries are trimmed, blanks and exact
    /// duplicates dropped, and anything past the fifth keyword discarded.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        let mut dropped = 0;

        for line in lines {
            let keyword = line.as_ref().trim();
            if keyword.is_empty() || keywords.iter().any(|k| k == keyword) {
                continue;
            }
            if keywords.len() == MAX_KEYWORDS {
                dropped += 1;
                continue;
            }
            keywords.push(keyword.to_string());
        }

        if dropped > 0 {
            ::log::warn!(
                "Only {} keywords are searched, ignoring {} more",
                MAX_KEYWORDS,
                dropped
            );
        }

        Self { keywords }
    }

    /// Keyword search is on whenever at least one keyword was given
    pub fn is_enabled(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Compiled whole-word patterns for a [`KeywordSpec`]
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<(String, Regex)>,
}

impl KeywordMatcher {
    pub fn new(spec: &KeywordSpec) -> Result<Self, regex::Error> {
        let mut patterns = Vec::with_capacity(spec.keywords.len());
        for keyword in &spec.keywords {
            let pattern = format!(r"\b{}\b", regex::escape(&keyword.to_lowercase()));
            patterns.push((keyword.clone(), Regex::new(&pattern)?));
        }
        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Counts every keyword in `text`, keyed by the keyword as given.
    /// The text is lower-cased once for all keywords.
    pub fn count(&self, text: &str) -> Vec<KeywordCount> {
        if self.is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        self.patterns
            .iter()
            .map(|(keyword, regex)| KeywordCount {
                keyword: keyword.clone(),
                count: count_whole_words(regex, &lowered),
            })
            .collect()
    }
}

/// Non-overlapping matches of `regex` that do not touch a hyphen.
///
/// `\b` alone treats `seo-tools` as containing the word `seo`; hyphenated
/// compounds are one word here. A rejected match does not consume its text,
/// so a later match overlapping it is still found.
fn count_whole_words(regex: &Regex, haystack: &str) -> usize {
    let mut count = 0;
    let mut start = 0;

    while let Some(m) = regex.find_at(haystack, start) {
        let before = haystack[..m.start()].chars().next_back();
        let after = haystack[m.end()..].chars().next();

        if before != Some('-') && after != Some('-') && !m.is_empty() {
            count += 1;
            start = m.end();
        } else {
            // Resume one character past the start of the rejected match
            match haystack[m.start()..].chars().next() {
                Some(c) => start = m.start() + c.len_utf8(),
                None => break,
            }
        }
    }

    count
}
