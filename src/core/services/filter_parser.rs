//! Filter word parsing
//!
//! Turns command-line words, or a report's space-separated `filter` setting,
//! into a [`FilterContext`].

use std::sync::LazyLock;

use regex::Regex;

use crate::core::ReportError;
use crate::core::models::{FilterContext, FilterTerm, Sequence};

/// Most ids a single range may expand to
pub const MAX_RANGE: u64 = 1000;

static SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(-\d+)?(,\d+(-\d+)?)*$").unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(\.any)?:(.*)$")
        .unwrap_or_else(|e| panic!("invalid regex: {e}"))
});

/// Parse a report's filter setting
pub fn parse_filter_string(filter: &str) -> Result<FilterContext, ReportError> {
    let words: Vec<&str> = filter.split(' ').filter(|w| !w.is_empty()).collect();
    parse_words(&words)
}

/// Parse filter words
pub fn parse_words<S: AsRef<str>>(words: &[S]) -> Result<FilterContext, ReportError> {
    let mut context = FilterContext::default();

    for word in words.iter().map(AsRef::as_ref) {
        if SEQUENCE.is_match(word) {
            context.sequence.combine(&parse_sequence(word)?);
        } else if let Some(caps) = ATTRIBUTE.captures(word) {
            let name = caps[1].to_string();
            let value = caps[3].to_string();
            if caps.get(2).is_some() {
                context.filter.push(FilterTerm::Present(name));
            } else if name == "limit" {
                let limit = value.parse().map_err(|_| ReportError::InvalidLimit(value.clone()))?;
                context.limit = Some(limit);
            } else {
                context.filter.push(FilterTerm::Attribute { name, value });
            }
        } else if let Some(tag) = word.strip_prefix('+').filter(|t| !t.is_empty()) {
            context.filter.push(FilterTerm::HasTag(tag.to_string()));
        } else if let Some(tag) = word.strip_prefix('-').filter(|t| !t.is_empty()) {
            context.filter.push(FilterTerm::LacksTag(tag.to_string()));
        } else {
            context.filter.push(FilterTerm::Word(word.to_string()));
        }
    }

    log::debug!(
        "parsed {} filter word(s): {} term(s), {} id(s), limit {:?}",
        words.len(),
        context.filter.terms().len(),
        context.sequence.len(),
        context.limit
    );
    Ok(context)
}

fn parse_sequence(word: &str) -> Result<Sequence, ReportError> {
    let mut sequence = Sequence::default();
    for part in word.split(',') {
        let (low, high) = part.split_once('-').unwrap_or((part, part));
        let parse = |s: &str| s.parse::<u64>().map_err(|_| ReportError::InvalidSequence(word.to_string()));
        let (low, high) = (parse(low)?, parse(high)?);
        if low > high || high - low >= MAX_RANGE {
            return Err(ReportError::InvalidSequence(word.to_string()));
        }
        for id in low..=high {
            sequence.push(id);
        }
    }
    Ok(sequence)
}
