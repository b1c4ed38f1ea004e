//! Maps a raw input line to a registered command.
//!
//! 1. Split the line on whitespace. No words is [`OstapError::EmptyCommand`].
//! 2. If the first word opens a two-word phrase (`show`, `del`, ...), the
//!    phrase is the first two words; otherwise it is the first word alone.
//!    Everything after the phrase is positional arguments.
//! 3. An exact phrase match wins.
//! 4. Otherwise every registered phrase is scored with [`similarity::ratio`].
//!    The best score at or above the threshold becomes a suggestion carried by
//!    [`OstapError::UnknownCommand`]. The suggestion is never executed.

use super::registry::{CommandSpec, Registry};
use super::similarity;
use crate::error::{OstapError, Result};
use std::collections::BTreeSet;

pub const DEFAULT_THRESHOLD: u8 = 60;

/// A phrase split off an input line, with the words that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub phrase: String,
    pub args: Vec<String>,
    /// The first two words lowercased, when the phrase took only one.
    pub two_word_form: Option<String>,
}

pub struct Resolved<'r, S> {
    pub spec: &'r CommandSpec<S>,
    pub phrase: String,
    pub args: Vec<String>,
}

pub struct Resolver<'r, S> {
    registry: &'r Registry<S>,
    prefixes: BTreeSet<&'static str>,
    threshold: u8,
}

impl<'r, S> Resolver<'r, S> {
    pub fn new(registry: &'r Registry<S>) -> Self {
        Self {
            registry,
            prefixes: registry.two_word_prefixes(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn parse(&self, line: &str) -> Result<Parsed> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let first = tokens
            .first()
            .ok_or(OstapError::EmptyCommand)?
            .to_lowercase();

        let two_word = tokens
            .get(1)
            .map(|second| format!("{} {}", first, second.to_lowercase()));

        let parsed = match two_word {
            Some(phrase) if self.prefixes.contains(first.as_str()) => Parsed {
                phrase,
                args: tokens[2..].iter().map(|t| t.to_string()).collect(),
                two_word_form: None,
            },
            two_word_form => Parsed {
                phrase: first,
                args: tokens[1..].iter().map(|t| t.to_string()).collect(),
                two_word_form,
            },
        };
        Ok(parsed)
    }

    pub fn resolve(&self, line: &str) -> Result<Resolved<'r, S>> {
        let parsed = self.parse(line)?;

        if let Some(spec) = self.registry.lookup(&parsed.phrase) {
            log::debug!("resolved '{}' with {} args", parsed.phrase, parsed.args.len());
            return Ok(Resolved {
                spec,
                phrase: parsed.phrase,
                args: parsed.args,
            });
        }

        let suggestion = self.suggest(&parsed);
        log::debug!(
            "no command '{}', suggestion: {:?}",
            parsed.phrase,
            suggestion
        );
        Err(OstapError::UnknownCommand {
            phrase: parsed.phrase,
            suggestion,
        })
    }

    /// Best-scoring registered phrase, if it reaches the threshold.
    ///
    /// The two-word form of the input is scored as well, so that `chagne phone`
    /// is compared against `change phone` and not just `chagne`.
    pub fn suggest(&self, parsed: &Parsed) -> Option<String> {
        let candidates: Vec<&str> = std::iter::once(parsed.phrase.as_str())
            .chain(parsed.two_word_form.as_deref())
            .collect();

        let mut best: Option<(&str, u8)> = None;
        for known in self.registry.phrases() {
            for candidate in &candidates {
                let score = similarity::ratio(candidate, known);
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((known, score));
                }
            }
        }

        best.filter(|(_, score)| *score >= self.threshold)
            .map(|(phrase, _)| phrase.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Args, CmdResult, Context};
    use crate::store::memory::InMemoryStore;

    fn noop(_: &mut Context<'_, InMemoryStore>, _: &Args) -> Result<CmdResult> {
        Ok(CmdResult::default())
    }

    fn small_registry() -> Registry<InMemoryStore> {
        Registry::new()
            .command(&["change"], "", &[], noop)
            .command(&["help"], "", &[], noop)
            .command(&["show all"], "", &[], noop)
    }

    fn suggestion_for(registry: &Registry<InMemoryStore>, line: &str) -> Option<String> {
        match Resolver::new(registry).resolve(line) {
            Err(OstapError::UnknownCommand { suggestion, .. }) => suggestion,
            Err(other) => panic!("unexpected error: {other}"),
            Ok(r) => panic!("unexpectedly resolved to {}", r.phrase),
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        let registry = small_registry();
        let resolver = Resolver::new(&registry);
        assert!(matches!(resolver.parse("   "), Err(OstapError::EmptyCommand)));
        assert!(matches!(resolver.resolve(""), Err(OstapError::EmptyCommand)));
    }

    #[test]
    fn two_word_prefix_takes_two_tokens() {
        let registry = Registry::<InMemoryStore>::standard();
        let parsed = Resolver::new(&registry)
            .parse("Show ALL users extra")
            .unwrap();
        assert_eq!(parsed.phrase, "show all");
        assert_eq!(parsed.args, vec!["users", "extra"]);
    }

    #[test]
    fn single_word_phrase_keeps_argument_case() {
        let registry = Registry::<InMemoryStore>::standard();
        let parsed = Resolver::new(&registry)
            .parse("SEARCH name Alice")
            .unwrap();
        assert_eq!(parsed.phrase, "search");
        assert_eq!(parsed.args, vec!["name", "Alice"]);
    }

    #[test]
    fn exact_match_resolves_with_arguments() {
        let registry = Registry::<InMemoryStore>::standard();
        let resolved = Resolver::new(&registry)
            .resolve("add note buy milk #errand")
            .unwrap();
        assert_eq!(resolved.phrase, "add note");
        assert_eq!(resolved.args, vec!["buy", "milk", "#errand"]);
        assert_eq!(resolved.spec.phrases, &["add note"]);
    }

    #[test]
    fn alias_resolves_to_shared_command() {
        let registry = Registry::<InMemoryStore>::standard();
        let resolver = Resolver::new(&registry);
        let bye = resolver.resolve("good bye").unwrap();
        let quit = resolver.resolve("quit").unwrap();
        assert!(std::ptr::eq(bye.spec, quit.spec));
    }

    #[test]
    fn typo_suggests_closest_phrase() {
        let registry = small_registry();
        assert_eq!(suggestion_for(&registry, "chagne"), Some("change".to_string()));
    }

    #[test]
    fn short_nonsense_gets_no_suggestion() {
        let registry = small_registry();
        assert_eq!(suggestion_for(&registry, "zq"), None);

        let standard = Registry::<InMemoryStore>::standard();
        assert_eq!(suggestion_for(&standard, "zq"), None);
    }

    #[test]
    fn two_word_typo_is_scored_as_a_phrase() {
        let registry = Registry::<InMemoryStore>::standard();
        assert_eq!(
            suggestion_for(&registry, "chagne phone"),
            Some("change phone".to_string())
        );
        assert_eq!(
            suggestion_for(&registry, "shwo all"),
            Some("show all".to_string())
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let registry = small_registry();
        let strict = Resolver::new(&registry).with_threshold(90);
        match strict.resolve("chagne") {
            Err(OstapError::UnknownCommand { suggestion, .. }) => assert!(suggestion.is_none()),
            _ => panic!("expected unknown command"),
        }
    }
}
