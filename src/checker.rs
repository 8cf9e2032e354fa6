//! Grammar and style checking of annotated text.
//!
//! [`Checker`] owns the rule selection (language, enabled and disabled rules) and hands
//! a [`CheckRequest`] to a [`GrammarEngine`]. The excessive-whitespace rule is always
//! disabled: markup is dropped from the checked text, which routinely leaves runs of
//! spaces behind.

pub mod languagetool;

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::annotation::AnnotatedText;

pub use languagetool::LanguageTool;

/// LanguageTool's rule for repeated whitespace.
pub const WHITESPACE_RULE: &str = "WHITESPACE_RULE";

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_SERVER: &str = "http://localhost:8081";

/// Errors that can occur while talking to the grammar engine.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The request could not be sent or the response could not be read
    #[error("request to LanguageTool failed")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status
    #[error("LanguageTool returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body is not a LanguageTool check result
    #[error("invalid LanguageTool response")]
    Response(#[from] serde_json::Error),
}

/// A potential problem reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub from_offset: usize,
    pub to_offset: usize,
    pub message: String,
    pub suggested_replacements: Vec<String>,
    pub rule_id: String,
}

impl fmt::Display for RuleMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Potential error at characters {}-{}: {}",
            self.from_offset, self.to_offset, self.message
        )?;
        write!(
            f,
            "Suggested correction(s): [{}]",
            self.suggested_replacements.join(", ")
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckerConfig {
    /// Base URL of the LanguageTool server
    pub server: String,
    /// Language variant to check against
    pub language: String,
    /// Native language of the author, enables false-friend rules
    pub mother_tongue: Option<String>,
    /// Extra rules to disable
    pub disabled_rules: Vec<String>,
    /// Extra rules to enable on top of the defaults
    pub enabled_rules: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            mother_tongue: None,
            disabled_rules: Vec::new(),
            enabled_rules: Vec::new(),
        }
    }
}

/// Everything an engine needs for one check.
#[derive(Debug, Clone, Copy)]
pub struct CheckRequest<'a> {
    pub language: &'a str,
    pub mother_tongue: Option<&'a str>,
    pub disabled_rules: &'a BTreeSet<String>,
    pub enabled_rules: &'a [String],
    pub text: &'a AnnotatedText,
}

/// A rule engine able to check annotated text.
pub trait GrammarEngine {
    /// Matches in the engine's own order.
    fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<RuleMatch>, CheckError>;
}

impl<E: GrammarEngine + ?Sized> GrammarEngine for &E {
    fn check(&self, request: &CheckRequest<'_>) -> Result<Vec<RuleMatch>, CheckError> {
        (**self).check(request)
    }
}

pub struct Checker<E> {
    engine: E,
    language: String,
    mother_tongue: Option<String>,
    disabled_rules: BTreeSet<String>,
    enabled_rules: Vec<String>,
}

impl Checker<LanguageTool> {
    /// A checker backed by the LanguageTool server named in `config`.
    pub fn from_config(config: &CheckerConfig) -> Result<Self, CheckError> {
        let engine = LanguageTool::new(&config.server)?;
        log::debug!("Using LanguageTool at {}", engine.endpoint());
        Ok(Self::new(engine, config))
    }
}

impl<E: GrammarEngine> Checker<E> {
    pub fn new(engine: E, config: &CheckerConfig) -> Self {
        let mut disabled_rules: BTreeSet<String> = config.disabled_rules.iter().cloned().collect();
        disabled_rules.insert(WHITESPACE_RULE.to_string());

        let enabled_rules = config
            .enabled_rules
            .iter()
            .filter(|rule| {
                let keep = rule.as_str() != WHITESPACE_RULE;
                if !keep {
                    log::warn!("Ignoring enabled rule {rule}: it cannot be enabled");
                }
                keep
            })
            .cloned()
            .collect();

        Self {
            engine,
            language: config.language.clone(),
            mother_tongue: config.mother_tongue.clone(),
            disabled_rules,
            enabled_rules,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn disabled_rules(&self) -> &BTreeSet<String> {
        &self.disabled_rules
    }

    pub fn request<'a>(&'a self, text: &'a AnnotatedText) -> CheckRequest<'a> {
        CheckRequest {
            language: &self.language,
            mother_tongue: self.mother_tongue.as_deref(),
            disabled_rules: &self.disabled_rules,
            enabled_rules: &self.enabled_rules,
            text,
        }
    }

    /// Check `text`, dropping any match produced by a disabled rule.
    pub fn check(&self, text: &AnnotatedText) -> Result<Vec<RuleMatch>, CheckError> {
        let mut matches = self.engine.check(&self.request(text))?;
        let reported = matches.len();
        matches.retain(|m| !self.disabled_rules.contains(&m.rule_id));
        log::debug!(
            "Engine reported {} match(es), {} after removing disabled rules",
            reported,
            matches.len()
        );
        for m in &matches {
            log::debug!("{} at {}-{}", m.rule_id, m.from_offset, m.to_offset);
        }
        Ok(matches)
    }
}
