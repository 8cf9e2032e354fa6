//! Grammar checking for AsciiDoc.
//!
//! A document is parsed into a syntax tree by [`asciidoc_ast`], projected onto
//! [`annotation::AnnotatedText`] so that only prose is checked, and sent to a
//! [`checker::GrammarEngine`]. Reported offsets refer to the original document.

pub mod annotation;
pub mod checker;
pub mod config;

use std::path::Path;

use asciidoc_ast::{AsciidocAst, AstError, Node};

pub use annotation::{AnnotatedText, AnnotatedTextBuilder, Segment, annotate_tree};
pub use checker::{CheckError, Checker, CheckerConfig, GrammarEngine, LanguageTool, RuleMatch};
pub use config::Config;

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ast(#[from] AstError),
    #[error(transparent)]
    Check(#[from] CheckError),
}

/// Parse `path` into a syntax tree using the parser settings in `config`.
pub fn parse(path: &Path, config: &Config) -> Result<Node, Error> {
    let tree = AsciidocAst::new(config.parser.clone()).parse(path)?;
    log::debug!("Parsed {} into a tree rooted at {}", path.display(), tree.kind);
    Ok(tree)
}

/// Check an already parsed tree.
pub fn check_tree<E: GrammarEngine>(
    tree: &Node,
    checker: &Checker<E>,
) -> Result<Vec<RuleMatch>, CheckError> {
    let annotated = annotate_tree(tree);
    checker.check(&annotated)
}

/// Parse and check `path` against the LanguageTool server in `config`.
pub fn check(path: &Path, config: &Config) -> Result<Vec<RuleMatch>, Error> {
    let tree = parse(path, config)?;
    let checker = Checker::from_config(&config.checker)?;
    log::debug!(
        "Checking {} as {} with rules {:?} disabled",
        path.display(),
        checker.language(),
        checker.disabled_rules()
    );
    let matches = check_tree(&tree, &checker)?;
    log::info!("{}: {} potential error(s)", path.display(), matches.len());
    Ok(matches)
}
