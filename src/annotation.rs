//! Projection of a syntax tree onto annotated text.
//!
//! Leaves of type `TEXT` and `WHITE_SPACE` are prose and get checked; every other leaf
//! is markup, which the grammar engine skips but still counts for offsets. Containers
//! contribute nothing themselves, only their leaves in document order.

use asciidoc_ast::{Node, NodeType};
use serde::Serialize;

/// One run of annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Prose, subject to grammar checking
    Text(String),
    /// Syntax, excluded from checking but kept for offsets
    Markup(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Text(s) | Segment::Markup(s) => s,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }
}

/// Which kind of segment a leaf of a given type becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Text,
    Markup,
}

/// Text split into checked prose and opaque markup.
///
/// Serializes to the LanguageTool `data` format:
/// `{"annotation":[{"text":"Hello "},{"markup":"_"}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnnotatedText {
    #[serde(rename = "annotation")]
    segments: Vec<Segment>,
}

impl AnnotatedText {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The full text, markup included, as it appears in the source.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::as_str).collect()
    }

    /// Only the checked prose.
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.is_text())
            .map(Segment::as_str)
            .collect()
    }

    /// Length in bytes of the full text.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.as_str().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Default)]
pub struct AnnotatedTextBuilder {
    segments: Vec<Segment>,
}

impl AnnotatedTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Text(text.into()));
        self
    }

    pub fn add_markup(&mut self, markup: impl Into<String>) -> &mut Self {
        self.segments.push(Segment::Markup(markup.into()));
        self
    }

    pub fn build(self) -> AnnotatedText {
        AnnotatedText {
            segments: self.segments,
        }
    }
}

/// Append the leaves of `node` to `builder`, depth first.
pub fn annotate(builder: &mut AnnotatedTextBuilder, node: &Node) {
    match &node.text {
        None => {
            for child in &node.children {
                annotate(builder, child);
            }
        }
        Some(text) => match classify(node.kind) {
            SegmentKind::Text => {
                builder.add_text(text.as_str());
            }
            SegmentKind::Markup => {
                builder.add_markup(text.as_str());
            }
        },
    }
}

/// Annotated text for a whole tree.
pub fn annotate_tree(root: &Node) -> AnnotatedText {
    let mut builder = AnnotatedTextBuilder::new();
    annotate(&mut builder, root);
    let annotated = builder.build();
    log::debug!(
        "Annotated {} segment(s), {} byte(s) of prose",
        annotated.segments().len(),
        annotated.plain_text().len()
    );
    annotated
}

/// Classify a leaf type. Every tag is listed, so a new tag has to be placed here
/// before the crate compiles again.
pub fn classify(kind: NodeType) -> SegmentKind {
    use NodeType::*;

    match kind {
        Text | WhiteSpace => SegmentKind::Text,

        File | AsciidocSection | Heading | Block | BlockMacro | BlockAttributes
        | AsciidocBlockid | AsciidocAttributeDeclaration | AttributeDeclarationName
        | AttributeInBrackets | AttributeRef | InlineMacro | Listing | List | ListItem | Link
        | Url | Ref => SegmentKind::Markup,

        EmptyLine | LineBreak | HardBreak | Continuation | EndOfSentence | LineComment
        | BlockComment => SegmentKind::Markup,

        HeadingToken | HeadingOldstyle | TitleToken => SegmentKind::Markup,

        BlockDelimiter | ListingBlockDelimiter | ListingText | LiteralBlockDelimiter
        | LiteralBlock | QuoteBlockDelimiter | ExampleBlockDelimiter | SidebarBlockDelimiter
        | CommentBlockDelimiter | PassthroughBlockDelimiter | PassthroughContent
        | FrontmatterDelimiter | Frontmatter => SegmentKind::Markup,

        BlockMacroId | BlockMacroBody | InlineMacroId | InlineMacroBody => SegmentKind::Markup,

        BlockAttrsStart | BlockAttrsEnd | AttrsStart | AttrsEnd | InlineAttrsStart
        | InlineAttrsEnd | AttrName | AttrValue | AttrListSep | Assignment | Separator => {
            SegmentKind::Markup
        }

        AttributeNameStart | AttributeName | AttributeNameEnd | AttributeVal
        | AttributeContinuation | AttributeRefStart | AttributeRefEnd => SegmentKind::Markup,

        Blockidstart | Blockid | Blockidend | Blockreftext | Inlineidstart | Inlineidend
        | Refstart | Reftext | Refend => SegmentKind::Markup,

        BoldStart | Bold | BoldEnd | ItalicStart | Italic | ItalicEnd | MonoStart | Mono
        | MonoEnd | PassthroughInlineStart | PassthroughInline | PassthroughInlineEnd => {
            SegmentKind::Markup
        }

        SingleQuote | DoubleQuote | TypographicDoubleQuoteStart | TypographicDoubleQuoteEnd
        | Lparen | Rparen | Lbracket | Rbracket | Lt | Gt | HtmlEntityOrUnicode => {
            SegmentKind::Markup
        }

        Linkstart | LinktextStart | Linktext | Linkend | UrlStart | UrlPrefix | UrlLink
        | UrlEmail | UrlEnd => SegmentKind::Markup,

        Bullet | Enumeration | Callout | Description | DescriptionEnd | Cellseparator
        | Admonition => SegmentKind::Markup,
    }
}
