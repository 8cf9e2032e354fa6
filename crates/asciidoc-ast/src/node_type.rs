use std::fmt;
use std::str::FromStr;

/// Namespace prefix the parser puts in front of every element and token type.
pub const TYPE_PREFIX: &str = "AsciiDoc:";

macro_rules! node_types {
    ($($(#[$meta:meta])* $variant:ident => $tag:literal,)*) => {
        /// Element and token types emitted by the `asciidoc-ast` parser.
        ///
        /// The set is closed: a tag outside of it is rejected when the tree is built.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum NodeType {
            $($(#[$meta])* $variant,)*
        }

        impl NodeType {
            /// Every known node type, in declaration order.
            pub const ALL: &'static [NodeType] = &[$(NodeType::$variant,)*];

            /// Canonical tag name, without the namespace prefix.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeType::$variant => $tag,)*
                }
            }
        }

        impl FromStr for NodeType {
            type Err = UnknownNodeType;

            /// Parses a tag, with or without the `AsciiDoc:` prefix.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let tag = s.strip_prefix(TYPE_PREFIX).unwrap_or(s);
                match tag {
                    $($tag => Ok(NodeType::$variant),)*
                    _ => Err(UnknownNodeType(tag.to_string())),
                }
            }
        }
    };
}

node_types! {
    // Elements
    File => "FILE",
    AsciidocSection => "ASCIIDOC_SECTION",
    Heading => "HEADING",
    Block => "BLOCK",
    BlockMacro => "BLOCK_MACRO",
    BlockAttributes => "BLOCK_ATTRIBUTES",
    AsciidocBlockid => "ASCIIDOC_BLOCKID",
    AsciidocAttributeDeclaration => "ASCIIDOC_ATTRIBUTE_DECLARATION",
    AttributeDeclarationName => "ATTRIBUTE_DECLARATION_NAME",
    AttributeInBrackets => "ATTRIBUTE_IN_BRACKETS",
    AttributeRef => "ATTRIBUTE_REF",
    InlineMacro => "INLINE_MACRO",
    Listing => "LISTING",
    List => "LIST",
    ListItem => "LIST_ITEM",
    Link => "LINK",
    Url => "URL",
    Ref => "REF",

    // Prose
    /// Running text.
    Text => "TEXT",
    /// Whitespace between tokens.
    WhiteSpace => "WHITE_SPACE",

    // Line structure
    EmptyLine => "EMPTY_LINE",
    LineBreak => "LINE_BREAK",
    HardBreak => "HARD_BREAK",
    Continuation => "CONTINUATION",
    EndOfSentence => "END_OF_SENTENCE",
    LineComment => "LINE_COMMENT",
    BlockComment => "BLOCK_COMMENT",

    // Headings and titles
    HeadingToken => "HEADING_TOKEN",
    HeadingOldstyle => "HEADING_OLDSTYLE",
    TitleToken => "TITLE_TOKEN",

    // Delimited blocks
    BlockDelimiter => "BLOCK_DELIMITER",
    ListingBlockDelimiter => "LISTING_BLOCK_DELIMITER",
    ListingText => "LISTING_TEXT",
    LiteralBlockDelimiter => "LITERAL_BLOCK_DELIMITER",
    LiteralBlock => "LITERAL_BLOCK",
    QuoteBlockDelimiter => "QUOTE_BLOCK_DELIMITER",
    ExampleBlockDelimiter => "EXAMPLE_BLOCK_DELIMITER",
    SidebarBlockDelimiter => "SIDEBAR_BLOCK_DELIMITER",
    CommentBlockDelimiter => "COMMENT_BLOCK_DELIMITER",
    PassthroughBlockDelimiter => "PASSTHROUGH_BLOCK_DELIMITER",
    PassthroughContent => "PASSTHROUGH_CONTENT",
    FrontmatterDelimiter => "FRONTMATTER_DELIMITER",
    Frontmatter => "FRONTMATTER",

    // Macros
    BlockMacroId => "BLOCK_MACRO_ID",
    BlockMacroBody => "BLOCK_MACRO_BODY",
    InlineMacroId => "INLINE_MACRO_ID",
    InlineMacroBody => "INLINE_MACRO_BODY",

    // Attribute lists
    BlockAttrsStart => "BLOCK_ATTRS_START",
    BlockAttrsEnd => "BLOCK_ATTRS_END",
    AttrsStart => "ATTRS_START",
    AttrsEnd => "ATTRS_END",
    InlineAttrsStart => "INLINE_ATTRS_START",
    InlineAttrsEnd => "INLINE_ATTRS_END",
    AttrName => "ATTR_NAME",
    AttrValue => "ATTR_VALUE",
    AttrListSep => "ATTR_LIST_SEP",
    Assignment => "ASSIGNMENT",
    Separator => "SEPARATOR",

    // Attribute declarations and references
    AttributeNameStart => "ATTRIBUTE_NAME_START",
    AttributeName => "ATTRIBUTE_NAME",
    AttributeNameEnd => "ATTRIBUTE_NAME_END",
    AttributeVal => "ATTRIBUTE_VAL",
    AttributeContinuation => "ATTRIBUTE_CONTINUATION",
    AttributeRefStart => "ATTRIBUTE_REF_START",
    AttributeRefEnd => "ATTRIBUTE_REF_END",

    // Ids and cross references
    Blockidstart => "BLOCKIDSTART",
    Blockid => "BLOCKID",
    Blockidend => "BLOCKIDEND",
    Blockreftext => "BLOCKREFTEXT",
    Inlineidstart => "INLINEIDSTART",
    Inlineidend => "INLINEIDEND",
    Refstart => "REFSTART",
    Reftext => "REFTEXT",
    Refend => "REFEND",

    // Inline formatting
    BoldStart => "BOLD_START",
    Bold => "BOLD",
    BoldEnd => "BOLD_END",
    ItalicStart => "ITALIC_START",
    Italic => "ITALIC",
    ItalicEnd => "ITALIC_END",
    MonoStart => "MONO_START",
    Mono => "MONO",
    MonoEnd => "MONO_END",
    PassthroughInlineStart => "PASSTHROUGH_INLINE_START",
    PassthroughInline => "PASSTHROUGH_INLINE",
    PassthroughInlineEnd => "PASSTHROUGH_INLINE_END",

    // Punctuation
    SingleQuote => "SINGLE_QUOTE",
    DoubleQuote => "DOUBLE_QUOTE",
    TypographicDoubleQuoteStart => "TYPOGRAPHIC_DOUBLE_QUOTE_START",
    TypographicDoubleQuoteEnd => "TYPOGRAPHIC_DOUBLE_QUOTE_END",
    Lparen => "LPAREN",
    Rparen => "RPAREN",
    Lbracket => "LBRACKET",
    Rbracket => "RBRACKET",
    Lt => "LT",
    Gt => "GT",
    HtmlEntityOrUnicode => "HTML_ENTITY_OR_UNICODE",

    // Links
    Linkstart => "LINKSTART",
    LinktextStart => "LINKTEXT_START",
    Linktext => "LINKTEXT",
    Linkend => "LINKEND",
    UrlStart => "URL_START",
    UrlPrefix => "URL_PREFIX",
    UrlLink => "URL_LINK",
    UrlEmail => "URL_EMAIL",
    UrlEnd => "URL_END",

    // Lists, tables, admonitions
    Bullet => "BULLET",
    Enumeration => "ENUMERATION",
    Callout => "CALLOUT",
    Description => "DESCRIPTION",
    DescriptionEnd => "DESCRIPTION_END",
    Cellseparator => "CELLSEPARATOR",
    Admonition => "ADMONITION",
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type tag outside of [`NodeType`]. Holds the tag without its namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeType(pub String);

impl fmt::Display for UnknownNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown node type `{}`", self.0)
    }
}

impl std::error::Error for UnknownNodeType {}
