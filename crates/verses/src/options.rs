// ABOUTME: Configuration options for the verse transformer including NbspStyle and Options.
// ABOUTME: TransformerBuilder provides a fluent API for constructing Transformer instances.

use std::fmt;

use crate::transformer::Transformer;

/// How non-breaking spaces are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NbspStyle {
    /// Literal U+00A0 characters.
    #[default]
    Literal,
    /// The `&nbsp;` named entity.
    Entity,
}

impl fmt::Display for NbspStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NbspStyle::Literal => "literal",
            NbspStyle::Entity => "entity",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for NbspStyle {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "entity" | "named" => NbspStyle::Entity,
            _ => NbspStyle::Literal,
        }
    }
}

/// Configuration options for the transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Replace `\uXXXX` escapes before parsing.
    pub unescape_unicode: bool,
    /// Treat recoverable HTML parse errors as fatal.
    pub strict: bool,
    pub nbsp: NbspStyle,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unescape_unicode: true,
            strict: false,
            nbsp: NbspStyle::Literal,
        }
    }
}

/// Builder for constructing Transformer instances with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct TransformerBuilder {
    opts: Options,
}

impl TransformerBuilder {
    /// Create a new TransformerBuilder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the `\uXXXX` pre-pass.
    pub fn unescape_unicode(mut self, enabled: bool) -> Self {
        self.opts.unescape_unicode = enabled;
        self
    }

    /// Reject fragments the HTML parser had to recover from.
    pub fn strict(mut self, strict: bool) -> Self {
        self.opts.strict = strict;
        self
    }

    /// Set the output form for non-breaking spaces.
    pub fn nbsp(mut self, nbsp: NbspStyle) -> Self {
        self.opts.nbsp = nbsp;
        self
    }

    /// Build the Transformer with the configured options.
    pub fn build(self) -> Transformer {
        Transformer::new(self.opts)
    }
}
