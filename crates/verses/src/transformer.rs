// ABOUTME: The Transformer facade that runs unescape -> parse -> verse walk -> serialize.
// ABOUTME: Also provides process_passage_html as a default-configured convenience entry point.

use crate::dom::{parse_fragment, render_nodes};
use crate::error::TransformError;
use crate::options::{Options, TransformerBuilder};
use crate::unescape::unescape_unicode;
use crate::verses::process_fragment;

/// Rewrites passage HTML so every verse is individually addressable.
///
/// Immutable once built; each call owns the tree it works on, so one
/// transformer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    opts: Options,
}

impl Transformer {
    /// Create a new TransformerBuilder for configuring the transformer.
    pub fn builder() -> TransformerBuilder {
        TransformerBuilder::new()
    }

    /// Create a new Transformer with the given options.
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Transform one passage fragment.
    ///
    /// Fails only when the fragment cannot be parsed or the result cannot be
    /// rendered; no partial output is returned in either case.
    pub fn transform(&self, html: &str) -> Result<String, TransformError> {
        let input = if self.opts.unescape_unicode {
            unescape_unicode(html)
        } else {
            html.into()
        };

        let nodes = parse_fragment(&input, self.opts.strict)?;
        let nodes = process_fragment(nodes);
        let output = render_nodes(&nodes, self.opts.nbsp)?;

        tracing::debug!(
            input_bytes = html.len(),
            output_bytes = output.len(),
            top_level_nodes = nodes.len(),
            "transformed passage"
        );

        Ok(output)
    }
}

/// Transform a passage fragment with default options.
pub fn process_passage_html(html: &str) -> Result<String, TransformError> {
    Transformer::default().transform(html)
}
