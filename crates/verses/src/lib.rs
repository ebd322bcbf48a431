// ABOUTME: Main library entry point for the passage verse transformer.
// ABOUTME: Re-exports the public API: Transformer, TransformerBuilder, Options, TransformError, passage types.

//! soap-verses - restructures Bible passage HTML so each verse is addressable.
//!
//! Passage fragments from the lookup API mark each verse only with a
//! `<b id="vBBCCCVVV">` number. The transformer groups every verse's content
//! under a `span.verse[data-ref]` wrapper (or tags poetic lines in place),
//! folds line-group marker runs into sections, and strips the marker ids.
//!
//! # Example
//!
//! ```
//! use soap_verses::{NbspStyle, Transformer};
//!
//! let transformer = Transformer::builder().nbsp(NbspStyle::Literal).build();
//! let html = transformer
//!     .transform(r#"<p><b id="v43003016">16</b> For God so loved the world.</p>"#)
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p><span class="verse" data-ref="43003016"><b>16</b>For God so loved the world.</span></p>"#
//! );
//! ```

pub mod dom;
pub mod error;
pub mod options;
pub mod passages;
pub mod transformer;
pub mod unescape;
pub mod verses;

pub use crate::error::TransformError;
pub use crate::options::{NbspStyle, Options, TransformerBuilder};
pub use crate::passages::{PassageMeta, PassageResponse, ProcessReport};
pub use crate::transformer::{process_passage_html, Transformer};
