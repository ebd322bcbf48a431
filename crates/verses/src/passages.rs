// ABOUTME: Typed model of the passage API's HTML endpoint response.
// ABOUTME: Post-processes every passage in a response, keeping the original HTML when one fails.

use serde::{Deserialize, Serialize};

use crate::transformer::Transformer;

/// Navigation metadata for one returned passage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassageMeta {
    pub canonical: String,
    pub chapter_start: Vec<u32>,
    pub chapter_end: Vec<u32>,
    pub prev_verse: Option<u32>,
    pub next_verse: Option<u32>,
    pub prev_chapter: Option<Vec<u32>>,
    pub next_chapter: Option<Vec<u32>>,
}

/// A passage lookup response: one HTML fragment per requested reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassageResponse {
    pub query: String,
    pub passage_meta: Vec<PassageMeta>,
    pub passages: Vec<String>,
    pub copyright: String,
}

/// Outcome of processing a response's passages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub processed: usize,
    pub failed: usize,
}

impl ProcessReport {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl Transformer {
    /// Transform every passage in place.
    ///
    /// A passage that cannot be transformed keeps its original markup and is
    /// counted as failed.
    pub fn process_response(&self, resp: &mut PassageResponse) -> ProcessReport {
        let mut report = ProcessReport::default();

        for (index, passage) in resp.passages.iter_mut().enumerate() {
            match self.transform(passage) {
                Ok(processed) => {
                    *passage = processed;
                    report.processed += 1;
                }
                Err(err) => {
                    tracing::error!(index, query = %resp.query, error = %err, "error processing passage HTML");
                    report.failed += 1;
                }
            }
        }

        report
    }
}
