#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bon::Builder;
use serde::{Deserialize, Serialize};

/// The grader's three-part result: what the editor shows, what Kody says,
/// and whether the exercise is satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Display string shown in the editor's output pane.
    pub(crate) output:        String,
    /// In-character reaction from Kody.
    pub(crate) kody_response: String,
    /// Whether this submission unlocks level progression.
    #[builder(default)]
    pub(crate) success:       bool,
}

impl Verdict {
    /// Returns the display output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns Kody's narrative response.
    pub fn kody_response(&self) -> &str {
        &self.kody_response
    }

    /// Returns whether the exercise is satisfied.
    pub fn success(&self) -> bool {
        self.success
    }
}
