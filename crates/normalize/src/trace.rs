//! Stage-by-stage record of a normalization run.
//!
//! [`inspect`](crate::inspect) produces a [`NormalizationTrace`] holding the
//! text exactly as each stage left it, followed by the finished output. It is
//! meant for debugging rule interactions; `output` is always identical to what
//! [`normalize`](crate::normalize) returns for the same input.
//!
//! ```rust
//! use normalize::{inspect, Stage};
//!
//! let trace = inspect("Wow!!! Really??").unwrap();
//!
//! assert_eq!(trace.stages.len(), 5);
//! assert_eq!(trace.stages[0].stage, Stage::SpacingAfter);
//! assert_eq!(trace.stages[0].text, "Wow! ! ! Really? ? ");
//! assert_eq!(trace.output, "Wow! Really?");
//! ```

use serde::{Deserialize, Serialize};

use crate::pipeline::Stage;

/// The text after one stage ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Every intermediate value of one normalization run.
///
/// ```text
/// NormalizationTrace
/// ├── input: String              # Text as received
/// ├── stages: Vec<StageOutput>   # One entry per stage, in pipeline order
/// └── output: String             # After the finishing steps
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationTrace {
    pub input: String,
    pub stages: Vec<StageOutput>,
    pub output: String,
}

impl NormalizationTrace {
    /// Text as left by `stage`, if it ran.
    pub fn after(&self, stage: Stage) -> Option<&str> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.text.as_str())
    }
}
