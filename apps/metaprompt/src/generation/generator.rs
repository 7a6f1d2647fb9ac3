//! Meta-prompt generation — turns a short task description into a prompt
//! template, optionally seeded with the caller's variable names.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{
    INSTRUCTIONS_STRUCTURE_OPEN, INSTRUCTIONS_TAG, METAPROMPT_TEMPLATE, TASK_PLACEHOLDER,
};
use crate::models::RecordKind;
use crate::workflow::{Invocation, Pipeline};

/// Lambda event for the prompt generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt_id: String,
    pub task: String,
    #[serde(default)]
    pub variables: Vec<String>,
}

pub const PIPELINE: Pipeline = Pipeline {
    kind: RecordKind::Prompt,
    template: METAPROMPT_TEMPLATE,
    placeholder: TASK_PLACEHOLDER,
    tag: INSTRUCTIONS_TAG,
    collapse_empty_tags: true,
};

/// Pre-fills the assistant turn: an `<Inputs>` block naming each variable as
/// `{UPPERCASE}` (omitted when there are none), then `<Instructions Structure>`.
pub fn assistant_partial(variables: &[String]) -> String {
    let mut partial = String::new();
    if !variables.is_empty() {
        let names: Vec<String> = variables
            .iter()
            .map(|v| format!("{{{}}}", v.to_uppercase()))
            .collect();
        partial.push_str("<Inputs>");
        partial.push_str(&names.join("\n"));
        partial.push_str("\n</Inputs>\n");
    }
    partial.push_str(INSTRUCTIONS_STRUCTURE_OPEN);
    partial
}

impl GenerationRequest {
    pub fn invocation(&self) -> Invocation<'_> {
        Invocation {
            record_id: &self.prompt_id,
            input: &self.task,
            assistant_partial: assistant_partial(&self.variables),
        }
    }
}
