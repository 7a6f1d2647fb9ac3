//! Task distillation — reduces a long prompt to the task it was written for.

use serde::{Deserialize, Serialize};

use crate::distillation::prompts::{
    DISTILLED_TASK_LEAD, DISTILL_TEMPLATE, NEW_PROMPT_TAG, ORIGINAL_PROMPT_PLACEHOLDER,
};
use crate::models::RecordKind;
use crate::workflow::{Invocation, Pipeline};

/// Lambda event for the task distiller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistillationRequest {
    pub task_id: String,
    pub original_prompt: String,
}

pub const PIPELINE: Pipeline = Pipeline {
    kind: RecordKind::Task,
    template: DISTILL_TEMPLATE,
    placeholder: ORIGINAL_PROMPT_PLACEHOLDER,
    tag: NEW_PROMPT_TAG,
    collapse_empty_tags: false,
};

impl DistillationRequest {
    pub fn invocation(&self) -> Invocation<'_> {
        Invocation {
            record_id: &self.task_id,
            input: &self.original_prompt,
            assistant_partial: DISTILLED_TASK_LEAD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_fixed_partial() {
        let request = DistillationRequest {
            task_id: "t-1".to_string(),
            original_prompt: "You are a poet. Write a haiku about {$TOPIC}.".to_string(),
        };
        let completion_request = PIPELINE.build_request(&request.invocation());

        assert_eq!(
            completion_request.assistant_partial,
            "Here is the distilled task:"
        );
        assert!(completion_request.user_prompt.contains(
            "<original_prompt>\nYou are a poet. Write a haiku about {$TOPIC}.\n</original_prompt>"
        ));
    }

    #[test]
    fn test_extracts_trimmed_new_prompt() {
        assert_eq!(
            PIPELINE
                .extract("<new_prompt>  Write a haiku.  </new_prompt>")
                .unwrap(),
            "Write a haiku."
        );
    }

    #[test]
    fn test_missing_new_prompt_is_error() {
        let err = PIPELINE.extract("Write a haiku.").unwrap_err();
        assert_eq!(err.to_string(), "No <new_prompt> tags found in the response");
    }

    #[test]
    fn test_request_deserializes_camel_case_fields() {
        let request: DistillationRequest =
            serde_json::from_str(r#"{"taskId": "t-7", "originalPrompt": "Be brief."}"#).unwrap();
        assert_eq!(request.task_id, "t-7");
        assert_eq!(request.original_prompt, "Be brief.");
    }
}
