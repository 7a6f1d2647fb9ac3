// LLM prompt template for task distillation.

/// Replaced with the caller's original prompt.
pub const ORIGINAL_PROMPT_PLACEHOLDER: &str = "{{ORIGINAL_PROMPT}}";

/// Tag wrapping the distilled task in the completion.
pub const NEW_PROMPT_TAG: &str = "new_prompt";

/// Opening of the assistant turn.
pub const DISTILLED_TASK_LEAD: &str = "Here is the distilled task:";

/// Distillation prompt template. Replace `{{ORIGINAL_PROMPT}}` before sending.
pub const DISTILL_TEMPLATE: &str = r#"You are an expert prompt engineer. You will be given a detailed prompt that someone wrote for an AI assistant. Your job is to work backwards from that prompt to the short task description its author started from.

Here is the original prompt:

<original_prompt>
{{ORIGINAL_PROMPT}}
</original_prompt>

Read the original prompt carefully and identify:
- the core goal the assistant is asked to accomplish
- the inputs the assistant is expected to receive
- any hard constraints on the output (format, length, tone, audience)

Then write a concise task description of one to three sentences that captures the goal, names the inputs, and keeps only the constraints that change what a good answer looks like. Do not restate examples, step-by-step instructions, or formatting scaffolding from the original prompt. Do not add requirements that are not present in the original prompt.

Write the distilled task inside <new_prompt> tags and write nothing else inside those tags."#;
