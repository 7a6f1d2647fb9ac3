// Shared prompt-building utilities.
// Each handler defines its own template in a prompts.rs alongside it.

/// Replaces the first occurrence of `placeholder` in `template` with `text`.
///
/// `text` is inserted verbatim and later occurrences are left untouched.
pub fn fill_template(template: &str, placeholder: &str, text: &str) -> String {
    template.replacen(placeholder, text, 1)
}
