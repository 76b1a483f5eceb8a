// Prompt text for resume critiques.

/// System instruction framing the model as a reviewer.
pub const CRITIQUE_SYSTEM: &str =
    "You are an expert resume reviewer with strong HR and recruitment experience.";

/// Target used in the fourth review dimension when no role is given.
pub const GENERAL_TARGET: &str = "general job applications";

/// Builds the user prompt. The resume text is embedded verbatim at the end of the
/// template, so nothing in it is interpreted as a placeholder.
pub fn critique_prompt(target: &str, resume_text: &str) -> String {
    format!(
        r#"
Please analyze the following resume and provide constructive feedback.

Focus on:
1. Content clarity and impact
2. Skills presentation
3. Experience descriptions
4. Improvements for {target}

Resume Content:
{resume_text}

Provide the feedback in a clear, structured format with actionable suggestions.
"#
    )
}
