//! Instruction prompt sent to the completion endpoint

/// Build the translation instruction. Values are substituted verbatim.
pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "Translate this text from {source_language} to {target_language} and return only the \
         translated text without additional comments or explanations: {text}"
    )
}
