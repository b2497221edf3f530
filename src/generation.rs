//! Prompt assembly for grounded answers

/// Answer returned when retrieval produces no context at all
pub const FALLBACK_ANSWER: &str = "I don't have enough information to answer that.";

/// Prompt builder for grounded question answering
pub struct PromptBuilder;

impl PromptBuilder {
    /// Join retrieved chunk texts into one context block
    pub fn build_context(documents: &[String]) -> String {
        documents.join("\n")
    }

    /// Build the strict grounding prompt.
    ///
    /// The model is told to answer only from the context and to say
    /// "I don't know" when the context does not contain the answer.
    pub fn build_grounded_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a strict AI assistant.
Answer ONLY using the context below.
If the answer is not in the context, say "I don't know".

Context:
{context}

Question:
{question}"#,
            context = context,
            question = question
        )
    }
}
