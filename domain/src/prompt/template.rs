//! Prompt templates for the answer flow

/// Fixed texts of the conversation
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction sent with every generation request
    pub fn system() -> &'static str {
        "Você é um assistente de IA que fornece informações sobre cidades brasileiras."
    }

    /// Reply when no (city, attribute) pair could be read from the question
    ///
    /// Unknown city and unknown attribute share this text.
    pub fn fallback() -> &'static str {
        "Desculpe, não consigo responder a essa pergunta."
    }

    /// Question asked when the binary is started without one
    pub fn demo_question() -> &'static str {
        "Quais as principais atrações de São Paulo?"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts_are_not_empty() {
        assert!(!PromptTemplate::system().is_empty());
        assert!(!PromptTemplate::fallback().is_empty());
    }

    #[test]
    fn test_demo_question_mentions_a_landmark_keyword() {
        assert!(PromptTemplate::demo_question().to_lowercase().contains("atrações"));
    }
}
