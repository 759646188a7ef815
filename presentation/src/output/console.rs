//! Console output formatter for answers and session state

use cityguide_application::{Answer, GenerationError};
use cityguide_domain::Turn;
use colored::Colorize;
use serde::Serialize;

/// JSON shape of a single-question answer
#[derive(Serialize)]
struct JsonAnswer<'a> {
    question: &'a str,
    answer: &'a str,
    grounded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fact: Option<&'a str>,
}

/// Formats answers, history and city listings for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Plain answer text; fallbacks are dimmed.
    pub fn format_answer(answer: &Answer) -> String {
        if answer.is_fallback() {
            answer.text.dimmed().to_string()
        } else {
            answer.text.clone()
        }
    }

    /// Answer plus the fact it was grounded on (REPL display)
    pub fn format_answer_with_source(answer: &Answer) -> String {
        match &answer.grounding {
            Some(grounding) => format!(
                "{}\n{}",
                answer.text,
                format!("[{}] {}", grounding.city, grounding.fact).dimmed()
            ),
            None => Self::format_answer(answer),
        }
    }

    pub fn format_json(question: &str, answer: &Answer) -> String {
        let json = JsonAnswer {
            question,
            answer: &answer.text,
            grounded: !answer.is_fallback(),
            city: answer.grounding.as_ref().map(|g| g.city.as_str()),
            fact: answer.grounding.as_ref().map(|g| g.fact.as_str()),
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_history(turns: &[Turn]) -> String {
        if turns.is_empty() {
            return "No conversation yet.".dimmed().to_string();
        }

        let mut output = String::new();
        for turn in turns {
            output.push_str(&format!(
                "{} {}\n",
                format!("#{} Q:", turn.sequence).cyan().bold(),
                turn.user
            ));
            output.push_str(&format!("{}\n", Self::indent(&turn.assistant, "   ")));
        }
        output
    }

    pub fn format_cities<S: AsRef<str>>(names: &[S]) -> String {
        let mut output = format!("{}\n", "Known cities:".cyan().bold());
        for name in names {
            output.push_str(&format!("  - {}\n", name.as_ref()));
        }
        output
    }

    pub fn format_error(error: &GenerationError) -> String {
        let hint = if error.is_auth_error() {
            "\n  Check the API key (GROQ_API_KEY by default)."
        } else {
            ""
        };
        format!("{} {}{}", "Error:".red().bold(), error, hint)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cityguide_application::Grounding;
    use cityguide_domain::AttributeKind;

    fn grounded() -> Answer {
        Answer {
            text: "Salvador tem 2,9 milhões de habitantes.".to_string(),
            grounding: Some(Grounding {
                city: "Salvador".to_string(),
                attribute: AttributeKind::Population,
                fact: "Population: 2,9 milhões".to_string(),
                sequence: 0,
            }),
        }
    }

    fn fallback() -> Answer {
        Answer {
            text: "Desculpe, não consigo responder a essa pergunta.".to_string(),
            grounding: None,
        }
    }

    #[test]
    fn test_json_grounded() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json("q", &grounded())).unwrap();
        assert_eq!(json["question"], "q");
        assert_eq!(json["grounded"], true);
        assert_eq!(json["city"], "Salvador");
        assert_eq!(json["fact"], "Population: 2,9 milhões");
    }

    #[test]
    fn test_json_fallback_omits_grounding() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json("q", &fallback())).unwrap();
        assert_eq!(json["grounded"], false);
        assert!(json.get("city").is_none());
        assert_eq!(json["answer"], "Desculpe, não consigo responder a essa pergunta.");
    }

    #[test]
    fn test_answer_with_source_mentions_fact() {
        let output = ConsoleFormatter::format_answer_with_source(&grounded());
        assert!(output.starts_with("Salvador tem 2,9 milhões de habitantes."));
        assert!(output.contains("Population: 2,9 milhões"));
    }

    #[test]
    fn test_history_lists_turns_in_order() {
        let turns = vec![
            Turn::new(0, "primeira", "resposta um"),
            Turn::new(1, "segunda", "resposta dois"),
        ];
        let output = ConsoleFormatter::format_history(&turns);
        let first = output.find("primeira").unwrap();
        let second = output.find("segunda").unwrap();
        assert!(first < second);
        assert!(output.contains("   resposta dois"));
    }

    #[test]
    fn test_cities_listing() {
        let output = ConsoleFormatter::format_cities(&["Recife", "Natal"]);
        assert!(output.contains("  - Recife\n  - Natal\n"));
    }

    #[test]
    fn test_auth_error_hint() {
        let error = GenerationError::Rejected {
            status: 401,
            message: "Invalid API Key".to_string(),
        };
        assert!(ConsoleFormatter::format_error(&error).contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
