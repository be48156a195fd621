//! Classifies inbound text into what the bot should do with it.

/// What an inbound message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Welcome,
    Help,
    ClearHistory,
    Message(String),
    /// A `/command` the bot doesn't know. Holds the command name without
    /// the leading slash.
    Unrecognized(String),
    /// Blank text, nothing to do
    Empty,
}

impl Intent {
    /// Commands start with `/`. The first word is the command, an
    /// optional `@botname` suffix is dropped, and anything after it is
    /// ignored. Matching is case insensitive.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Intent::Empty;
        }

        let Some(rest) = trimmed.strip_prefix('/') else {
            return Intent::Message(text.to_string());
        };

        let word = rest.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or("").to_lowercase();

        match name.as_str() {
            "start" => Intent::Welcome,
            "help" => Intent::Help,
            "clear" => Intent::ClearHistory,
            _ => Intent::Unrecognized(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(Intent::parse("/start"), Intent::Welcome);
        assert_eq!(Intent::parse("/help"), Intent::Help);
        assert_eq!(Intent::parse("/clear"), Intent::ClearHistory);
    }

    #[test]
    fn test_command_with_bot_name_args_and_case() {
        assert_eq!(Intent::parse("/start@HomeoBot"), Intent::Welcome);
        assert_eq!(Intent::parse("/CLEAR now please"), Intent::ClearHistory);
        assert_eq!(Intent::parse("  /help  "), Intent::Help);
    }

    #[test]
    fn test_plain_text_is_message() {
        let text = "Головная боль справа, хуже от движения";
        assert_eq!(Intent::parse(text), Intent::Message(text.to_string()));
    }

    #[test]
    fn test_slash_inside_text_is_message() {
        assert_eq!(
            Intent::parse("Температура 38/39"),
            Intent::Message("Температура 38/39".to_string())
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Intent::parse("/settings"),
            Intent::Unrecognized("settings".to_string())
        );
        assert_eq!(Intent::parse("/"), Intent::Unrecognized(String::new()));
    }

    #[test]
    fn test_blank_text() {
        assert_eq!(Intent::parse(""), Intent::Empty);
        assert_eq!(Intent::parse(" \n\t"), Intent::Empty);
    }
}
