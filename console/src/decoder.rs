use super::commands::ConsoleInput;

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> ConsoleInput {
        let input = input.trim();
        match input {
            "" => ConsoleInput::Empty,
            "board" => ConsoleInput::Board,
            "moves" => ConsoleInput::Moves,
            "new" => ConsoleInput::NewGame,
            "options" => ConsoleInput::Options,
            "help" | "?" => ConsoleInput::Help,
            "quit" | "exit" => ConsoleInput::Quit,

            _ if input.starts_with("select ") => self.decode_select(input),
            _ if input.starts_with("set ") => self.decode_set(input),
            _ if input.starts_with("move ") => self.decode_move(&input[5..]),
            _ if looks_like_move(input) => self.decode_move(input),

            _ => ConsoleInput::Unknown(input.to_string()),
        }
    }

    fn decode_move(&self, text: &str) -> ConsoleInput {
        ConsoleInput::Move(text.trim().to_lowercase())
    }

    fn decode_select(&self, input: &str) -> ConsoleInput {
        let square = input["select".len()..].trim().to_lowercase();
        ConsoleInput::Select(square)
    }

    fn decode_set(&self, input: &str) -> ConsoleInput {
        // Parse: set <name> <value>
        // The name may contain spaces, the value is the last word.
        let rest = input["set".len()..].trim();
        match rest.rsplit_once(' ') {
            Some((name, value)) => ConsoleInput::SetOption {
                name: name.trim().to_string(),
                value: value.trim().to_string(),
            },
            None => ConsoleInput::Unknown(input.to_string()),
        }
    }
}

fn looks_like_move(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return false;
    }
    let square = |file: u8, rank: u8| {
        (b'a'..=b'h').contains(&file.to_ascii_lowercase()) && (b'1'..=b'8').contains(&rank)
    };
    square(bytes[0], bytes[1]) && square(bytes[2], bytes[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(Decoder.decode("board"), ConsoleInput::Board);
        assert_eq!(Decoder.decode("moves"), ConsoleInput::Moves);
        assert_eq!(Decoder.decode(" new "), ConsoleInput::NewGame);
        assert_eq!(Decoder.decode("options"), ConsoleInput::Options);
        assert_eq!(Decoder.decode("?"), ConsoleInput::Help);
        assert_eq!(Decoder.decode("quit"), ConsoleInput::Quit);
        assert_eq!(Decoder.decode("exit"), ConsoleInput::Quit);
        assert_eq!(Decoder.decode(""), ConsoleInput::Empty);
    }

    #[test]
    fn test_bare_move() {
        assert_eq!(
            Decoder.decode("e2e4"),
            ConsoleInput::Move("e2e4".to_string())
        );
        assert_eq!(
            Decoder.decode("E7E8Q"),
            ConsoleInput::Move("e7e8q".to_string())
        );
    }

    #[test]
    fn test_move_keyword() {
        assert_eq!(
            Decoder.decode("move g1f3"),
            ConsoleInput::Move("g1f3".to_string())
        );
    }

    #[test]
    fn test_select() {
        assert_eq!(
            Decoder.decode("select E2"),
            ConsoleInput::Select("e2".to_string())
        );
    }

    #[test]
    fn test_set_option_with_spaces_in_name() {
        assert_eq!(
            Decoder.decode("set Hanging Reply Bonus 75"),
            ConsoleInput::SetOption {
                name: "Hanging Reply Bonus".to_string(),
                value: "75".to_string(),
            }
        );
    }

    #[test]
    fn test_set_without_value() {
        assert!(matches!(Decoder.decode("set Bonus"), ConsoleInput::Unknown(_)));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Decoder.decode("e9e4"),
            ConsoleInput::Unknown(_)
        ));
        assert!(matches!(
            Decoder.decode("invalid command"),
            ConsoleInput::Unknown(_)
        ));
    }
}
