//! Scanning format strings into commands and tokens.
//!
//! A format string is split into maximal runs of one repeated character.
//! Each run is a [`Command`]; its letter picks the token and its length is
//! the field width. `"YY/MM/DD"` scans to `Y×2`, `/×1`, `M×2`, `/×1`, `D×2`.

/// A maximal run of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub letter: char,
    pub width: usize,
}

/// Split `format` into runs. Runs compare characters exactly, so `"Yy"`
/// is two commands.
pub fn scan(format: &str) -> Vec<Command> {
    let mut commands: Vec<Command> = Vec::new();
    for letter in format.chars() {
        match commands.last_mut() {
            Some(command) if command.letter == letter => command.width += 1,
            _ => commands.push(Command { letter, width: 1 }),
        }
    }
    commands
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric date part, zero-padded to `width`.
    Date { field: DateField, width: usize },
    /// Month name; full when `full`, otherwise the first three letters.
    MonthName { full: bool },
    /// Chapter title, or its number when `numeric` or untitled.
    Chapter { numeric: bool },
    /// Page title, or its number when `numeric` or untitled.
    Page { numeric: bool },
    /// File name of the page's primary source.
    FileName,
    /// One character of an unrecognized run, emitted as is.
    Literal(String),
}

impl Token {
    pub fn needs_release_date(&self) -> bool {
        matches!(self, Self::Date { .. } | Self::MonthName { .. })
    }
}

impl From<Command> for Token {
    fn from(command: Command) -> Self {
        let Command { letter, width } = command;
        let uppercase = letter.is_uppercase();
        let date = |field| Token::Date { field, width };
        match letter.to_ascii_lowercase() {
            'y' => date(DateField::Year),
            'm' => date(DateField::Month),
            'd' => date(DateField::Day),
            'h' => date(DateField::Hour),
            'u' => date(DateField::Minute),
            's' => date(DateField::Second),
            'n' => Token::MonthName { full: uppercase },
            'c' => Token::Chapter { numeric: uppercase },
            'p' => Token::Page { numeric: uppercase },
            'f' => Token::FileName,
            _ => Token::Literal(letter.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(letter: char, width: usize) -> Token {
        Token::from(Command { letter, width })
    }

    #[test]
    fn scan_splits_runs() {
        let runs: Vec<(char, usize)> = scan("YY/MM/DD")
            .iter()
            .map(|command| (command.letter, command.width))
            .collect();
        assert_eq!(runs, [('Y', 2), ('/', 1), ('M', 2), ('/', 1), ('D', 2)]);
    }

    #[test]
    fn scan_is_case_sensitive() {
        assert_eq!(scan("Yy").len(), 2);
        assert!(scan("").is_empty());
    }

    #[test]
    fn case_selects_form_for_names_only() {
        assert_eq!(token('c', 3), Token::Chapter { numeric: false });
        assert_eq!(token('C', 1), Token::Chapter { numeric: true });
        assert_eq!(token('N', 1), Token::MonthName { full: true });
        assert_eq!(token('m', 2), token('M', 2));
    }

    #[test]
    fn unknown_runs_collapse_to_one_character() {
        assert_eq!(token('-', 3), Token::Literal("-".to_string()));
        assert_eq!(token('Z', 1), Token::Literal("Z".to_string()));
    }
}
