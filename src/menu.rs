// 🧭 Menu - the six-way choice presented by the command loop

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MENU_TEXT: &str = "\
1. add new contact
2. search contact
3. display contact
4. edit contact
5. delete contact
6. exit";

pub const CHOICE_PROMPT: &str = "Enter your choice : (1 to 6) : ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    #[error("Invalid choice '{0}': please enter a number from 1 to 6")]
    NotANumber(String),
    #[error("Invalid choice {0}: please enter a number from 1 to 6")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Display,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Display,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Menu code shown to the user
    pub fn code(&self) -> i64 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Search => 2,
            MenuChoice::Display => 3,
            MenuChoice::Edit => 4,
            MenuChoice::Delete => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.code() == code)
    }

    pub fn title(&self) -> &str {
        match self {
            MenuChoice::Add => "add new contact",
            MenuChoice::Search => "search contact",
            MenuChoice::Display => "display contact",
            MenuChoice::Edit => "edit contact",
            MenuChoice::Delete => "delete contact",
            MenuChoice::Exit => "exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.code(), self.title())
    }
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let code: i64 = trimmed
            .parse()
            .map_err(|_| ChoiceError::NotANumber(trimmed.to_string()))?;

        MenuChoice::from_code(code).ok_or(ChoiceError::OutOfRange(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::Add));
        assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::Search));
        assert_eq!("3\n".parse::<MenuChoice>(), Ok(MenuChoice::Display));
        assert_eq!("4".parse::<MenuChoice>(), Ok(MenuChoice::Edit));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Delete));
        assert_eq!("6".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "abc".parse::<MenuChoice>(),
            Err(ChoiceError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            "".parse::<MenuChoice>(),
            Err(ChoiceError::NotANumber(String::new()))
        );
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!("0".parse::<MenuChoice>(), Err(ChoiceError::OutOfRange(0)));
        assert_eq!("9".parse::<MenuChoice>(), Err(ChoiceError::OutOfRange(9)));
        assert_eq!("-1".parse::<MenuChoice>(), Err(ChoiceError::OutOfRange(-1)));
    }

    #[test]
    fn test_menu_text_matches_choices() {
        let rendered: Vec<String> = MenuChoice::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered.join("\n"), MENU_TEXT);
    }
}
