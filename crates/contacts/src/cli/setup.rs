use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contacts", bin_name = "contacts", version)]
#[command(about = "Interactive address book for the terminal", long_about = None)]
pub struct Cli {
    /// Backing file that added contacts are appended to
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding the backing file and contacts.toml
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Display,
    ByCity,
    ByState,
    Edit,
    Delete,
    ReadFile,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Display,
        MenuChoice::ByCity,
        MenuChoice::ByState,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::ReadFile,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Display => 2,
            MenuChoice::ByCity => 3,
            MenuChoice::ByState => 4,
            MenuChoice::Edit => 5,
            MenuChoice::Delete => 6,
            MenuChoice::ReadFile => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Contact",
            MenuChoice::Display => "Display Contacts",
            MenuChoice::ByCity => "View by City",
            MenuChoice::ByState => "View by State",
            MenuChoice::Edit => "Edit Contact",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::ReadFile => "Read backing file",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parses a menu answer. Surrounding whitespace is ignored.
    pub fn from_input(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_number() {
        for choice in MenuChoice::ALL {
            assert_eq!(
                MenuChoice::from_input(&choice.number().to_string()),
                Some(choice)
            );
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(MenuChoice::from_input(" 8 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_anything_else() {
        for input in ["", "0", "9", "-1", "one", "1.0", "12"] {
            assert_eq!(MenuChoice::from_input(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["contacts", "-f", "/tmp/book.txt", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/book.txt")));
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, None);

        let cli = Cli::try_parse_from(["contacts", "--data-dir", "/tmp/data"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/data")));
    }

    #[test]
    fn takes_no_positional_arguments() {
        assert!(Cli::try_parse_from(["contacts", "add"]).is_err());
    }
}
