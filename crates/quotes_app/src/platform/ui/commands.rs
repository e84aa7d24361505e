use std::path::PathBuf;

use quotes_core::Filter;

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Add { text: String, category: String },
    Filter(Filter),
    Categories,
    Last,
    Export(Option<PathBuf>),
    Import(PathBuf),
    Sync,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "show" | "new" => Command::Show,
        "add" => {
            // Blank halves are passed through so validation reports them.
            let (text, category) = rest.split_once('|').unwrap_or((rest, ""));
            Command::Add {
                text: text.to_string(),
                category: category.to_string(),
            }
        }
        "filter" => Command::Filter(Filter::parse(rest)),
        "categories" | "cats" => Command::Categories,
        "last" => Command::Last,
        "export" => Command::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "import" if rest.is_empty() => Command::Invalid("usage: import <file>".to_string()),
        "import" => Command::Import(PathBuf::from(rest)),
        "sync" => Command::Sync,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command `{other}`")),
    }
}
