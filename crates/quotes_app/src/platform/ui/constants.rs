use std::time::Duration;

pub const PROMPT: &str = "> ";
pub const NO_QUOTES_TEXT: &str = "No quotes available in this category.";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";

pub const HELP_TEXT: &str = "\
Commands:
  show                       show a new random quote
  add <text> | <category>    add a quote
  filter <category|all>      restrict random quotes to one category
  categories                 list categories
  last                       show the last viewed quote
  export [dir]               write quotes.json (default: current directory)
  import <file>              append quotes from a JSON file
  sync                       sync with the server now
  help                       show this help
  quit                       exit";

/// One notification time-unit.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
/// How long the loop waits for input before polling the engine.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
