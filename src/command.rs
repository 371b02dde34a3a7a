use crate::controller::{Event, Key};
use crate::error::CommandError;
use crate::model::SortMode;

/// What one line of input asks the browser to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Deliver these events to the controller, in order
    Dispatch(Vec<Event>),
    /// Paint the current state again
    Repaint,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  search <text>     set the search text and submit
  type <text>       set the search text without submitting
  submit            submit the search form
  cuisine <name>    toggle a cuisine filter
  meal <name>       toggle a meal filter
  sort <mode>       relevance, time-asc, time-desc or alpha
  clear             reset search, filters and sort
  open <n>          open card number n
  close             close the recipe (also: backdrop, esc)
  list              show the current page again
  help              show this help
  quit              leave the browser";

/// Parse one line typed at the prompt.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let events = match word.to_lowercase().as_str() {
        "" | "list" | "ls" => return Ok(Command::Repaint),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "search" | "/" => vec![Event::SearchInput(rest.to_string()), Event::Submit],
        "type" => vec![Event::SearchInput(rest.to_string())],
        "submit" => vec![Event::Submit],
        "cuisine" => vec![Event::ToggleCuisine(
            required(rest, "cuisine", "a cuisine name")?.to_string(),
        )],
        "meal" => vec![Event::ToggleMeal(
            required(rest, "meal", "a meal name")?.to_string(),
        )],
        "sort" => {
            let mode: SortMode = required(rest, "sort", "a sort mode")?.parse()?;
            vec![Event::SortChanged(mode)]
        }
        "clear" => vec![Event::Clear],
        "open" => {
            let number = required(rest, "open", "a card number")?;
            vec![Event::ActivateCard(card_position(number)?)]
        }
        "close" => vec![Event::CloseDetail],
        "backdrop" => vec![Event::BackdropClick],
        "esc" | "escape" => vec![Event::KeyDown(Key::Escape)],
        _ => return Err(CommandError::UnknownCommand(word.to_string())),
    };

    Ok(Command::Dispatch(events))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

// Cards are numbered from 1 at the prompt
fn card_position(number: &str) -> Result<usize, CommandError> {
    match number.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::InvalidCardNumber(number.to_string())),
    }
}
