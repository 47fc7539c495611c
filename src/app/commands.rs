use crate::app::events::Event;

/// Maps one line of terminal input to a widget event
///
/// Plain text replaces the search field; `:`-prefixed words are button
/// clicks. Unknown commands yield `None`.
pub fn parse_command(line: &str) -> Option<Event> {
    let Some(command) = line.strip_prefix(':') else {
        return Some(Event::Input(line.to_string()));
    };

    let (verb, arg) = match command.split_once(' ') {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (command.trim(), ""),
    };

    match verb {
        "add" => Some(Event::AddClicked),
        "recommend" => Some(Event::RecommendClicked),
        "clear" => Some(Event::ClearClicked),
        "outside" => Some(Event::ClickOutside),
        "quit" | "q" => Some(Event::Shutdown),
        "pick" => arg
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(|n| Event::SelectSuggestion(n - 1)),
        "remove" if !arg.is_empty() => Some(Event::RemoveFavorite(arg.to_string())),
        _ => None,
    }
}

pub const HELP: &str = "\
Type to search. Commands:
  :add            add the best match for the search text
  :pick N         add suggestion number N
  :remove NAME    remove a favorite
  :recommend      get recommendations for your favorites
  :clear          clear favorites and results
  :outside        dismiss suggestions
  :quit           exit";
