mod hint;
mod intent;
mod rules;

pub use hint::parse_translator_hint;
pub use intent::{Intent, ParsedQuery, MAX_RESULT_COUNT};
pub use rules::{parse, resolve_decade_token, strip_stop_words};
