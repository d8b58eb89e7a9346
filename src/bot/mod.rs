mod format;
mod orchestrator;

pub use format::{
    format_decade_songs, format_duration_results, format_top_songs, help_message,
    WEEKS_INCREDIBLE, WEEKS_MAJOR_HIT, WEEKS_SOLID,
};
pub use orchestrator::{BotError, ChartBot};
