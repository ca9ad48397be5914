use console::Style;
use once_cell::sync::Lazy;

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static COMMAND_NAME: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static PARAMS: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().bold());
