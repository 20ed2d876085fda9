//! Text transformation commands.

use anyhow::Result;
use serde_json::json;

use mailform::string_utils;

use crate::cli::TextCommands;
use crate::cmd::ui::Output;

pub fn cmd_text(out: &Output, command: TextCommands) -> Result<()> {
    match command {
        TextCommands::Snake { text } => converted(out, string_utils::to_snake_case(&text)),
        TextCommands::Camel { text } => converted(out, string_utils::to_camel_case(&text)),
        TextCommands::Pascal { text } => converted(out, string_utils::to_pascal_case(&text)),
        TextCommands::Kebab { text } => converted(out, string_utils::to_kebab_case(&text)),
        TextCommands::Squash { text } => {
            converted(out, string_utils::remove_extra_whitespace(&text))
        }
        TextCommands::Truncate { text, max, suffix } => {
            converted(out, string_utils::truncate_text(&text, max, &suffix))
        }
        TextCommands::Words { text } => {
            let count = string_utils::word_count(&text);
            out.result(&count.to_string(), json!({ "words": count }));
        }
        TextCommands::Mixed { text } => {
            let mixed = string_utils::is_mixed_case(&text);
            out.result(&mixed.to_string(), json!({ "mixed_case": mixed }));
        }
    }

    Ok(())
}

fn converted(out: &Output, text: String) {
    out.result(&text, json!({ "text": text }));
}
