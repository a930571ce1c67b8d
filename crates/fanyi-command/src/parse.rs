use std::num::IntErrorKind;

use fanyi_core::{LanguageCatalog, contains_cjk, split_args};
use fanyi_history::MAX_RECORDS;

pub const DEFAULT_HISTORY_COUNT: usize = 5;

const HELP_KEYWORDS: [&str; 2] = ["help", "帮助"];
const CODE_KEYWORDS: [&str; 2] = ["code", "代码"];
const HISTORY_KEYWORDS: [&str; 2] = ["history", "历史"];

/// What a command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Nothing to work with at all
    Empty,
    Help,
    Codes,
    History { count: usize },
    Translate { text: &'a str, to: String },
    /// Bare command word or otherwise unusable input
    Usage,
}

/// Interpret a full command line, command word included
pub fn parse<'a>(catalog: &LanguageCatalog, message: &'a str) -> Command<'a> {
    let message = message.trim();
    if message.is_empty() {
        return Command::Empty;
    }

    let args = split_args(message, 3);

    match args.as_slice() {
        [_, keyword] if HELP_KEYWORDS.contains(keyword) => Command::Help,
        [_, keyword] if CODE_KEYWORDS.contains(keyword) => Command::Codes,
        [_, keyword, rest @ ..] if HISTORY_KEYWORDS.contains(keyword) => Command::History {
            count: history_count(rest.first().copied()),
        },
        [_, text] => auto_detect(*text),
        [_, lang, text] if catalog.is_recognized(lang) => Command::Translate {
            text: *text,
            to: catalog.code_for(lang).unwrap_or(*lang).to_string(),
        },
        [_, _, _] => {
            // Not a language after all: the whole line after the command word
            // is the text, the would-be language included
            match split_args(message, 2).as_slice() {
                [_, full_text] => auto_detect(*full_text),
                _ => Command::Usage,
            }
        }
        _ => Command::Usage,
    }
}

fn auto_detect(text: &str) -> Command<'_> {
    let to = if contains_cjk(text) { "en" } else { "zh-CN" };
    Command::Translate {
        text,
        to: to.to_string(),
    }
}

/// Requested record count, clamped to `1..=MAX_RECORDS`. Full-width digits
/// are accepted; anything else that is not an integer falls back to the default.
fn history_count(arg: Option<&str>) -> usize {
    let Some(arg) = arg else {
        return DEFAULT_HISTORY_COUNT;
    };

    let ascii: String = arg
        .chars()
        .map(|ch| match ch {
            '０'..='９' => char::from(b'0' + (ch as u32 - '０' as u32) as u8),
            '＋' => '+',
            '－' => '-',
            _ => ch,
        })
        .collect();

    match ascii.parse::<i64>() {
        Ok(n) => n.clamp(1, MAX_RECORDS as i64) as usize,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => MAX_RECORDS,
            IntErrorKind::NegOverflow => 1,
            _ => DEFAULT_HISTORY_COUNT,
        },
    }
}
