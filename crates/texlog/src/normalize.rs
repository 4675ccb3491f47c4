//! Clean-up of a raw lookahead window before a message is cut out of it.
//!
//! Every function here is pure: the same window always normalizes to the same
//! lines.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// The help text LaTeX prints after every error in interactive mode.
static HELP_PROMPT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^See the LaTeX manual or LaTeX Companion for explanation\.\nType\s+H <return>\s+for immediate help\.\n \.\.\.[ \t]*(?:\n|\z)",
    )
    .expect("help prompt pattern is valid")
});

/// A line break inside a sentence followed by a line that opens with `{`.
static DANGLING_BRACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([^.\s])[ \t]*\n[ \t]*(\{[^\n]*)(?:\n|\z)")
        .expect("dangling brace pattern is valid")
});

/// Runs every normalization step over a window of raw log lines.
pub fn normalize(window: &[&str]) -> Vec<String> {
    let text = window.join("\n");
    let text = strip_help_prompt(&text);
    let text = attach_brace_groups(&text);
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    reflow(&lines)
}

/// Undoes the engine's fixed-width wrapping and standardizes paragraph breaks.
///
/// `reflow(&reflow(lines)) == reflow(lines)` for any input.
pub fn reflow(lines: &[String]) -> Vec<String> {
    break_sentences(&join_wrapped(lines))
}

fn strip_help_prompt(text: &str) -> Cow<'_, str> {
    HELP_PROMPT.replace_all(text, "")
}

fn attach_brace_groups(text: &str) -> Cow<'_, str> {
    DANGLING_BRACE.replace_all(text, "${1}${2}\n\n")
}

fn join_wrapped(lines: &[String]) -> Vec<String> {
    let mut joined: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        if let Some(prev) = joined.last_mut()
            && ends_mid_sentence(prev)
            && continues_sentence(line)
        {
            prev.push_str(line);
            continue;
        }
        joined.push(line.clone());
    }
    joined
}

fn break_sentences(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut iter = lines.iter().peekable();
    while let Some(line) = iter.next() {
        if is_blank(line) {
            out.push(String::new());
            continue;
        }
        let trimmed = line.trim_end();
        if !trimmed.ends_with('.') {
            out.push(line.clone());
            continue;
        }
        out.push(trimmed.to_string());
        if iter.peek().is_some_and(|next| !is_blank(next)) {
            out.push(String::new());
        }
    }
    out
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_soft(c: char) -> bool {
    c.is_ascii_lowercase() || c == ' ' || c == ','
}

fn ends_mid_sentence(line: &str) -> bool {
    !is_blank(line) && line.ends_with(is_soft)
}

fn continues_sentence(line: &str) -> bool {
    !is_blank(line) && line.starts_with(is_soft)
}
