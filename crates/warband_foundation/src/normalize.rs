//! Text relaxation pipeline.
//!
//! Names typed by players are compared against catalog names through
//! progressively looser spellings:
//!
//! ```text
//! "Swordsmen"  ──relax_case──▶  "swordsmen"  ──relax_spelling──▶  "swordsman"
//! ```
//!
//! Every function here is pure and deterministic.

/// Stage 1: case relaxation.
#[must_use]
pub fn relax_case(text: &str) -> String {
    text.to_lowercase()
}

/// Stage 2: spelling relaxation. Expects the output of [`relax_case`].
///
/// - `men` becomes `man` (irregular plural)
/// - a trailing `es`, or failing that a trailing `s`, is stripped
/// - strings longer than four characters have runs of a repeated
///   character collapsed to one occurrence
#[must_use]
pub fn relax_spelling(text: &str) -> String {
    let mut relaxed = text.replace("men", "man");

    if relaxed.ends_with("es") {
        relaxed.truncate(relaxed.len() - 2);
    } else if relaxed.ends_with('s') {
        relaxed.pop();
    }

    if relaxed.chars().count() > 4 {
        relaxed = collapse_repeats(&relaxed);
    }

    relaxed
}

fn collapse_repeats(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut previous = None;
    for ch in text.chars() {
        if previous != Some(ch) {
            collapsed.push(ch);
        }
        previous = Some(ch);
    }
    collapsed
}

/// Replaces every whitespace run with a single space and trims both ends.
#[must_use]
pub fn deep_trim(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// Removes the articles "the", "a" and "an" when they start the text or
/// stand as whole words inside it.
///
/// Leading articles are matched without regard to case; inner articles are
/// matched exactly, so this is normally applied after [`relax_case`].
#[must_use]
pub fn relax_articles(text: &str) -> String {
    let mut value = text.to_string();
    for article in ARTICLES {
        let leading = format!("{article} ");
        while value.len() >= leading.len()
            && value.is_char_boundary(leading.len())
            && value[..leading.len()].eq_ignore_ascii_case(&leading)
        {
            value.drain(..leading.len());
        }
        let inner = format!(" {article} ");
        while value.contains(&inner) {
            value = value.replace(&inner, " ");
        }
    }
    value
}
