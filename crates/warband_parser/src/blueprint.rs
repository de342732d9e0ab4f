//! Blueprint tokenization.
//!
//! A blueprint is free text of the form `<qty> <name> <qty> <name> ...`.
//! Whitespace runs are collapsed before scanning. A name runs until
//! whitespace followed by a digit, or the end of input, so names may
//! themselves contain digits ("5 A1 5 B1").

use std::fmt;

use warband_foundation::deep_trim;

/// One `(quantity, name)` pair of a blueprint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlueprintToken {
    /// Number of units requested.
    pub quantity: u32,
    /// Raw name as typed, trimmed.
    pub name: String,
}

impl BlueprintToken {
    /// Creates a token.
    #[must_use]
    pub fn new(quantity: u32, name: impl Into<String>) -> Self {
        Self {
            quantity,
            name: name.into(),
        }
    }
}

/// The result of parsing a blueprint.
///
/// An invalid blueprint holds no tokens at all: parsing never yields a
/// partial token list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blueprint {
    source: String,
    tokens: Vec<BlueprintToken>,
    is_good: bool,
}

impl Blueprint {
    /// Builds a valid blueprint from tokens.
    ///
    /// Returns `None` if a trimmed name is blank or would not read back as
    /// one name (see [`is_parseable_name`]).
    #[must_use]
    pub fn from_tokens(tokens: Vec<BlueprintToken>) -> Option<Self> {
        let tokens: Vec<BlueprintToken> = tokens
            .into_iter()
            .map(|token| BlueprintToken::new(token.quantity, deep_trim(&token.name)))
            .collect();
        if !tokens.iter().all(|token| is_parseable_name(&token.name)) {
            return None;
        }
        let mut blueprint = Self {
            source: String::new(),
            tokens,
            is_good: true,
        };
        blueprint.source = blueprint.to_string();
        Some(blueprint)
    }

    /// The whitespace-normalized input.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the input followed the grammar.
    #[must_use]
    pub fn is_good(&self) -> bool {
        self.is_good
    }

    /// Parsed tokens, in input order.
    #[must_use]
    pub fn tokens(&self) -> &[BlueprintToken] {
        &self.tokens
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Canonical `<qty> <name> ...` form; empty for an invalid blueprint.
impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", token.quantity, token.name)?;
        }
        Ok(())
    }
}

/// Whether `name`, written after a quantity, parses back as that same name.
///
/// The scanner ends a name at whitespace followed by a digit, so "Guard 2"
/// and "2nd Guard" cannot be written in a blueprint.
#[must_use]
pub fn is_parseable_name(name: &str) -> bool {
    !name.is_empty()
        && deep_trim(name) == name
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && !name
            .as_bytes()
            .windows(2)
            .any(|pair| pair[0] == b' ' && pair[1].is_ascii_digit())
}

/// Parses blueprint text.
pub struct BlueprintParser;

impl BlueprintParser {
    /// Parses `input` into a [`Blueprint`].
    ///
    /// - Collapses whitespace runs to single spaces and trims the ends
    /// - Fails if the text does not start with a digit
    /// - Fails if any name is empty or a quantity overflows
    ///
    /// Empty input is a valid blueprint with no tokens.
    #[must_use]
    pub fn parse(input: &str) -> Blueprint {
        let source = deep_trim(input);
        match scan(&source) {
            Some(tokens) => Blueprint {
                source,
                tokens,
                is_good: true,
            },
            None => {
                tracing::trace!(%source, "blueprint rejected");
                Blueprint {
                    source,
                    tokens: Vec::new(),
                    is_good: false,
                }
            }
        }
    }
}

fn scan(text: &str) -> Option<Vec<BlueprintToken>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while chars.peek().is_some() {
        let mut quantity: u32 = 0;
        let mut digits = 0;
        while let Some(&(_, ch)) = chars.peek() {
            let Some(digit) = ch.to_digit(10) else { break };
            quantity = quantity.checked_mul(10)?.checked_add(digit)?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return None;
        }

        while chars.next_if(|&(_, ch)| ch == ' ').is_some() {}

        let start = chars.peek().map_or(text.len(), |&(i, _)| i);
        let mut end = text.len();
        while let Some((i, ch)) = chars.next() {
            if ch == ' ' && chars.peek().is_some_and(|&(_, next)| next.is_ascii_digit()) {
                end = i;
                break;
            }
        }

        let name = text[start..end].trim();
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }
        tokens.push(BlueprintToken::new(quantity, name));
    }

    Some(tokens)
}
