use thiserror::Error;

use crate::tokens;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The error produced by the strict lookup [`ArgumentParser::require_string_argument`].
///
/// The lenient lookups never raise; they degrade to absence or a caller-supplied default.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    /// Neither the long nor the short form of the parameter occurred in the token list.
    #[error("Parameter '{0}' was not specified.")]
    NotSpecified(String),

    /// A flag form of the parameter occurred as the final token, with no value after it.
    #[error("Parameter '{0}' is not followed by a value.")]
    MissingValue(String),
}

/// A declaration-free reader over the raw command line tokens.
///
/// The parser stores the token list verbatim and extracts the bracketed items once, at
/// construction.
/// Every lookup is a fresh left-to-right scan of the token list; nothing else is precomputed.
/// The parser never mutates after construction, so lookups may be issued from multiple threads
/// without coordination.
#[derive(Debug)]
pub struct ArgumentParser {
    tokens: Vec<String>,
    items: Vec<String>,
}

impl ArgumentParser {
    /// Create a parser over the provided tokens.
    ///
    /// Any token wrapped in brackets (a `[` prefix and a `]` suffix) is collected into
    /// [`ArgumentParser::items`], normalized by dropping every bracket character, in original
    /// order.
    /// All other tokens are only ever answered through the flag lookups.
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(T::into).collect();
        let items: Vec<String> = tokens
            .iter()
            .filter(|token| tokens::is_item(token))
            .map(|token| tokens::strip_item(token))
            .collect();

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Collected {} items out of {} tokens.", items.len(), tokens.len());
        }

        Self { tokens, items }
    }

    /// Create a parser over the process's command line, skipping the program name.
    ///
    /// Whitespace splitting and quote processing happen upstream, in the shell and the hosting
    /// runtime; this constructor reads the tokens exactly as `std::env::args` hands them over.
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }

    /// Lookup the value of a string parameter.
    ///
    /// Scans for the first occurrence of the literal token `--{key}` and returns the token
    /// immediately following it.
    /// When the long form produces no value, the same scan is repeated for `-{short_key}`.
    /// A flag occurring as the final token carries no value; the lookup proceeds as though
    /// that flag were absent.
    ///
    /// ```
    /// use argot::ArgumentParser;
    ///
    /// let parser = ArgumentParser::new(["--mode", "fast", "-j", "4"]);
    /// assert_eq!(parser.string_argument("mode", 'm'), Some("fast"));
    /// assert_eq!(parser.string_argument("jobs", 'j'), Some("4"));
    /// assert_eq!(parser.string_argument("absent", 'a'), None);
    /// ```
    pub fn string_argument(&self, key: &str, short_key: char) -> Option<&str> {
        self.value_after(&tokens::long(key))
            .or_else(|| self.value_after(&tokens::short(short_key)))
    }

    /// Lookup a string parameter, requiring it to resolve to a value.
    ///
    /// This is the strict counterpart to [`ArgumentParser::string_argument`], for callers that
    /// want the failure cause rather than an absence.
    pub fn require_string_argument(
        &self,
        key: &str,
        short_key: char,
    ) -> Result<&str, ArgumentError> {
        match self.string_argument(key, short_key) {
            Some(value) => Ok(value),
            None => {
                if self.contains(&tokens::long(key)) || self.contains(&tokens::short(short_key)) {
                    Err(ArgumentError::MissingValue(key.to_string()))
                } else {
                    Err(ArgumentError::NotSpecified(key.to_string()))
                }
            }
        }
    }

    /// Lookup the value of an integer parameter, defaulting to `0`.
    ///
    /// Equivalent to [`ArgumentParser::int_argument_or`] with a default of `0`.
    pub fn int_argument(&self, key: &str, short_key: char) -> i64 {
        self.int_argument_or(key, short_key, 0)
    }

    /// Lookup the value of an integer parameter.
    ///
    /// Delegates to [`ArgumentParser::string_argument`] and parses the value as a base-10
    /// integer.
    /// Both an absent parameter and an unparseable value resolve to `default`.
    ///
    /// ```
    /// use argot::ArgumentParser;
    ///
    /// let parser = ArgumentParser::new(["--n", "42", "--bad", "forty-two"]);
    /// assert_eq!(parser.int_argument_or("n", 'n', 7), 42);
    /// assert_eq!(parser.int_argument_or("bad", 'b', 7), 7);
    /// assert_eq!(parser.int_argument_or("absent", 'a', 7), 7);
    /// ```
    pub fn int_argument_or(&self, key: &str, short_key: char, default: i64) -> i64 {
        match self.string_argument(key, short_key) {
            Some(value) => value.parse().unwrap_or(default),
            None => default,
        }
    }

    /// Lookup a presence switch, defaulting to `false`.
    ///
    /// Equivalent to [`ArgumentParser::switch_argument_or`] with a default of `false`.
    pub fn switch_argument(&self, name: &str) -> bool {
        self.switch_argument_or(name, false)
    }

    /// Lookup a presence switch.
    ///
    /// Returns `true` iff the literal token `--{name}` occurs anywhere in the token list.
    /// Switches have no short form and take no value; an absent switch resolves to `default`.
    pub fn switch_argument_or(&self, name: &str, default: bool) -> bool {
        if self.contains(&tokens::long(name)) {
            true
        } else {
            default
        }
    }

    /// The bracketed items, normalized and in original token order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The token list, verbatim.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn value_after(&self, flag: &str) -> Option<&str> {
        let index = self.tokens.iter().position(|token| token == flag)?;

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Matched '{flag}' at index {index}.");
        }

        self.tokens.get(index + 1).map(String::as_str)
    }

    fn contains(&self, flag: &str) -> bool {
        self.tokens.iter().any(|token| token == flag)
    }
}
