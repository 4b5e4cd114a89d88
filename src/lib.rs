//! `argot` is a declaration-free command line argument reader for Rust.
//!
//! Although other crates provide command line parser functionality, they are built around
//! declaring a grammar up front and validating the command line against it.
//! That is the right call for a program's outer surface, and the wrong amount of ceremony for
//! a small tool that wants to peek at a handful of flags.
//! `argot` is the convenience utility for the second case.
//! Specifically, `argot` prioritizes the following design concerns:
//! * *No declaration*:
//! The parser ingests the raw token list once and answers lookups on demand.
//! There is nothing to configure and nothing to build.
//! * *Absence over failure*:
//! A lookup never raises; a parameter that cannot be resolved degrades to an explicit absence
//! (`Option`) or a caller-supplied default.
//! The one strict lookup, [`ArgumentParser::require_string_argument`], is opt-in.
//! * *Bracketed items*:
//! Unnamed positional values are written `[item]` on the command line and collected into an
//! ordered list, kept apart from the flag-based options.
//!
//! Validation, required-argument enforcement, sub-commands, multi-value options, and help text
//! are deliberately left to the calling application.
//!
//! # Usage
//! ```
//! use argot::ArgumentParser;
//!
//! let parser = ArgumentParser::new([
//!     "[alpha.log]",
//!     "--retries",
//!     "3",
//!     "--verbose",
//!     "[beta.log]",
//! ]);
//!
//! assert_eq!(parser.string_argument("retries", 'r'), Some("3"));
//! assert_eq!(parser.int_argument_or("retries", 'r', 1), 3);
//! assert!(parser.switch_argument("verbose"));
//! assert_eq!(parser.items(), ["alpha.log", "beta.log"]);
//! ```
//!
//! In a real program the tokens come from the hosting runtime via
//! [`ArgumentParser::from_env`].
//!
//! # Semantics
//! `argot` reads the token list according to the following rules.
//!
//! * A string parameter is matched by the first occurrence of its long form `--key`, with the
//! token immediately following the flag as its value.
//! When the long form resolves no value, the same scan is repeated for the short form `-k`.
//! For example, `--mode fast` and `-m fast` both answer `fast`.
//! * The first match wins.
//! For example, `--mode fast --mode slow` answers `fast`.
//! * A flag occurring as the final token carries no value, and resolves as though that flag
//! were absent.
//! * A switch is matched by the exact token `--name` anywhere in the list.
//! Switches take no value and have no short form.
//! * A token wrapped in brackets, such as `[input.txt]`, is an item.
//! Items are collected at construction, in order, with every bracket character removed
//! (`[[x]]` collapses to `x`).
//! * Tokens are never split, joined, or interpreted beyond the rules above.
//! In particular, `--key=value` is a single unrecognized token, not a key and a value.
#![deny(missing_docs)]
mod parser;
mod tokens;

pub use parser::{ArgumentError, ArgumentParser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
