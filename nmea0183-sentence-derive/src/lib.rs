//! # Derive macro for typed NMEA 0183 sentence views
//!
//! `nmea0183-sentence-derive` turns a newtype over `nmea0183_sentence::SentenceRecord`
//! into a sentence kind that the `nmea0183-sentence` registry can construct:
//!
//! ```rust,ignore
//! use nmea0183_sentence::{Sentence, SentenceRecord};
//!
//! #[derive(Debug, Clone, PartialEq, Sentence)]
//! #[sentence(id = "DBT", fields = 6)]
//! #[sentence(preset(index = 1, value = "f"), preset(index = 3, value = "M"))]
//! pub struct DBT(SentenceRecord);
//! ```
//!
//! Supported attributes:
//! - `id = "..."` - the sentence id (required)
//! - `fields = N` - the number of fields a blank sentence is created with (required)
//! - `begin = '$'` or `begin = '!'` - the begin character, `$` when omitted
//! - `preset(index = N, value = "...")` - a field value filled in on creation; may be
//!   repeated

use generate::generate_sentence_kind_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod config;
mod generate;
mod meta;

/// Derives `nmea0183_sentence::SentenceKind` for a newtype over `SentenceRecord`.
#[proc_macro_derive(Sentence, attributes(sentence))]
pub fn derive_sentence(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_sentence_kind_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
