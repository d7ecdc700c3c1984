use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Result, spanned::Spanned};

use crate::{config::Config, meta::parse_attributes};

// Usage:
// #[derive(Sentence)]
// #[sentence(id = "VTG", fields = 9)]
// #[sentence(preset(index = 1, value = "T"), preset(index = 3, value = "M"))]
// pub struct VTG(SentenceRecord);

pub fn generate_sentence_kind_impl(input: &DeriveInput) -> Result<TokenStream> {
    check_newtype(input)?;

    let attributes = parse_attributes(&input.attrs)?;
    let config = Config::from_meta_attributes(attributes, input.ident.span())?;

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let id = &config.id;
    let fields = &config.fields;
    let begin_char = if config.encapsulation {
        quote! { ::nmea0183_sentence::BeginChar::Encapsulation }
    } else {
        quote! { ::nmea0183_sentence::BeginChar::Standard }
    };
    let presets = config.presets.iter().map(|preset| {
        let index = preset.index;
        let value = &preset.value;
        quote! { (#index, #value) }
    });

    Ok(quote! {
        impl #impl_generics ::nmea0183_sentence::SentenceKind for #name #ty_generics #where_clause {
            const SENTENCE_ID: &'static str = #id;
            const FIELD_COUNT: usize = #fields;
            const BEGIN_CHAR: ::nmea0183_sentence::BeginChar = #begin_char;
            const PRESETS: &'static [(usize, &'static str)] = &[#(#presets),*];

            fn from_record(record: ::nmea0183_sentence::SentenceRecord) -> Self {
                Self(record)
            }

            fn as_record(&self) -> &::nmea0183_sentence::SentenceRecord {
                &self.0
            }

            fn as_record_mut(&mut self) -> &mut ::nmea0183_sentence::SentenceRecord {
                &mut self.0
            }

            fn into_record(self) -> ::nmea0183_sentence::SentenceRecord {
                self.0
            }
        }
    })
}

fn check_newtype(input: &DeriveInput) -> Result<()> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(()),
            fields => Err(Error::new(
                fields.span(),
                "nmea0183-sentence-derive: Expected a newtype struct, e.g. `struct GGA(SentenceRecord);`",
            )),
        },
        Data::Enum(data) => Err(Error::new(
            data.enum_token.span,
            "nmea0183-sentence-derive: Enums are not supported",
        )),
        Data::Union(data) => Err(Error::new(
            data.union_token.span,
            "nmea0183-sentence-derive: Unions are not supported",
        )),
    }
}
