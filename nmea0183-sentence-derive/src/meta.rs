use std::fmt::Display;

use proc_macro2::Span;
use syn::{
    Attribute, Error, Expr, ExprLit, Ident, Lit, LitInt, LitStr, MetaNameValue, Result, Token,
    parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum MetaAttributeType {
    Id,
    Fields,
    Begin,
    Preset,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "id" => Some(Self::Id),
            "fields" => Some(Self::Fields),
            "begin" => Some(Self::Begin),
            "preset" => Some(Self::Preset),
            _ => None,
        }
    }

    fn allowed_multiple(&self) -> bool {
        matches!(self, Self::Preset)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Fields => "fields",
            Self::Begin => "begin",
            Self::Preset => "preset",
        };
        write!(f, "{name}")
    }
}

pub enum MetaValue {
    Lit(Lit),
    Preset { index: LitInt, value: LitStr },
}

pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    pub value: MetaValue,
    span: Span,
}

impl MetaAttribute {
    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let attribute_type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(
                ident.span(),
                "nmea0183-sentence-derive: Unknown sentence attribute",
            )
        })?;

        let value = match attribute_type {
            // preset(index = N, value = "...")
            MetaAttributeType::Preset => {
                let content;
                parenthesized!(content in input);
                parse_preset(&content, ident.span())?
            }
            _ => {
                let _: Token![=] = input.parse().map_err(|err| {
                    Error::new(
                        err.span(),
                        format!(
                            "nmea0183-sentence-derive: Expected '= <value>' for `{attribute_type}`"
                        ),
                    )
                })?;
                MetaValue::Lit(input.parse()?)
            }
        };

        Ok(MetaAttribute {
            r#type: attribute_type,
            value,
            span: ident.span(),
        })
    }
}

fn parse_preset(input: ParseStream, span: Span) -> Result<MetaValue> {
    let mut index = None;
    let mut value = None;

    for pair in Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)? {
        let Expr::Lit(ExprLit { lit, .. }) = &pair.value else {
            return Err(Error::new_spanned(
                &pair.value,
                "nmea0183-sentence-derive: Expected a literal",
            ));
        };

        match (pair.path.get_ident().map(Ident::to_string).as_deref(), lit) {
            (Some("index"), Lit::Int(lit)) => index = Some(lit.clone()),
            (Some("value"), Lit::Str(lit)) => value = Some(lit.clone()),
            _ => {
                return Err(Error::new_spanned(
                    &pair,
                    "nmea0183-sentence-derive: Expected `index = <integer>` or `value = \"<text>\"`",
                ));
            }
        }
    }

    match (index, value) {
        (Some(index), Some(value)) => Ok(MetaValue::Preset { index, value }),
        _ => Err(Error::new(
            span,
            "nmea0183-sentence-derive: `preset` needs both `index` and `value`",
        )),
    }
}

pub struct List<T: Parse>(pub Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

pub fn parse_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut attributes_set = std::collections::HashSet::new();

    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("sentence"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !meta_attr.r#type.allowed_multiple() && !attributes_set.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea0183-sentence-derive: Duplicate sentence attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }

            Ok(meta_attr)
        })
        .collect()
}
