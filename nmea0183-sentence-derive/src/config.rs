use proc_macro2::Span;
use syn::{Error, Lit, LitInt, LitStr, Result};

use crate::meta::{MetaAttribute, MetaAttributeType, MetaValue};

pub struct Preset {
    pub index: usize,
    pub value: LitStr,
}

pub struct Config {
    pub id: LitStr,
    pub fields: LitInt,
    pub encapsulation: bool,
    pub presets: Vec<Preset>,
}

impl Config {
    pub fn from_meta_attributes(attribute_list: Vec<MetaAttribute>, span: Span) -> Result<Self> {
        let mut id = None;
        let mut fields = None;
        let mut encapsulation = false;
        let mut presets = Vec::new();

        for meta in attribute_list {
            let meta_span = meta.span();
            match (meta.r#type, meta.value) {
                (MetaAttributeType::Id, MetaValue::Lit(Lit::Str(lit))) => {
                    check_sentence_id(&lit)?;
                    id = Some(lit);
                }
                (MetaAttributeType::Fields, MetaValue::Lit(Lit::Int(lit))) => {
                    if lit.base10_parse::<usize>()? == 0 {
                        return Err(Error::new(
                            lit.span(),
                            "nmea0183-sentence-derive: A sentence has at least one field",
                        ));
                    }
                    fields = Some(lit);
                }
                (MetaAttributeType::Begin, MetaValue::Lit(Lit::Char(lit))) => {
                    encapsulation = match lit.value() {
                        '$' => false,
                        '!' => true,
                        _ => {
                            return Err(Error::new(
                                lit.span(),
                                "nmea0183-sentence-derive: `begin` must be '$' or '!'",
                            ));
                        }
                    };
                }
                (MetaAttributeType::Preset, MetaValue::Preset { index, value }) => {
                    presets.push(Preset {
                        index: index.base10_parse()?,
                        value,
                    });
                }
                (kind, _) => {
                    return Err(Error::new(
                        meta_span,
                        format!("nmea0183-sentence-derive: Unexpected value for `{kind}`"),
                    ));
                }
            }
        }

        let id = id.ok_or_else(|| {
            Error::new(span, "nmea0183-sentence-derive: Missing `id = \"...\"` attribute")
        })?;
        let fields = fields.ok_or_else(|| {
            Error::new(span, "nmea0183-sentence-derive: Missing `fields = N` attribute")
        })?;

        let count = fields.base10_parse::<usize>()?;
        for preset in &presets {
            if preset.index >= count {
                return Err(Error::new(
                    preset.value.span(),
                    format!(
                        "nmea0183-sentence-derive: Preset index {} is out of range for {count} fields",
                        preset.index
                    ),
                ));
            }
            check_field_text(&preset.value)?;
        }

        Ok(Self {
            id,
            fields,
            encapsulation,
            presets,
        })
    }
}

// An address is at most 10 characters and at least 3, whether the talker is a
// two-character code or the single proprietary `P`.
fn check_sentence_id(lit: &LitStr) -> Result<()> {
    let id = lit.value();
    if (2..=8).contains(&id.len()) && id.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::new(
            lit.span(),
            "nmea0183-sentence-derive: `id` must be 2 to 8 upper-case letters or digits",
        ))
    }
}

fn check_field_text(lit: &LitStr) -> Result<()> {
    let text = lit.value();
    if text
        .chars()
        .all(|c| (' '..='~').contains(&c) && c != ',' && c != '*')
    {
        Ok(())
    } else {
        Err(Error::new(
            lit.span(),
            "nmea0183-sentence-derive: Preset values must be printable ASCII without ',' or '*'",
        ))
    }
}
