use proc_macro::TokenStream;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Result as SynResult, Type};

#[derive(Debug)]
pub enum AttributeData {
    Inferred,
    Explicit { interfaces: Vec<Type> },
}

pub fn parse_attributes(attr: TokenStream) -> SynResult<AttributeData> {
    if attr.is_empty() {
        return Ok(AttributeData::Inferred);
    }

    let interfaces = Punctuated::<Type, Comma>::parse_terminated.parse(attr)?;

    Ok(AttributeData::Explicit {
        interfaces: interfaces.into_iter().collect(),
    })
}
