use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    parse_quote, Error as SynError, Generics, Ident, Item, ItemImpl, Result as SynResult, Type,
    TypeParamBound, TypeTraitObject,
};

use crate::attrs::AttributeData;

#[derive(Debug)]
struct TargetData {
    self_type: Type,
    generics: Generics,
    interfaces: Vec<Type>,
}

pub fn expand_implementation(item: TokenStream, attr_data: AttributeData) -> SynResult<TokenStream2> {
    let item = match syn::parse::<Item>(item) {
        Ok(item) => item,
        Err(err) => {
            return Err(SynError::new(
                err.span(),
                "`#[interface]` should be annotated on a trait `impl` block, a `struct` or an `enum`",
            ))
        }
    };

    let target = match &item {
        Item::Impl(impls) => parse_impl_target(impls, attr_data)?,
        Item::Struct(item) => {
            parse_type_target(&item.ident, &item.generics, attr_data, item.ident.span())?
        }
        Item::Enum(item) => {
            parse_type_target(&item.ident, &item.generics, attr_data, item.ident.span())?
        }
        item => {
            return Err(SynError::new(
                item.span(),
                "`#[interface]` should be annotated on a trait `impl` block, a `struct` or an `enum`",
            ))
        }
    };

    let expanded = expand_upcast_implementations(&target);

    Ok(quote! {
        #item
        #expanded
    })
}

fn parse_impl_target(impls: &ItemImpl, attr_data: AttributeData) -> SynResult<TargetData> {
    let interfaces = match attr_data {
        AttributeData::Explicit { interfaces } => interfaces,
        AttributeData::Inferred => {
            let Some((negative, path, _)) = &impls.trait_ else {
                return Err(SynError::new(
                    impls.self_ty.span(),
                    "expects interface types on an inherent `impl` block, e.g. `#[interface(dyn Trait)]`",
                ));
            };
            if let Some(negative) = negative {
                return Err(SynError::new(
                    negative.span(),
                    "a negative implementation can't declare an interface",
                ));
            }
            vec![parse_quote!(dyn #path)]
        }
    };

    Ok(TargetData {
        self_type: impls.self_ty.as_ref().clone(),
        generics: impls.generics.clone(),
        interfaces,
    })
}

fn parse_type_target(
    ident: &Ident,
    generics: &Generics,
    attr_data: AttributeData,
    span: Span,
) -> SynResult<TargetData> {
    let AttributeData::Explicit { interfaces } = attr_data else {
        return Err(SynError::new(
            span,
            "expects at least one interface type, e.g. `#[interface(dyn Trait)]`",
        ));
    };

    let (_, ty_generics, _) = generics.split_for_impl();
    Ok(TargetData {
        self_type: parse_quote!(#ident #ty_generics),
        generics: generics.clone(),
        interfaces,
    })
}

fn expand_upcast_implementations(target: &TargetData) -> TokenStream2 {
    let mut generics = target.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(Self: 'static));
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let self_type = &target.self_type;

    target
        .interfaces
        .iter()
        .map(with_static_bound)
        .map(|interface| {
            quote! {
                impl #impl_generics ::locator::upcast::Upcast<#interface> for #self_type #where_clause {
                    fn upcast_ref(&self) -> &(#interface) {
                        self
                    }

                    fn upcast_mut(&mut self) -> &mut (#interface) {
                        self
                    }

                    fn upcast_arc(self: ::std::sync::Arc<Self>) -> ::std::sync::Arc<#interface> {
                        self
                    }
                }
            }
        })
        .collect()
}

// An elided trait object lifetime means `'a` behind `&'a`, but `'static` in
// the `Upcast` impl header, so the bound is spelled out everywhere.
fn with_static_bound(interface: &Type) -> Type {
    let mut interface = interface.clone();
    match &mut interface {
        Type::TraitObject(object) => add_static_bound(object),
        Type::Paren(paren) => {
            if let Type::TraitObject(object) = paren.elem.as_mut() {
                add_static_bound(object);
            }
        }
        _ => {}
    }
    interface
}

fn add_static_bound(object: &mut TypeTraitObject) {
    let has_lifetime = object
        .bounds
        .iter()
        .any(|bound| matches!(bound, TypeParamBound::Lifetime(_)));
    if !has_lifetime {
        object.bounds.push(parse_quote!('static));
    }
}
