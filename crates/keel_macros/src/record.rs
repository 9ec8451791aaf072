//! Read-only record generation.
//!
//! Expands a struct-like definition into an immutable record: a struct with
//! private fields, read-only accessors, a builder with per-field defaults,
//! and a `Default` impl producing the all-defaults instance. A `mut` modifier
//! on a field is parsed and discarded, so immutability cannot be opted out of.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, Attribute, Expr, Ident, Token, Type, Visibility};

/// Main entry point for the `readonly_record!` macro.
pub fn readonly_record(input: TokenStream) -> TokenStream {
    let def = parse_macro_input!(input as RecordDef);
    expand(&def).into()
}

/// A whole record definition: attributes, visibility, name, fields.
struct RecordDef {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    fields: Vec<FieldSpec>,
}

/// One field: forwarded attributes, name, type, optional default expression.
struct FieldSpec {
    attrs: Vec<Attribute>,
    name: Ident,
    ty: Type,
    default: Option<Expr>,
}

impl Parse for RecordDef {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![struct]>()?;
        let name: Ident = input.parse()?;

        let content;
        syn::braced!(content in input);

        let mut fields = Vec::new();
        while !content.is_empty() {
            fields.push(content.parse::<FieldSpec>()?);
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        Ok(RecordDef {
            attrs,
            vis,
            name,
            fields,
        })
    }
}

impl Parse for FieldSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;

        // A requested `mut` is stripped: every generated field is read-only
        // no matter what the caller asked for.
        if input.peek(Token![mut]) {
            input.parse::<Token![mut]>()?;
        }

        let name: Ident = input.parse()?;
        if name == "build" {
            return Err(syn::Error::new_spanned(
                &name,
                "field may not be named `build`; it would collide with the builder's `build` method",
            ));
        }

        input.parse::<Token![:]>()?;
        let ty: Type = input.parse()?;

        let default = if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        Ok(FieldSpec {
            attrs,
            name,
            ty,
            default,
        })
    }
}

fn expand(def: &RecordDef) -> TokenStream2 {
    let RecordDef {
        attrs,
        vis,
        name,
        fields,
    } = def;

    let builder_name = format_ident!("{}Builder", name);

    let field_names: Vec<&Ident> = fields.iter().map(|f| &f.name).collect();
    let field_tys: Vec<&Type> = fields.iter().map(|f| &f.ty).collect();
    let field_attrs: Vec<TokenStream2> = fields
        .iter()
        .map(|f| {
            let attrs = &f.attrs;
            quote! { #(#attrs)* }
        })
        .collect();

    // Fields without a declared default fall back to `Default::default()`.
    let field_defaults: Vec<TokenStream2> = fields
        .iter()
        .map(|f| match &f.default {
            Some(expr) => quote! { #expr },
            None => quote! { ::core::default::Default::default() },
        })
        .collect();

    let builder_doc = format!(
        "Builder for [`{name}`]. Fields left unset at `build` take their declared defaults."
    );

    quote! {
        #(#attrs)*
        #vis struct #name {
            #( #field_attrs #field_names: #field_tys, )*
        }

        impl #name {
            /// Start building a record instance.
            #vis fn builder() -> #builder_name {
                <#builder_name as ::core::default::Default>::default()
            }

            #(
                #vis fn #field_names(&self) -> &#field_tys {
                    &self.#field_names
                }
            )*
        }

        impl ::core::default::Default for #name {
            /// The all-defaults instance.
            fn default() -> Self {
                #name::builder().build()
            }
        }

        #[doc = #builder_doc]
        #vis struct #builder_name {
            #( #field_names: ::core::option::Option<#field_tys>, )*
        }

        impl ::core::default::Default for #builder_name {
            fn default() -> Self {
                #builder_name {
                    #( #field_names: ::core::option::Option::None, )*
                }
            }
        }

        impl #builder_name {
            #(
                #vis fn #field_names(mut self, value: #field_tys) -> Self {
                    self.#field_names = ::core::option::Option::Some(value);
                    self
                }
            )*

            /// Finish the record; unset fields take their declared defaults.
            #vis fn build(self) -> #name {
                #name {
                    #(
                        #field_names: match self.#field_names {
                            ::core::option::Option::Some(value) => value,
                            ::core::option::Option::None => #field_defaults,
                        },
                    )*
                }
            }
        }
    }
}
