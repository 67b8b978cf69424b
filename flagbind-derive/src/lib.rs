use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Data, DeriveInput, Fields, Ident, LitStr, Result, Visibility,
};

/// Derive `flagbind::FlagStruct` (and `flagbind::Nested`) for a struct with
/// named fields.
///
/// Field attributes:
///
/// ```ignore
/// #[derive(FlagStruct, Default)]
/// pub struct Config {
///     #[flag("port,default=8080")]   // leaf, bound through its Decode impl
///     pub port: u16,
///     #[flag(nested)]                // struct field, bound recursively
///     pub db: DbConfig,
/// }
/// ```
///
/// Only `pub` fields are bound. Attributes on other fields are ignored
/// without being parsed.
///
/// `nested` always recurses, even into a type that also implements `Decode`.
/// A struct that decodes itself from one value must be tagged with an
/// annotation instead, so its `Decode` impl takes over.
#[proc_macro_derive(FlagStruct, attributes(flag))]
pub fn derive_flag_struct(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// What a `#[flag(...)]` attribute asks for.
#[derive(Debug)]
enum FlagAttr {
    Annotation(LitStr),
    Nested,
}

impl Parse for FlagAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            if !input.is_empty() {
                return Err(input.error("expected a single annotation string"));
            }
            return Ok(Self::Annotation(lit));
        }

        let ident: Ident = input.parse()?;
        if ident != "nested" {
            return Err(syn::Error::new(
                ident.span(),
                format!("unknown flag option: {ident}"),
            ));
        }
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after `nested`"));
        }
        Ok(Self::Nested)
    }
}

fn expand(input: DeriveInput) -> Result<proc_macro2::TokenStream> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "FlagStruct can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FlagStruct can only be derived for structs",
            ));
        }
    };

    let mut steps = Vec::new();
    for field in fields {
        if !matches!(field.vis, Visibility::Public(_)) {
            continue;
        }

        let mut found: Option<FlagAttr> = None;
        for attr in field.attrs.iter().filter(|a| a.path().is_ident("flag")) {
            if found.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "a field takes at most one #[flag(...)] attribute",
                ));
            }
            found = Some(attr.parse_args()?);
        }

        let Some(found) = found else {
            continue;
        };
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = LitStr::new(&ident.to_string(), ident.span());

        steps.push(match found {
            FlagAttr::Annotation(annotation) => quote! {
                ::flagbind::__private::bind_field(&mut self.#ident, #name, #annotation, args)?;
            },
            FlagAttr::Nested => quote! {
                ::flagbind::Nested::descend(&mut self.#ident, args)?;
            },
        });
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::flagbind::FlagStruct for #ident #ty_generics #where_clause {
            fn bind_flags<__S: ::core::convert::AsRef<str>>(
                &mut self,
                args: &[__S],
            ) -> ::core::result::Result<(), ::flagbind::FlagError> {
                #(#steps)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::flagbind::Nested for #ident #ty_generics #where_clause {
            fn descend<__S: ::core::convert::AsRef<str>>(
                &mut self,
                args: &[__S],
            ) -> ::core::result::Result<(), ::flagbind::FlagError> {
                ::flagbind::FlagStruct::bind_flags(self, args)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_str(input: DeriveInput) -> String {
        expand(input).unwrap().to_string()
    }

    #[test]
    fn annotated_field_binds() {
        let out = expand_str(parse_quote! {
            struct Config {
                #[flag("port,default=8080")]
                pub port: u16,
            }
        });
        assert!(out.contains("bind_field"));
        assert!(out.contains("\"port,default=8080\""));
    }

    #[test]
    fn nested_field_descends() {
        let out = expand_str(parse_quote! {
            struct Config {
                #[flag(nested)]
                pub db: Db,
            }
        });
        assert!(out.contains("descend"));
        assert!(out.contains("self . db"));
    }

    #[test]
    fn private_field_attribute_is_not_parsed() {
        let out = expand_str(parse_quote! {
            struct Config {
                #[flag(this is not valid)]
                secret: String,
                #[flag("name")]
                pub name: String,
            }
        });
        assert!(!out.contains("secret"));
        assert!(out.contains("self . name"));
    }

    #[test]
    fn untagged_field_is_skipped() {
        let out = expand_str(parse_quote! {
            struct Config {
                pub plain: String,
            }
        });
        assert!(!out.contains("plain"));
    }

    #[test]
    fn rejects_enums() {
        let input: DeriveInput = parse_quote! {
            enum Mode { Fast, Slow }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("structs"));
    }

    #[test]
    fn rejects_tuple_structs() {
        let input: DeriveInput = parse_quote! {
            struct Pair(pub u8, pub u8);
        };
        assert!(expand(input).is_err());
    }

    #[test]
    fn rejects_duplicate_attributes() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[flag("a")]
                #[flag("b")]
                pub a: String,
            }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("at most one"));
    }

    #[test]
    fn rejects_unknown_option() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[flag(flatten)]
                pub a: Inner,
            }
        };
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("unknown flag option"));
    }
}
