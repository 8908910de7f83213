use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericParam, Generics, ItemStruct, WherePredicate};

use crate::field_utils::StateField;

/// 附加在 `StateExtraction` 上的能力
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum Capability {
    Plain,
    Entity,
    ValueObject,
}

/// 为全部类型与生命周期参数追加 `'static` 约束（`StateExtraction: Any`）
pub(crate) fn static_generics(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let bounds: Vec<WherePredicate> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => {
                let ident = &ty.ident;
                Some(syn::parse_quote! { #ident: 'static })
            }
            GenericParam::Lifetime(lt) => {
                let lifetime = &lt.lifetime;
                Some(syn::parse_quote! { #lifetime: 'static })
            }
            GenericParam::Const(_) => None,
        })
        .collect();

    if !bounds.is_empty() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    generics
}

/// 生成 `StateExtraction` 与 `ToValue` 实现
pub(crate) fn state_impls(
    st: &ItemStruct,
    fields: Option<&[StateField]>,
    capability: Capability,
) -> TokenStream {
    let ident = &st.ident;
    let type_name = ident.to_string();
    let generics = static_generics(&st.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (params, values) = match fields {
        Some(fields) => {
            let names = fields.iter().map(|f| f.ident.to_string());
            let values = fields.iter().map(|f| {
                let field = &f.ident;
                let ty = &f.ty;
                if f.opaque {
                    quote! { ::ddd_state::value::Value::opaque::<#ty>() }
                } else {
                    quote! { ::ddd_state::value::ToValue::to_value(&self.#field) }
                }
            });
            (
                quote! { ::std::option::Option::Some(&[#(#names),*]) },
                quote! { ::std::vec![#(#values),*] },
            )
        }
        None => (
            quote! { ::std::option::Option::None },
            quote! { ::std::vec::Vec::new() },
        ),
    };

    let probe = match capability {
        Capability::Plain => quote! {},
        Capability::Entity => quote! {
            fn as_entity(&self) -> ::std::option::Option<&dyn ::ddd_state::entity::Entity> {
                ::std::option::Option::Some(self)
            }
        },
        Capability::ValueObject => quote! {
            fn as_value_object(
                &self,
            ) -> ::std::option::Option<&dyn ::ddd_state::value_object::ValueObject> {
                ::std::option::Option::Some(self)
            }
        },
    };

    quote! {
        impl #impl_generics ::ddd_state::state::StateExtraction for #ident #ty_generics #where_clause {
            fn type_name(&self) -> &'static str { #type_name }

            fn constructor_params(&self) -> ::std::option::Option<&'static [&'static str]> {
                #params
            }

            fn state_values(&self) -> ::std::vec::Vec<::ddd_state::value::Value<'_>> {
                #values
            }

            #probe
        }

        impl #impl_generics ::ddd_state::value::ToValue for #ident #ty_generics #where_clause {
            fn to_value(&self) -> ::ddd_state::value::Value<'_> {
                ::ddd_state::value::Value::Object(self)
            }
        }
    }
}

/// 基于调试字符串的 `Display` 实现
pub(crate) fn display_impl(st: &ItemStruct) -> TokenStream {
    let ident = &st.ident;
    let generics = static_generics(&st.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let rendered = ::ddd_state::state::extract_display_string(self)
                    .map_err(|_| ::std::fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    }
}
