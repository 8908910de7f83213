use crate::attr::AttrArgs;
use crate::codegen::{Capability, display_impl, state_impls, static_generics};
use crate::derive_utils::{apply_derives, has_derive, shell_derives, take_derives};
use crate::field_utils::{collect_state_fields, expect_struct, require_named};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Item, parse_macro_input};

/// #[value_object] 宏实现
/// - 仅支持具名字段结构体：字段即完整状态
/// - 合并/追加派生：Debug（可关闭）, Clone, Serialize, Deserialize
/// - 相等性由 `ValueObject::equal_to` 提供，因此不允许再派生 PartialEq
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttrArgs);
    let input = parse_macro_input!(item as Item);

    match expand_inner(args, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inner(args: AttrArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    args.ensure_known(&["debug", "display"])?;
    let derive_debug = args.bool("debug")?.unwrap_or(true);
    let derive_display = args.bool("display")?.unwrap_or(true);

    let mut st = expect_struct(input, "value_object")?;

    require_named(&mut st.fields, "value_object")?;
    let fields = collect_state_fields(&mut st.fields)?;

    let existing = take_derives(&mut st.attrs);
    if has_derive(&existing, "PartialEq") {
        return Err(syn::Error::new(
            st.ident.span(),
            "#[value_object] implements PartialEq through structural equality; remove the derive",
        ));
    }
    apply_derives(&mut st.attrs, existing, shell_derives(derive_debug));

    let ident = &st.ident;
    let generics = static_generics(&st.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let state = state_impls(&st, fields.as_deref(), Capability::ValueObject);
    let display = if derive_display {
        display_impl(&st)
    } else {
        quote! {}
    };

    Ok(quote! {
        #st

        #state

        impl #impl_generics ::ddd_state::value_object::ValueObject for #ident #ty_generics #where_clause {}

        impl #impl_generics ::std::cmp::PartialEq for #ident #ty_generics #where_clause {
            fn eq(&self, other: &Self) -> bool {
                ::ddd_state::value_object::ValueObject::equal_to(self, other)
            }
        }

        #display
    })
}
