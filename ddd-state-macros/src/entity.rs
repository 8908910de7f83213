use crate::attr::AttrArgs;
use crate::codegen::{Capability, display_impl, state_impls, static_generics};
use crate::derive_utils::{apply_derives, shell_derives, take_derives};
use crate::field_utils::{
    collect_state_fields, ensure_missing_fields, expect_struct, require_named,
};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, Item, Type, parse_macro_input};

/// #[entity] 宏实现
/// - 若缺失标识字段则在最前追加 `identity: Identity`（已有字段保持原位）
/// - 自动实现 `::ddd_state::entity::Entity`（identity）
/// - 支持参数：`#[entity(identity = field, debug = true|false)]`
///   - `identity` 默认字段名 `identity`
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttrArgs);
    let input = parse_macro_input!(item as Item);

    match expand_inner(args, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inner(args: AttrArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    args.ensure_known(&["identity", "debug"])?;
    let derive_debug = args.bool("debug")?.unwrap_or(true);
    let identity_field = args
        .ident("identity")?
        .unwrap_or_else(|| Ident::new("identity", proc_macro2::Span::call_site()));

    let mut st = expect_struct(input, "entity")?;

    let identity_ty: Type = syn::parse_quote! { ::ddd_state::identity::Identity };
    let named = require_named(&mut st.fields, "entity")?;
    ensure_missing_fields(named, &[(&identity_field, &identity_ty)]);

    let fields = collect_state_fields(&mut st.fields)?;

    let existing = take_derives(&mut st.attrs);
    apply_derives(&mut st.attrs, existing, shell_derives(derive_debug));

    let ident = &st.ident;
    let generics = static_generics(&st.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let state = state_impls(&st, fields.as_deref(), Capability::Entity);
    let display = display_impl(&st);

    Ok(quote! {
        #st

        #state

        impl #impl_generics ::ddd_state::entity::Entity for #ident #ty_generics #where_clause {
            fn identity(&self) -> &::ddd_state::identity::Identity {
                &self.#identity_field
            }
        }

        #display
    })
}
