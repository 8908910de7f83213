use crate::attr::AttrArgs;
use crate::codegen::{Capability, state_impls, static_generics};
use crate::derive_utils::{apply_derives, shell_derives, take_derives};
use crate::field_utils::{
    collect_state_fields, ensure_missing_fields, expect_struct, require_named,
};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Ident, Item, Type, parse_macro_input};

/// #[domain_event] 宏实现
/// - 仅支持具名字段结构体
/// - 确保具备字段：`aggregate_id: Identity`, `occurred_on: DateTime<Utc>`（缺失时追加在最前）
/// - 生成 `Event` 与 `DomainEvent` 实现（label/occurred_on/aggregate_id/aggregate_label）
/// - 参数：`#[domain_event(aggregate = "...", label = "...", debug = true|false)]`，
///   `aggregate` 与 `label` 必填
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttrArgs);
    let input = parse_macro_input!(item as Item);

    match expand_inner(args, input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_inner(args: AttrArgs, input: Item) -> syn::Result<proc_macro2::TokenStream> {
    args.ensure_known(&["aggregate", "label", "debug"])?;
    let derive_debug = args.bool("debug")?.unwrap_or(true);

    let mut st = expect_struct(input, "domain_event")?;

    let aggregate = args.str("aggregate")?.ok_or_else(|| {
        syn::Error::new(st.ident.span(), "#[domain_event] requires 'aggregate = \"...\"'")
    })?;
    let label = args.str("label")?.ok_or_else(|| {
        syn::Error::new(st.ident.span(), "#[domain_event] requires 'label = \"...\"'")
    })?;

    let aggregate_id = Ident::new("aggregate_id", proc_macro2::Span::call_site());
    let occurred_on = Ident::new("occurred_on", proc_macro2::Span::call_site());
    let identity_ty: Type = syn::parse_quote! { ::ddd_state::identity::Identity };
    let datetime_ty: Type =
        syn::parse_quote! { ::ddd_state::chrono::DateTime<::ddd_state::chrono::Utc> };

    let named = require_named(&mut st.fields, "domain_event")?;
    ensure_missing_fields(
        named,
        &[(&aggregate_id, &identity_ty), (&occurred_on, &datetime_ty)],
    );

    let fields = collect_state_fields(&mut st.fields)?;

    let existing = take_derives(&mut st.attrs);
    apply_derives(&mut st.attrs, existing, shell_derives(derive_debug));

    let ident = &st.ident;
    let generics = static_generics(&st.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let state = state_impls(&st, fields.as_deref(), Capability::Plain);

    Ok(quote! {
        #st

        #state

        impl #impl_generics ::ddd_state::domain_event::Event for #ident #ty_generics #where_clause {
            fn label() -> &'static str { #label }

            fn occurred_on(&self) -> #datetime_ty {
                self.#occurred_on
            }
        }

        impl #impl_generics ::ddd_state::domain_event::DomainEvent for #ident #ty_generics #where_clause {
            fn aggregate_id(&self) -> &::ddd_state::identity::Identity {
                &self.#aggregate_id
            }

            fn aggregate_label() -> &'static str { #aggregate }
        }
    })
}
