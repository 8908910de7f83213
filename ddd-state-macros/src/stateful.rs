use crate::attr::AttrArgs;
use crate::codegen::{Capability, state_impls};
use crate::field_utils::{collect_state_fields, expect_struct};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Item, parse_macro_input};

/// #[stateful] 宏实现
/// - 仅实现 `StateExtraction` 与 `ToValue`，不附加派生与能力
/// - 单元结构体不登记构造参数
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttrArgs);
    let input = parse_macro_input!(item as Item);

    let result = args.ensure_known(&[]).and_then(|()| {
        let mut st = expect_struct(input, "stateful")?;

        let fields = collect_state_fields(&mut st.fields)?;
        let state = state_impls(&st, fields.as_deref(), Capability::Plain);

        Ok(quote! {
            #st

            #state
        })
    });

    match result {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
