use syn::spanned::Spanned;
use syn::{
    Field, Fields, FieldsNamed, Ident, Item, ItemStruct, Result, Token, Type, punctuated::Punctuated,
};

/// 登记到构造契约中的字段
pub(crate) struct StateField {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) opaque: bool,
}

/// 要求被标注的条目是结构体；错误指向条目的关键字
pub(crate) fn expect_struct(item: Item, macro_name: &str) -> Result<ItemStruct> {
    let span = match item {
        Item::Struct(st) => return Ok(st),
        Item::Enum(e) => e.enum_token.span,
        Item::Union(u) => u.union_token.span,
        Item::Fn(f) => f.sig.fn_token.span,
        Item::Trait(t) => t.trait_token.span,
        Item::Type(t) => t.type_token.span,
        other => other.span(),
    };

    Err(syn::Error::new(
        span,
        format!("#[{macro_name}] only supports struct types"),
    ))
}

/// 是否存在指定名称的具名字段
pub(crate) fn has_field_named(fields: &FieldsNamed, name: &str) -> bool {
    fields
        .named
        .iter()
        .any(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}

/// 缺失时按给定顺序在最前追加必需字段，已有字段保持原位
pub(crate) fn ensure_missing_fields(fields_named: &mut FieldsNamed, required: &[(&Ident, &Type)]) {
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (ident, ty) in required {
        if !has_field_named(fields_named, &ident.to_string()) {
            new_named.push(syn::parse_quote! { #ident: #ty });
        }
    }

    for f in fields_named.named.clone() {
        new_named.push(f);
    }

    fields_named.named = new_named;
}

/// 收集具名字段并剥离 `#[state(...)]` 辅助属性
///
/// - 具名字段：返回 `Some(字段列表)`（可为空）
/// - 单元结构体：返回 `None`，即没有接收完整状态的构造函数
/// - tuple 结构体：字段没有名称，无法登记为构造参数，报错
pub(crate) fn collect_state_fields(fields: &mut Fields) -> Result<Option<Vec<StateField>>> {
    let named = match fields {
        Fields::Named(named) => named,
        Fields::Unit => return Ok(None),
        Fields::Unnamed(unnamed) => {
            return Err(syn::Error::new(
                unnamed.span(),
                "stateful types require named fields; field names are registered as constructor parameters",
            ));
        }
    };

    let mut out = Vec::with_capacity(named.named.len());
    for field in named.named.iter_mut() {
        let mut opaque = false;
        let mut error: Option<syn::Error> = None;

        field.attrs.retain(|attr| {
            if !attr.path().is_ident("state") {
                return true;
            }
            let parsed = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    opaque = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown key in #[state]; expected 'opaque'"))
                }
            });
            if let Err(err) = parsed {
                error.get_or_insert(err);
            }
            false
        });

        if let Some(err) = error {
            return Err(err);
        }

        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new(field.span(), "expected named field"));
        };

        out.push(StateField {
            ident,
            ty: field.ty.clone(),
            opaque,
        });
    }

    Ok(Some(out))
}

/// 要求具名字段结构体（值对象、实体与事件必须能登记完整状态）
pub(crate) fn require_named<'a>(fields: &'a mut Fields, macro_name: &str) -> Result<&'a mut FieldsNamed> {
    let span = fields.span();
    match fields {
        Fields::Named(named) => Ok(named),
        _ => Err(syn::Error::new(
            span,
            format!("#[{macro_name}] only supports named-field struct"),
        )),
    }
}
