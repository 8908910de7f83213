use syn::punctuated::Punctuated;
use syn::{Attribute, Path, Token};

// derive 的归一化 key：取最后一段，避免 Serialize/serde::Serialize 重复
fn derive_key(path: &Path) -> String {
    path.segments
        .last()
        .map(|seg| seg.ident.to_string())
        .unwrap_or_default()
}

/// 从属性中取出全部 derive（其余属性原样保留）
pub(crate) fn take_derives(attrs: &mut Vec<Attribute>) -> Vec<Path> {
    let mut existing = Vec::new();
    attrs.retain(|attr| {
        if !attr.path().is_ident("derive") {
            return true;
        }
        if let Ok(list) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) {
            existing.extend(list);
        }
        false
    });
    existing
}

/// 用户是否已派生某个 trait
pub(crate) fn has_derive(derives: &[Path], name: &str) -> bool {
    derives.iter().any(|p| derive_key(p) == name)
}

/// 合并默认派生与已有派生（去重，required 优先），并置于属性最前；
/// 含 serde 派生时紧随其后指向 `::ddd_state::serde`
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, existing: Vec<Path>, required: Vec<Path>) {
    let mut merged: Vec<Path> = Vec::new();
    for path in required.into_iter().chain(existing) {
        let key = derive_key(&path);
        if !merged.iter().any(|p| derive_key(p) == key) {
            merged.push(path);
        }
    }

    let uses_serde = has_derive(&merged, "Serialize") || has_derive(&merged, "Deserialize");

    let mut head: Vec<Attribute> = vec![syn::parse_quote!(#[derive(#(#merged),*)])];
    if uses_serde {
        head.push(syn::parse_quote!(#[serde(crate = "::ddd_state::serde")]));
    }

    attrs.splice(0..0, head);
}

/// 外壳类型的默认派生：Debug（可关闭）, Clone, Serialize, Deserialize
pub(crate) fn shell_derives(derive_debug: bool) -> Vec<Path> {
    let mut required: Vec<Path> = vec![
        syn::parse_quote!(Clone),
        syn::parse_quote!(::ddd_state::serde::Serialize),
        syn::parse_quote!(::ddd_state::serde::Deserialize),
    ];
    if derive_debug {
        required.insert(0, syn::parse_quote!(Debug));
    }
    required
}
