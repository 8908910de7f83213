use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Ident, Lit, LitStr, Result, Token, parse::Parse, parse::ParseStream};

/// 宏参数：`key = value` 列表
pub(crate) struct AttrArgs {
    pairs: Vec<AttrKv>,
}

struct AttrKv {
    key: Ident,
    value: Expr,
}

impl Parse for AttrKv {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        let _eq: Token![=] = input.parse()?;
        let value: Expr = input.parse()?;
        Ok(Self { key, value })
    }
}

impl Parse for AttrArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let parsed: Punctuated<AttrKv, Token![,]> = Punctuated::parse_terminated(input)?;

        let mut pairs: Vec<AttrKv> = Vec::new();
        for kv in parsed {
            if pairs.iter().any(|p| p.key == kv.key) {
                return Err(syn::Error::new(
                    kv.key.span(),
                    format!("duplicate key '{}' in attribute", kv.key),
                ));
            }
            pairs.push(kv);
        }

        Ok(Self { pairs })
    }
}

impl AttrArgs {
    /// 拒绝未声明的键
    pub(crate) fn ensure_known(&self, known: &[&str]) -> Result<()> {
        for kv in &self.pairs {
            if !known.iter().any(|k| kv.key == k) {
                let expected: Vec<String> = known.iter().map(|k| format!("'{k}'")).collect();
                return Err(syn::Error::new(
                    kv.key.span(),
                    format!("unknown key in attribute; expected {}", expected.join(" | ")),
                ));
            }
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&Expr> {
        self.pairs.iter().find(|kv| kv.key == key).map(|kv| &kv.value)
    }

    pub(crate) fn bool(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Lit(syn::ExprLit {
                lit: Lit::Bool(b), ..
            })) => Ok(Some(b.value())),
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected boolean literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn str(&self, key: &str) -> Result<Option<LitStr>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Lit(syn::ExprLit {
                lit: Lit::Str(s), ..
            })) => Ok(Some(s.clone())),
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected string literal for '{key}'"),
            )),
        }
    }

    pub(crate) fn ident(&self, key: &str) -> Result<Option<Ident>> {
        match self.get(key) {
            None => Ok(None),
            Some(Expr::Path(p)) if p.path.get_ident().is_some() => {
                Ok(p.path.get_ident().cloned())
            }
            Some(other) => Err(syn::Error::new(
                other.span(),
                format!("expected field name for '{key}'"),
            )),
        }
    }
}
