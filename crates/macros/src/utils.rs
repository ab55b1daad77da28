use quote::ToTokens;
use syn::{
    GenericParam, Ident, Lifetime, ParenthesizedGenericArguments, TraitBound, Type, TypeBareFn,
    TypeReference,
    visit::{self, Visit},
};

/// What a parameter or return type refers to, as far as adapters care.
#[derive(Debug, Default)]
pub(crate) struct TypeScan {
    /// Nesting depth inside `Fn(..)` sugar or `fn(..)` pointers, which bind
    /// their own lifetimes.
    binders: usize,
    /// Lifetimes introduced by an enclosing `for<..>` on a trait bound.
    bound: Vec<Ident>,
    /// The type borrows with a non-`'static` lifetime outside any binder.
    pub(crate) borrows: bool,
    /// The type mentions `Self`.
    pub(crate) mentions_self: bool,
}

impl TypeScan {
    pub(crate) fn of(ty: &Type) -> Self {
        let mut scan = Self::default();
        scan.visit_type(ty);
        scan
    }

    /// Whether `lifetime` refers to something outside the type.
    fn is_free(&self, lifetime: &Lifetime) -> bool {
        lifetime.ident != "static" && !self.bound.contains(&lifetime.ident)
    }
}

impl<'ast> Visit<'ast> for TypeScan {
    fn visit_type_reference(&mut self, reference: &'ast TypeReference) {
        let is_free = reference
            .lifetime
            .as_ref()
            .is_none_or(|lifetime| self.is_free(lifetime));

        if self.binders == 0 && is_free {
            self.borrows = true;
        }
        visit::visit_type_reference(self, reference);
    }

    fn visit_lifetime(&mut self, lifetime: &'ast Lifetime) {
        if self.binders == 0 && self.is_free(lifetime) {
            self.borrows = true;
        }
    }

    fn visit_trait_bound(&mut self, bound: &'ast TraitBound) {
        let scope = self.bound.len();
        if let Some(lifetimes) = &bound.lifetimes {
            self.bound
                .extend(lifetimes.lifetimes.iter().filter_map(|param| match param {
                    GenericParam::Lifetime(param) => Some(param.lifetime.ident.clone()),
                    _ => None,
                }));
        }
        visit::visit_trait_bound(self, bound);
        self.bound.truncate(scope);
    }

    fn visit_parenthesized_generic_arguments(&mut self, args: &'ast ParenthesizedGenericArguments) {
        self.binders += 1;
        visit::visit_parenthesized_generic_arguments(self, args);
        self.binders -= 1;
    }

    fn visit_type_bare_fn(&mut self, bare_fn: &'ast TypeBareFn) {
        self.binders += 1;
        visit::visit_type_bare_fn(self, bare_fn);
        self.binders -= 1;
    }

    fn visit_ident(&mut self, ident: &'ast Ident) {
        if ident == "Self" {
            self.mentions_self = true;
        }
    }
}

/// Renders a type the way it would be written by hand.
///
/// Token streams print with a space between every token (`Option < i64 >`);
/// this drops the spaces around punctuation and keeps one after each comma.
pub(crate) fn type_name(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut name = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ' ' {
            let prev = name.chars().last();
            let next = chars.peek().copied();
            if prev == Some(' ') || is_tight(prev) || is_tight(next) {
                continue;
            }
        }
        name.push(c);
        if c == ',' {
            name.push(' ');
        }
    }

    name
}

fn is_tight(c: Option<char>) -> bool {
    matches!(
        c,
        Some('<' | '>' | ',' | ':' | '(' | ')' | '[' | ']' | '&' | ';')
    )
}
