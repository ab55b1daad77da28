use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Error, FnArg, Ident, ItemTrait, Result, ReturnType, Signature, TraitItem, TraitItemFn, Type,
    parse::{Parse, ParseStream},
    parse_quote,
};

use crate::utils::{TypeScan, type_name};

/// A trait processed by the `#[interface]` attribute.
#[derive(Debug)]
pub(crate) struct Parsed {
    item: ItemTrait,
    method: Ident,
    params: Vec<Type>,
    output: Type,
}

fn unsupported(tokens: impl quote::ToTokens, reason: &str) -> Error {
    Error::new_spanned(tokens, format!("Unsupported interface shape: {reason}"))
}

impl Parse for Parsed {
    /// Parses a trait definition and checks that it has exactly one method
    /// that an adapter can forward.
    fn parse(input: ParseStream) -> Result<Self> {
        let item: ItemTrait = input.parse()?;

        if let Some(unsafety) = &item.unsafety {
            return Err(unsupported(unsafety, "unsafe traits are not allowed."));
        }

        if let Some(auto_token) = &item.auto_token {
            return Err(unsupported(auto_token, "auto traits are not allowed."));
        }

        if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
            return Err(unsupported(
                &item.generics,
                "generic parameters are not allowed. Remove them to use this macro.",
            ));
        }

        if !item.supertraits.is_empty() {
            return Err(unsupported(
                &item.supertraits,
                "supertraits are not allowed, since their methods could not be forwarded.",
            ));
        }

        let mut methods = Vec::new();
        for trait_item in &item.items {
            match trait_item {
                TraitItem::Fn(method) => methods.push(method),
                TraitItem::Const(item) => {
                    return Err(unsupported(item, "associated constants are not allowed."));
                }
                TraitItem::Type(item) => {
                    return Err(unsupported(item, "associated types are not allowed."));
                }
                TraitItem::Macro(item) => {
                    return Err(unsupported(item, "macro invocations are not allowed."));
                }
                other => {
                    return Err(unsupported(other, "only a single method is allowed."));
                }
            }
        }

        let [method] = methods.as_slice() else {
            return Err(unsupported(
                &item.ident,
                &format!("expected exactly one method, found {}.", methods.len()),
            ));
        };

        let (params, output) = parse_method(method)?;
        let method = method.sig.ident.clone();

        Ok(Parsed {
            item,
            method,
            params,
            output,
        })
    }
}

/// Validates the interface method and extracts its parameter and return types.
fn parse_method(method: &TraitItemFn) -> Result<(Vec<Type>, Type)> {
    let TraitItemFn { sig, default, .. } = method;

    if let Some(default) = default {
        return Err(unsupported(default, "the method must not have a default body."));
    }

    check_qualifiers(sig)?;

    let mut inputs = sig.inputs.iter();

    match inputs.next() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some()
                && receiver.mutability.is_none()
                && receiver.colon_token.is_none() => {}
        Some(other) => return Err(unsupported(other, "the method must take `&self`.")),
        None => return Err(unsupported(&sig.ident, "the method must take `&self`.")),
    }

    let params = inputs
        .map(|input| match input {
            FnArg::Typed(pat_type) => check_type(&pat_type.ty).map(|()| (*pat_type.ty).clone()),
            FnArg::Receiver(receiver) => Err(unsupported(receiver, "unexpected receiver.")),
        })
        .collect::<Result<Vec<_>>>()?;

    let output = match &sig.output {
        ReturnType::Default => parse_quote! { () },
        ReturnType::Type(_, ty) => {
            check_type(ty)?;
            (**ty).clone()
        }
    };

    Ok((params, output))
}

fn check_qualifiers(sig: &Signature) -> Result<()> {
    if let Some(constness) = &sig.constness {
        return Err(unsupported(constness, "const methods are not allowed."));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(unsupported(asyncness, "async methods are not allowed."));
    }
    if let Some(unsafety) = &sig.unsafety {
        return Err(unsupported(unsafety, "unsafe methods are not allowed."));
    }
    if let Some(abi) = &sig.abi {
        return Err(unsupported(abi, "extern methods are not allowed."));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(unsupported(variadic, "variadic methods are not allowed."));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(unsupported(&sig.generics, "generic methods are not allowed."));
    }
    Ok(())
}

/// Checks that a parameter or return type can appear in an adapter impl.
fn check_type(ty: &Type) -> Result<()> {
    if let Type::ImplTrait(_) = ty {
        return Err(unsupported(ty, "`impl Trait` types are not supported."));
    }

    let scan = TypeScan::of(ty);
    if scan.mentions_self {
        return Err(unsupported(ty, "`Self` may not appear in parameter or return types."));
    }
    if scan.borrows {
        return Err(unsupported(
            ty,
            "parameter and return types must be owned; only `'static` references are supported.",
        ));
    }

    Ok(())
}

impl Parsed {
    /// Generates the full token stream for the macro expansion.
    pub fn expand(self) -> TokenStream {
        let item = &self.item;
        let adapter_impl = self.generate_adapter_impl();
        let interface_impl = self.generate_interface_impl();
        let sync_interface_impl = self.generate_sync_interface_impl();

        quote! {
            #item
            #adapter_impl
            #interface_impl
            #sync_interface_impl
        }
    }

    /// The method's argument tuple type, such as `()` or `(i64,)`.
    fn args_type(&self) -> TokenStream {
        let params = &self.params;
        quote! { (#(#params,)*) }
    }

    /// Implements the trait for `Adapter` by forwarding to its callable.
    fn generate_adapter_impl(&self) -> TokenStream {
        let trait_name = &self.item.ident;
        let method = &self.method;
        let output = &self.output;
        let args_type = self.args_type();

        let arg_names: Vec<_> = (0..self.params.len())
            .map(|index| format_ident!("arg{}", index))
            .collect();
        let params = &self.params;

        quote! {
            impl<__F> #trait_name for ::objalg_core::Adapter<__F, #args_type>
            where
                __F: ::objalg_core::Callable<#args_type, Output = #output>,
            {
                fn #method(&self #(, #arg_names: #params)*) -> #output {
                    self.forwarder().invoke((#(#arg_names,)*))
                }
            }
        }
    }

    /// Implements `Interface` for the boxed trait object.
    fn generate_interface_impl(&self) -> TokenStream {
        let trait_name = &self.item.ident;
        let args_type = self.args_type();
        let output = &self.output;
        let descriptor = self.generate_descriptor();

        quote! {
            impl ::objalg_core::Interface for ::std::boxed::Box<dyn #trait_name> {
                type Args = #args_type;
                type Output = #output;

                const DESCRIPTOR: ::objalg_core::InterfaceDescriptor = #descriptor;

                fn from_adapter<__F>(adapter: ::objalg_core::Adapter<__F, Self::Args>) -> Self
                where
                    __F: ::objalg_core::Callable<Self::Args, Output = Self::Output> + 'static,
                {
                    ::std::boxed::Box::new(adapter)
                }
            }
        }
    }

    /// Implements `SyncInterface` for the thread-safe boxed trait object.
    fn generate_sync_interface_impl(&self) -> TokenStream {
        let trait_name = &self.item.ident;
        let args_type = self.args_type();
        let output = &self.output;

        quote! {
            impl ::objalg_core::SyncInterface
                for ::std::boxed::Box<dyn #trait_name + ::core::marker::Send + ::core::marker::Sync>
            {
                type Args = #args_type;
                type Output = #output;

                const DESCRIPTOR: ::objalg_core::InterfaceDescriptor =
                    <::std::boxed::Box<dyn #trait_name> as ::objalg_core::Interface>::DESCRIPTOR;

                fn from_adapter<__F>(adapter: ::objalg_core::Adapter<__F, Self::Args>) -> Self
                where
                    __F: ::objalg_core::Callable<Self::Args, Output = Self::Output>
                        + ::core::marker::Send
                        + ::core::marker::Sync
                        + 'static,
                {
                    ::std::boxed::Box::new(adapter)
                }
            }
        }
    }

    fn generate_descriptor(&self) -> TokenStream {
        let name = self.item.ident.to_string();
        let method = self.method.to_string();
        let params = self.params.iter().map(type_name);
        let output = type_name(&self.output);

        quote! {
            ::objalg_core::InterfaceDescriptor {
                name: #name,
                method: #method,
                params: &[#(#params),*],
                output: #output,
            }
        }
    }
}
