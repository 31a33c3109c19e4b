use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Token, Type, parse_macro_input, punctuated::Punctuated};

/// Derive macro for implementing `Visitable` for one or more visitor sets.
///
/// The sets are listed in a `#[visitable(..)]` attribute, which may appear
/// more than once:
///
/// ```rust,ignore
/// #[derive(Visitable)]
/// #[visitable(Shapes, Drawables)]
/// struct Circle {
///     radius: f64,
/// }
/// ```
#[proc_macro_derive(Visitable, attributes(visitable))]
pub fn derive_visitable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_visitable(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_visitable(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut sets: Vec<Type> = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("visitable")) {
        sets.extend(attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?);
    }

    if sets.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "`#[derive(Visitable)]` needs the visitor sets: add `#[visitable(SetName)]`",
        ));
    }

    let impls = sets.iter().map(|set| {
        quote! {
            impl #impl_generics ::visitant::Visitable<#set> for #name #ty_generics #where_clause {
                fn accept(&self, visitor: &mut <#set as ::visitant::VisitorSet>::Visitor<'_>) {
                    ::visitant::Visit::<Self>::visit(visitor, self)
                }

                fn accept_mut(&mut self, visitor: &mut <#set as ::visitant::VisitorSet>::VisitorMut<'_>) {
                    ::visitant::VisitMut::<Self>::visit_mut(visitor, self)
                }
            }
        }
    });

    Ok(quote! { #(#impls)* })
}

/// Derive macro for implementing `AcyclicVisitable`.
#[proc_macro_derive(AcyclicVisitable)]
pub fn derive_acyclic_visitable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::visitant::AcyclicVisitable for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
