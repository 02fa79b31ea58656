//! `#[stack_trace_debug]`: derive a `Debug` impl for an error enum that
//! prints the `Display` of the error and then walks its `source()` chain,
//! one "Caused by" line per cause, instead of the derived field-dump
//! `Debug` that Rust would otherwise synthesize.
//!
//! Intended to sit directly above `#[derive(Snafu)]`:
//!
//! ```ignore
//! #[stack_trace_debug]
//! #[derive(Snafu)]
//! #[snafu(visibility(pub(crate)), module)]
//! pub enum MyError { .. }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::parse_macro_input;

#[proc_macro_attribute]
pub fn stack_trace_debug(_args: TokenStream, input: TokenStream) -> TokenStream {
    let item = parse_macro_input!(input as DeriveInput);
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();

    let expanded = quote! {
        #item

        impl #impl_generics ::std::fmt::Debug for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{self}")?;
                let mut cause = ::std::error::Error::source(self);
                while let Some(err) = cause {
                    write!(f, "\nCaused by: {err}")?;
                    cause = err.source();
                }
                Ok(())
            }
        }
    };

    expanded.into()
}
