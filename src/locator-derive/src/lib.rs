mod attrs;
mod impls;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::Result as SynResult;

/// Declares that a type derives from one or more interfaces by implementing
/// `locator::upcast::Upcast` for them.
///
/// On a trait implementation, the interface is the trait object of the
/// implemented trait:
///
/// ```rust,ignore
/// #[interface]
/// impl Logger for ConsoleLogger {
///     fn log(&self, message: &str) {
///         eprintln!("{message}");
///     }
/// }
/// ```
///
/// On a `struct` or `enum`, the interfaces are listed explicitly:
///
/// ```rust,ignore
/// #[interface(dyn Logger, dyn Flush)]
/// struct ConsoleLogger;
/// ```
#[proc_macro_attribute]
pub fn interface(attr: TokenStream, item: TokenStream) -> TokenStream {
    match interface_impl(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

fn interface_impl(attr: TokenStream, item: TokenStream) -> SynResult<TokenStream2> {
    let attr_data = attrs::parse_attributes(attr)?;
    let expanded = impls::expand_implementation(item, attr_data)?;
    Ok(expanded)
}
