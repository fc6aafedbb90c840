mod component;
mod set;

use proc_macro::TokenStream;

#[proc_macro_derive(Component)]
pub fn derive_component(item: TokenStream) -> TokenStream {
    component::derive_component(item)
}

/// Declare the closed set of component types a registry stores.
///
/// Every field must be a `Pool<T>`; field order assigns the signature bit of each component.
#[proc_macro_derive(ComponentSet)]
pub fn derive_component_set(item: TokenStream) -> TokenStream {
    set::derive_component_set(item)
}
