use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, Fields, GenericArgument, Ident, PathArguments, Type, parse_macro_input,
    spanned::Spanned,
};

pub fn derive_component_set(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match expand(&ast) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(ast: &DeriveInput) -> syn::Result<TokenStream2> {
    let set_name = &ast.ident;

    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "a component set cannot be generic",
        ));
    }

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new(
                    ast.span(),
                    "a component set must use named `Pool<T>` fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new(
                ast.span(),
                "a component set must be a struct",
            ));
        }
    };

    let mut field_names = Vec::with_capacity(fields.len());
    let mut components = Vec::with_capacity(fields.len());
    let mut names = Vec::with_capacity(fields.len());
    for field in fields {
        let (component, name) = pool_component(&field.ty)?;
        field_names.push(field.ident.clone());
        components.push(component);
        names.push(name.to_string());
    }

    let count = components.len();
    let ids: Vec<u32> = (0..count as u32).collect();

    Ok(quote! {
        const _: () = assert!(
            #count <= ::rusty_ecs::ecs::component::Signature::CAPACITY,
            "component set declares more components than a signature can hold"
        );

        impl ::rusty_ecs::ecs::component::Set for #set_name {
            const COUNT: usize = #count;

            fn names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn reserve(&mut self, slots: usize) {
                #(self.#field_names.reserve(slots);)*
            }

            fn clear(&mut self, index: usize) {
                #(self.#field_names.remove(index);)*
            }
        }

        #(
            impl ::rusty_ecs::ecs::component::Member<#set_name> for #components {
                const ID: ::rusty_ecs::ecs::component::Id =
                    ::rusty_ecs::ecs::component::Id::new(#ids);

                #[inline]
                fn pool(set: &#set_name) -> &::rusty_ecs::ecs::storage::Pool<Self> {
                    &set.#field_names
                }

                #[inline]
                fn pool_mut(set: &mut #set_name) -> &mut ::rusty_ecs::ecs::storage::Pool<Self> {
                    &mut set.#field_names
                }
            }
        )*
    })
}

/// Extract `T` (and its display name) from a field typed `Pool<T>`.
fn pool_component(ty: &Type) -> syn::Result<(&Type, &Ident)> {
    let not_a_pool = || syn::Error::new(ty.span(), "component set fields must be `Pool<T>`");

    let Type::Path(path) = ty else {
        return Err(not_a_pool());
    };
    let segment = path.path.segments.last().ok_or_else(not_a_pool)?;
    if segment.ident != "Pool" {
        return Err(not_a_pool());
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Err(not_a_pool());
    };
    if args.args.len() != 1 {
        return Err(not_a_pool());
    }
    let Some(GenericArgument::Type(component)) = args.args.first() else {
        return Err(not_a_pool());
    };
    let Type::Path(component_path) = component else {
        return Err(syn::Error::new(
            component.span(),
            "components must be named types",
        ));
    };
    let name = &component_path
        .path
        .segments
        .last()
        .ok_or_else(not_a_pool)?
        .ident;

    Ok((component, name))
}
