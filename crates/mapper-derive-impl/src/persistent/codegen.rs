// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for `impl Persistent`.
//!
//! Type names come from `std::any::type_name`, so the names the precompiler
//! looks up (domain types, embedded types, id classes) always agree with
//! what `MappingContext::register` stored.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{ConditionConfig, EntityDef, FieldDef, FieldKind, GeneratedConfig, SequenceDef};

/// Generate the trait impl and, for example entities, the companion alias.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let builder = entity_builder(entity);
    let register = register_embedded(entity);
    let companion = example_alias(entity);

    quote! {
        impl #impl_generics ::mapper_core::Persistent for #ident #ty_generics #where_clause {
            fn persistent_entity() -> ::mapper_core::PersistentEntity {
                #builder
            }

            #register
        }

        #companion
    }
}

fn entity_builder(entity: &EntityDef) -> TokenStream {
    let table = &entity.table;
    let schema = entity.schema.as_ref().map(|schema| quote! { .schema(#schema) });
    let quoted = entity.quoted.then(|| quote! { .quoted_table() });
    let generators = entity
        .sequence_generators
        .iter()
        .map(|generator| {
            let generator = sequence_generator(generator);
            quote! { .sequence_generator(#generator) }
        });
    let properties = entity.fields.iter().map(|field| {
        let property = property(field);
        quote! { .property(#property) }
    });
    let id_class = entity
        .id_class
        .as_ref()
        .map(|path| quote! { .id_class(::std::any::type_name::<#path>()) });
    let example = entity.example.then(|| {
        let companion = entity.example_name();
        quote! {
            .example()
            .example_companion(concat!(module_path!(), "::", #companion))
        }
    });
    let embeddable = entity.embeddable.then(|| quote! { .embeddable() });

    quote! {
        ::mapper_core::PersistentEntity::builder(::std::any::type_name::<Self>(), #table)
            #schema
            #quoted
            #(#generators)*
            #(#properties)*
            #id_class
            #example
            #embeddable
            .build()
    }
}

fn property(field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let ty = &field.ty;
    let type_name = quote! { ::std::any::type_name::<#ty>() };

    let base = match field.kind {
        FieldKind::Basic | FieldKind::Id => {
            let constructor = if field.kind == FieldKind::Id {
                format_ident!("id")
            } else {
                format_ident!("basic")
            };
            let column = column(field);
            quote! { ::mapper_core::PersistentProperty::#constructor(#name, #type_name, #column) }
        }
        FieldKind::EmbeddedId => {
            quote! { ::mapper_core::PersistentProperty::embedded_id(#name, #type_name) }
        }
        FieldKind::Embedded => {
            quote! { ::mapper_core::PersistentProperty::embedded(#name, #type_name) }
        }
    };

    let generated = field.generated.as_ref().map(|generated| {
        let generated = generated_value(generated);
        quote! { .generated(#generated) }
    });
    let generators = field.sequence_generators.iter().map(|generator| {
        let generator = sequence_generator(generator);
        quote! { .sequence_generator(#generator) }
    });
    let conditions = field.conditions.iter().map(|condition| {
        let condition = condition_spec(condition);
        quote! { .condition(#condition) }
    });

    quote! {
        #base
            #generated
            #(#generators)*
            #(#conditions)*
    }
}

fn column(field: &FieldDef) -> TokenStream {
    let name = field.column_name();
    let jdbc = format_ident!("{}", field.jdbc_type());
    if field.column.quoted {
        quote! {
            ::mapper_core::Column::with_identifier(
                ::mapper_core::Identifier::quoted(#name),
                ::mapper_core::JdbcType::#jdbc
            )
        }
    } else {
        quote! { ::mapper_core::Column::new(#name, ::mapper_core::JdbcType::#jdbc) }
    }
}

fn generated_value(generated: &GeneratedConfig) -> TokenStream {
    let strategy = format_ident!("{}", generated.strategy);
    let generator = generated
        .generator
        .as_ref()
        .map(|generator| quote! { .generator(#generator) });
    quote! {
        ::mapper_core::GeneratedValue::new(::mapper_core::GenerationType::#strategy) #generator
    }
}

fn sequence_generator(generator: &SequenceDef) -> TokenStream {
    let name = &generator.name;
    let sequence = &generator.sequence;
    quote! { ::mapper_core::SequenceGenerator::new(#name, #sequence) }
}

fn condition_spec(condition: &ConditionConfig) -> TokenStream {
    let part = format_ident!("{}", condition.kind);
    let ignore_case = format_ident!("{}", condition.ignore_case);
    let column = condition
        .column
        .as_ref()
        .map(|column| quote! { .column(#column) });
    let properties = (!condition.properties.is_empty()).then(|| {
        let properties = &condition.properties;
        quote! { .properties([#(#properties),*]) }
    });
    quote! {
        ::mapper_core::ConditionSpec::new(::mapper_core::PartType::#part)
            .ignore_case(::mapper_core::IgnoreCaseType::#ignore_case)
            #column
            #properties
    }
}

fn register_embedded(entity: &EntityDef) -> Option<TokenStream> {
    let types: Vec<_> = entity.embedded_fields().map(|field| &field.ty).collect();
    if types.is_empty() {
        return None;
    }
    Some(quote! {
        fn register_embedded(context: &mut ::mapper_core::MappingContext) {
            #(context.register::<#types>();)*
        }
    })
}

fn example_alias(entity: &EntityDef) -> Option<TokenStream> {
    if !entity.example {
        return None;
    }
    let vis = &entity.vis;
    let alias = format_ident!("{}", entity.example_name());
    let doc = format!("Example companion of [`{}`].", entity.ident);
    Some(quote! {
        #[doc = #doc]
        #vis type #alias = ::mapper_core::Example;
    })
}
