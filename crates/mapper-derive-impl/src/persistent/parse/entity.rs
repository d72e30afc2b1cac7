// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | snake_case of the struct name | Table name |
//! | `schema` | No | none | Schema prefix |
//! | `quoted` | No | `false` | Quote the table name |
//! | `example` | No | `false` | Query-by-example support and `{Name}Example` alias |
//! | `embeddable` | No | `false` | Type is only embedded in other entities |
//! | `id_class` | No | none | Composite key type for multiple `#[id]` fields |

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident, Visibility};

use super::{FieldDef, FieldKind, SequenceDef};

/// `#[entity(...)]` parsed by darling.
///
/// ```rust,ignore
/// #[entity(table = "users", schema = "core", example)]
/// #[entity(embeddable)]
/// #[entity(table = "pairs", id_class = "PairKey")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
struct EntityAttrs {
    ident: Ident,

    vis: Visibility,

    generics: Generics,

    #[darling(default)]
    table: Option<String>,

    #[darling(default)]
    schema: Option<String>,

    #[darling(default)]
    quoted: bool,

    #[darling(default)]
    example: bool,

    #[darling(default)]
    embeddable: bool,

    #[darling(default)]
    id_class: Option<syn::Path>
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, reused for the example alias.
    pub vis: Visibility,

    /// Struct generics.
    pub generics: Generics,

    /// Table name.
    pub table: String,

    /// Schema prefix.
    pub schema: Option<String>,

    /// Quote the table name.
    pub quoted: bool,

    /// Query-by-example support.
    pub example: bool,

    /// Embeddable value type.
    pub embeddable: bool,

    /// Composite key type.
    pub id_class: Option<syn::Path>,

    /// Struct-level sequence generators.
    pub sequence_generators: Vec<SequenceDef>,

    /// Persisted fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// ```rust,ignore
    /// match EntityDef::from_derive_input(&input) {
    ///     Ok(entity) => generate(entity),
    ///     Err(err) => err.write_errors().into()
    /// }
    /// ```
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Malformed entity or field attributes
    /// - More than one `#[embedded_id]`, or `#[embedded_id]` mixed with `#[id]`
    /// - `id_class` with fewer than two `#[id]` fields
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let syn::Data::Struct(data) = &input.data else {
            return Err(darling::Error::custom("Persistent can only be derived for structs")
                .with_span(&input.ident));
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = data
            .fields
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field)))
            .filter(|field| !field.transient)
            .collect();

        let sequence_generators = errors
            .handle(SequenceDef::from_attrs(&input.attrs).map_err(Into::into))
            .unwrap_or_default();

        let count = |kind: FieldKind| fields.iter().filter(|f| f.kind == kind).count();
        let ids = count(FieldKind::Id);
        let embedded_ids = count(FieldKind::EmbeddedId);

        if embedded_ids > 1 {
            errors.push(
                darling::Error::custom("at most one #[embedded_id] field is allowed")
                    .with_span(&input.ident)
            );
        }
        if embedded_ids > 0 && ids > 0 {
            errors.push(
                darling::Error::custom("#[embedded_id] cannot be combined with #[id]")
                    .with_span(&input.ident)
            );
        }
        if let Some(id_class) = &attrs.id_class
            && ids < 2
        {
            errors.push(
                darling::Error::custom("id_class requires at least two #[id] fields")
                    .with_span(id_class)
            );
        }

        errors.finish()?;

        let table = attrs
            .table
            .unwrap_or_else(|| attrs.ident.to_string().to_case(Case::Snake));

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            generics: attrs.generics,
            table,
            schema: attrs.schema,
            quoted: attrs.quoted,
            example: attrs.example,
            embeddable: attrs.embeddable,
            id_class: attrs.id_class,
            sequence_generators,
            fields
        })
    }

    /// Name of the example companion type, `{Name}Example`.
    #[must_use]
    pub fn example_name(&self) -> String {
        format!("{}Example", self.ident)
    }

    /// Fields whose types are embedded entities.
    pub fn embedded_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_embedded())
    }
}
