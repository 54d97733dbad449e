//! Parsing of the `#[tag(...)]` and `#[tagged(...)]` helper attributes.

use syn::{Attribute, LitStr, Type};

/// Options given through `#[tag(...)]`.
#[derive(Default)]
pub struct TagOptions {
    pub embeds: Option<Type>,
    pub name: Option<LitStr>,
}

/// Collects every `#[tag(...)]` attribute.
///
/// `allow_embeds` is false for `#[derive(Struct)]`, whose tag never embeds.
pub fn parse_tag_options(attributes: &[Attribute], allow_embeds: bool) -> syn::Result<TagOptions> {
    let mut options = TagOptions::default();
    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("tag")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("embeds") && allow_embeds {
                options.embeds = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("name") {
                options.name = Some(meta.value()?.parse()?);
                Ok(())
            } else if allow_embeds {
                Err(meta.error("expected `embeds = Type` or `name = \"...\"`"))
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }
    Ok(options)
}

/// The tag named by `#[tagged(tag = ...)]`, if any.
pub fn parse_tagged_tag(attributes: &[Attribute]) -> syn::Result<Option<Type>> {
    let mut tag = None;
    for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("tagged")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                tag = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `tag = Type`"))
            }
        })?;
    }
    Ok(tag)
}
