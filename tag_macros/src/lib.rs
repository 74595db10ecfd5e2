use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{braced, parse_macro_input, Attribute, Error, Ident, Index, Path, Token, Type, Visibility};

mod tag_set;

use tag_set::{path_key, tags_unique, TagSet};

/// One `Tag => ValueType` field association.
struct FieldAssoc {
    tag: Path,
    value_ty: Type,
}

impl Parse for FieldAssoc {
    fn parse(stream: ParseStream) -> syn::Result<Self> {
        let tag: Path = stream.parse()?;
        stream.parse::<Token![=>]>()?;
        let value_ty: Type = stream.parse()?;
        Ok(FieldAssoc { tag, value_ty })
    }
}

struct RecordDef {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    fields: Punctuated<FieldAssoc, Token![,]>,
}

impl Parse for RecordDef {
    fn parse(stream: ParseStream) -> syn::Result<Self> {
        let attrs = stream.call(Attribute::parse_outer)?;
        let vis: Visibility = stream.parse()?;
        stream.parse::<Token![type]>()?;
        let ident: Ident = stream.parse()?;
        let content;
        braced!(content in stream);
        let fields = content.parse_terminated(FieldAssoc::parse)?;
        Ok(RecordDef {
            attrs,
            vis,
            ident,
            fields,
        })
    }
}

struct RecordDefs {
    defs: Vec<RecordDef>,
}

impl Parse for RecordDefs {
    fn parse(stream: ParseStream) -> syn::Result<Self> {
        let mut defs = Vec::new();
        while !stream.is_empty() {
            defs.push(stream.parse()?);
        }
        Ok(RecordDefs { defs })
    }
}

/// Declares tag-indexed tuple types.
///
/// Each declaration names the record and lists its field associations in
/// declaration order, `Tag => ValueType`. The declaration expands to a type
/// alias of `tagged_tuple::TaggedTuple` plus one `tagged_tuple::Slot` impl
/// per field, wiring the tag to its slot position. Tags must be pairwise
/// distinct types; a duplicated tag rejects the whole declaration at
/// compile time.
///
/// ```
/// use tagged_tuple::{tagged_tuple, tags};
///
/// tags! {
///     struct Id;
///     struct Score;
/// }
///
/// tagged_tuple! {
///     type Row { Id => u32, Score => f64 }
/// }
///
/// let row = Row::new((7, 0.5));
/// assert_eq!(*row.get::<Id>(), 7);
/// ```
#[proc_macro]
pub fn tagged_tuple(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let defs = parse_macro_input!(input as RecordDefs);
    expand(&defs).into()
}

fn expand(defs: &RecordDefs) -> TokenStream {
    let mut errors: Vec<Error> = Vec::new();

    let body = defs
        .defs
        .iter()
        .map(|def| expand_record(def, &mut errors))
        .collect::<TokenStream>();

    let mut output = errors
        .iter()
        .map(Error::to_compile_error)
        .collect::<TokenStream>();
    output.extend(body);
    output
}

fn expand_record(def: &RecordDef, errors: &mut Vec<Error>) -> TokenStream {
    let attrs = &def.attrs;
    let vis = &def.vis;
    let name = &def.ident;

    let tags: Vec<&Path> = def.fields.iter().map(|f| &f.tag).collect();
    let value_tys: Vec<&Type> = def.fields.iter().map(|f| &f.value_ty).collect();

    let tag_paths: Vec<Path> = def.fields.iter().map(|f| f.tag.clone()).collect();
    let unique = tags_unique(&tag_paths);
    if !unique {
        // Re-run the fold to name every occurrence whose insertion into the
        // set was a no-op.
        let mut set = TagSet::new();
        for tag in &tag_paths {
            if !set.insert(tag) {
                errors.push(Error::new(
                    tag.span(),
                    format!(
                        "duplicated tag `{}` in tagged tuple `{}`",
                        path_key(tag),
                        name
                    ),
                ));
            }
        }
    }

    let mut output = quote! {
        #(#attrs)*
        #vis type #name = ::tagged_tuple::TaggedTuple<(#(#tags,)*), (#(#value_tys,)*)>;
    };

    // One Slot impl per field, resolving the tag to its declaration
    // position. Skipped when the tag list failed the uniqueness check; the
    // compile_error output above already rejects the definition, and a
    // duplicated tag would make the impls conflict anyway.
    if unique {
        for (position, field) in def.fields.iter().enumerate() {
            let tag = &field.tag;
            let value_ty = &field.value_ty;
            let index = Index::from(position);
            output.extend(quote! {
                impl ::tagged_tuple::Slot<#tag> for #name {
                    type Value = #value_ty;
                    const INDEX: usize = #position;

                    fn slot(&self) -> &#value_ty {
                        &self.values().#index
                    }

                    fn slot_mut(&mut self) -> &mut #value_ty {
                        &mut self.values_mut().#index
                    }

                    fn into_slot(self) -> #value_ty {
                        self.into_values().#index
                    }
                }
            });
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> RecordDefs {
        syn::parse_str(src).unwrap()
    }

    #[test]
    fn fields_are_kept_in_declaration_order() {
        let defs = parse("pub type Entry { A => u32, B => String, C => f64 }");
        assert_eq!(defs.defs.len(), 1);
        let tags: Vec<String> = defs.defs[0]
            .fields
            .iter()
            .map(|f| path_key(&f.tag))
            .collect();
        assert_eq!(tags, ["A", "B", "C"]);
    }

    #[test]
    fn several_records_parse_from_one_invocation() {
        let defs = parse("type P { A => i32 } type Q { B => i32 }");
        assert_eq!(defs.defs.len(), 2);
    }

    #[test]
    fn zero_field_records_are_legal() {
        let defs = parse("type Unit {}");
        assert!(defs.defs[0].fields.is_empty());
        let out = expand(&defs).to_string();
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn unique_tags_expand_to_one_slot_impl_per_field() {
        let defs = parse("type Entry { A => u32, B => u64 }");
        let out = expand(&defs).to_string();
        assert!(!out.contains("compile_error"));
        assert_eq!(out.matches("Slot <").count(), 2);
    }

    #[test]
    fn duplicated_tag_expands_to_a_compile_error() {
        let defs = parse("type Broken { A => u32, B => u16, A => u64 }");
        let out = expand(&defs).to_string();
        assert!(out.contains("compile_error"));
        assert!(out.contains("duplicated tag `A` in tagged tuple `Broken`"));
        // No slot impls are generated for a rejected declaration.
        assert_eq!(out.matches("Slot <").count(), 0);
    }
}
