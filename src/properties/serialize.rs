use std::fmt::{self, Write};

use super::{PropertyValue, Tag};

/// A single tagged field of a record.
pub struct Field<'a> {
    pub tag: &'static str,
    pub value: &'a dyn PropertyValue,
}

impl<'a> Field<'a> {
    pub fn new(tag: &'static str, value: &'a dyn PropertyValue) -> Field<'a> {
        Field { tag, value }
    }
}

/// A record that can be serialized as property lines.
pub trait Properties {
    /// Returns the tagged fields of the record, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    fn to_properties(&self) -> String {
        serialize(self)
    }
}

/// Writes the record's properties to `out` as `key=value` lines separated by `\n`, without a
/// trailing newline.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn write_properties<P, W>(record: &P, out: &mut W) -> fmt::Result
where
    P: Properties + ?Sized,
    W: Write,
{
    let mut first = true;
    for field in record.fields() {
        let tag = Tag::parse(field.tag);
        if tag.is_skipped() || (tag.omit_empty && field.value.is_empty_value()) {
            continue;
        }
        if !first {
            out.write_char('\n')?;
        }
        first = false;
        write!(out, "{}=", tag.key)?;
        field.value.write_value(out)?;
    }
    Ok(())
}

/// Serializes the record into a [`String`] of property lines.
///
/// Writing into a `String` only fails when a [`PropertyValue::write_value`] implementation
/// reports an error. Serialization stops at that value, and the returned string holds everything
/// written before it, up to and including the failing field's `key=`. Use [`write_properties`] to
/// observe the error instead.
pub fn serialize<P: Properties + ?Sized>(record: &P) -> String {
    let mut out = String::new();
    if let Err(error) = write_properties(record, &mut out) {
        tracing::warn!(%error, written = out.len(), "property value failed to write, output truncated");
    }
    out
}

/// Implements [`Properties`] for a struct by pairing field names with their tags.
///
/// Only the listed fields are serialized, in the order they are listed.
#[macro_export]
macro_rules! impl_properties {
    ($name:ident { $($field:ident : $tag:literal),* $(,)? }) => {
        impl $crate::properties::Properties for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::properties::Field<'_>> {
                ::std::vec![
                    $($crate::properties::Field::new($tag, &self.$field)),*
                ]
            }
        }
    };
}
