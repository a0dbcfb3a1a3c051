/// A parsed field tag, such as `"address,omitempty"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub key: &'a str,
    pub omit_empty: bool,
}

impl<'a> Tag<'a> {
    pub const OMIT_EMPTY: &'static str = "omitempty";

    /// Parses a tag. Options other than `omitempty` are ignored.
    ///
    /// # Examples
    /// ```
    /// # use exercise_lib::properties::Tag;
    /// let tag = Tag::parse("address,omitempty");
    /// assert_eq!(tag.key, "address");
    /// assert!(tag.omit_empty);
    /// ```
    pub fn parse(tag: &'a str) -> Tag<'a> {
        let mut parts = tag.split(',');
        let key = parts.next().unwrap_or_default();
        Tag {
            key,
            omit_empty: parts.any(|option| option == Self::OMIT_EMPTY),
        }
    }

    /// Returns true if fields with this tag are not serialized at all.
    pub const fn is_skipped(&self) -> bool {
        self.key.is_empty()
    }
}
