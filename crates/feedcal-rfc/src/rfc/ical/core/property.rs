/// A single tokenized content line.
///
/// Borrowed from the unfolded line it came from. Any parameters that followed
/// the name (`DTSTART;TZID=Europe/Berlin`) have already been discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedProperty<'a> {
    /// Property name with parameters stripped, case preserved.
    pub name: &'a str,
    /// Raw value: everything after the first colon, unescaped later.
    pub value: &'a str,
}
