/// Splits `text` into consecutive slices of at most `max_units` UTF-16 code
/// units, the unit Notion measures rich text length in.
///
/// Cuts fall on character boundaries, never inside a UTF-8 sequence or a
/// surrogate pair, and nothing is trimmed or re-wrapped: concatenating the
/// slices yields `text`. A `max_units` of zero is treated as one; a single
/// character wider than the limit gets a segment of its own.
#[must_use]
pub fn split_segments(text: &str, max_units: usize) -> Vec<&str> {
    let max_units = max_units.max(1);
    let mut segments = Vec::new();
    let mut start = 0;
    let mut units = 0;

    for (idx, c) in text.char_indices() {
        let width = c.len_utf16();
        if units > 0 && units + width > max_units {
            segments.push(&text[start..idx]);
            start = idx;
            units = 0;
        }
        units += width;
    }

    if start < text.len() {
        segments.push(&text[start..]);
    }

    segments
}

/// Number of slices [`split_segments`] produces for the same input.
#[must_use]
pub fn segment_count(text: &str, max_units: usize) -> usize {
    split_segments(text, max_units).len()
}
