//! Backward scans over a line prefix.
//!
//! Both hover and completion need the same anchor: a run of path characters
//! that sits right after whitespace, inside an open `{{ ...` region with no
//! intervening `}`. This mirrors the tag argument shape, anchored to a
//! position in the line instead of to a tag closer.

/// Find the start of the longest run of non-whitespace, non-`}` characters
/// ending at `end` (a char index into `chars`), and check the anchor:
/// the char before the run must be whitespace, and a `{{` opener must
/// precede it with no `}` in between. Returns the run's start index; the
/// run itself may be empty.
pub(crate) fn tag_path_start(chars: &[char], end: usize) -> Option<usize> {
    let mut start = end;
    while start > 0 && !chars[start - 1].is_whitespace() && chars[start - 1] != '}' {
        start -= 1;
    }
    if start == 0 || !chars[start - 1].is_whitespace() {
        return None;
    }
    let region_end = start - 1;
    let open_end = last_tag_open(&chars[..region_end])?;
    if chars[open_end..region_end].contains(&'}') {
        return None;
    }
    Some(start)
}

/// Index just past the rightmost `{{` in `chars`. Rightmost is enough: any
/// earlier opener spans a superset of the same region, so a disqualifying
/// `}` disqualifies it too.
fn last_tag_open(chars: &[char]) -> Option<usize> {
    if chars.len() < 2 {
        return None;
    }
    (0..chars.len() - 1)
        .rev()
        .find(|&i| chars[i] == '{' && chars[i + 1] == '{')
        .map(|i| i + 2)
}
