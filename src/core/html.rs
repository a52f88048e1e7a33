// src/core/html.rs
//
// Just-enough tag soup helpers for the highscore table. Case-insensitive
// on ASCII tag names, tolerant of attributes in the open tag.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Byte range of the next `<open ...> ... </close>` block at or after `from`.
/// Returns (start_of_open_tag, end_past_close_tag).
pub fn next_tag_block_ci(s: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(open);
    let cl = to_lower(close);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + close.len();
    Some((start, end))
}

/// Content between the first `>` and the last `<` of a tag block.
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

/// Drop every `<...>` run, then collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_block_is_case_insensitive() {
        let doc = "x<TR class=a><td>1</td></TR>y";
        let (s, e) = next_tag_block_ci(doc, "<tr", "</tr>", 0).unwrap();
        assert_eq!(&doc[s..e], "<TR class=a><td>1</td></TR>");
    }

    #[test]
    fn strip_tags_collapses_ws() {
        assert_eq!(strip_tags("<b>Sir   Gareth</b>\n<i>!</i>"), "Sir Gareth !");
    }
}
