// src/core/html.rs

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<o …>…</c>` block at or after `from`. Case-insensitive tag match;
/// returned range covers opener through closing tag.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// Opening tag of a block, through its `>`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..i + 1],
        None => block,
    }
}

/// Value of `name=…` inside a tag opener. Tolerates double quotes, single
/// quotes, and unquoted values; attribute name matched case-insensitively.
pub fn attr_value<'a>(opener: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));
    let p = lc.find(&pat)? + pat.len();
    let val = &opener[p..];
    match val.as_bytes().first() {
        Some(b'"') => val[1..].find('"').map(|e| &val[1..1 + e]),
        Some(b'\'') => val[1..].find('\'').map(|e| &val[1..1 + e]),
        _ => {
            let end = val
                .find(|c: char| c.is_ascii_whitespace() || c == '>')
                .unwrap_or(val.len());
            Some(&val[..end])
        }
    }
}

/// Class tokens of a block's opening tag. Empty when no class attribute.
pub fn class_tokens(block: &str) -> Vec<&str> {
    attr_value(opener(block), "class")
        .map(|v| v.split_whitespace().collect())
        .unwrap_or_default()
}

/// Exact-token class test on a block's opening tag. Class names on the
/// source pages are case-sensitive markers; no folding here.
pub fn opener_has_class(block: &str, class: &str) -> bool {
    class_tokens(block).iter().any(|t| *t == class)
}

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
    fn attr_value_handles_quote_styles() {
        assert_eq!(attr_value(r#"<td class="a b">"#, "class"), Some("a b"));
        assert_eq!(attr_value("<td class='a b'>", "class"), Some("a b"));
        assert_eq!(attr_value("<td class=plain>", "class"), Some("plain"));
        assert_eq!(attr_value("<td>", "class"), None);
    }

    #[test]
    fn class_token_match_is_exact() {
        let block = r#"<td class="Table__TD Table_Headers">DATE</td>"#;
        assert!(opener_has_class(block, "Table_Headers"));
        assert!(!opener_has_class(block, "Table_Header"));
        assert!(!opener_has_class(block, "table_headers"));
    }

    #[test]
    fn tag_blocks_walk_in_order() {
        let doc = "<tr><td>a</td><td>b</td></tr>";
        let (s1, e1) = next_tag_block_ci(doc, "<td", "</td>", 0).unwrap();
        assert_eq!(&doc[s1..e1], "<td>a</td>");
        let (s2, e2) = next_tag_block_ci(doc, "<td", "</td>", e1).unwrap();
        assert_eq!(&doc[s2..e2], "<td>b</td>");
        assert!(next_tag_block_ci(doc, "<td", "</td>", e2).is_none());
    }
}
