pub(crate) fn strip_html_tags(input: &str) -> String {
    // Drops `<...>` runs up to the next '>'; a '<' with no closing '>'
    // ahead is plain text, not a tag.
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }
    out.push_str(rest);
    out
}
