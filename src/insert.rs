// The block lands before the LAST line whose trimmed content is exactly `}`,
// scanning from the end of the document. Nested braces after that line and
// multi-class files are out of scope; the last matching line wins.
pub fn insert_before_closing_brace(content: &str, block: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let idx = lines.iter().rposition(|line| line.trim() == "}")?;
    lines.insert(idx, block);
    Some(lines.join("\n"))
}
