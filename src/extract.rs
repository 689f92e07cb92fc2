use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub return_type: String,
    pub name: String,
    pub field: String,
}

// Matches a four-space indented public no-argument method whose body is a
// single `return <identifier>;` statement. The return type is one
// whitespace-free token, optionally carrying an angle-bracket generic suffix;
// generics containing spaces do not match.
fn accessor_re() -> &'static Regex {
    static ACCESSOR_RE: OnceLock<Regex> = OnceLock::new();
    ACCESSOR_RE.get_or_init(|| {
        Regex::new(r"    public\s+(\S+(?:<[^>]+>)?)\s+(\w+)\(\)\s*\{\s*return\s+(\w+);\s*\}")
            .expect("Invalid regex")
    })
}

pub fn extract_accessors(content: &str) -> Vec<Accessor> {
    accessor_re()
        .captures_iter(content)
        .map(|cap| Accessor {
            return_type: cap[1].to_string(),
            name: cap[2].to_string(),
            field: cap[3].to_string(),
        })
        .collect()
}
