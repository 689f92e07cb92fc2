pub fn bean_getter_name(return_type: &str, name: &str) -> String {
    if return_type == "boolean" && name.starts_with("is") {
        capitalize_first(name)
    } else {
        format!("get{}", capitalize_first(name))
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
