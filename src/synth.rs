use crate::extract::Accessor;
use crate::naming::bean_getter_name;

pub fn render_getter_block(accessors: &[Accessor], marker: &str) -> String {
    let mut block = format!("\n    {marker}");

    for accessor in accessors {
        let getter = bean_getter_name(&accessor.return_type, &accessor.name);
        block.push_str(&format!(
            "\n    public {} {}() {{ return {}; }}",
            accessor.return_type, getter, accessor.field
        ));
    }

    block
}
