//! Static dotted-path resolution for identifiers and member access
//!
//! Only two node shapes resolve: a bare `identifier` and a `member_expression`
//! whose object side resolves in turn. Computed access (`a[b]`), call results
//! (`f().x`), `this` and everything else resolve to `None`.

use tree_sitter::Node;

use crate::ast::get_node_text;

/// Resolve `node` to a dotted path such as `navigator.mediaDevices.getUserMedia`
pub fn resolve(node: &Node, source: &str) -> Option<String> {
    match node.kind() {
        "identifier" => Some(get_node_text(node, source)),
        "member_expression" => {
            let object = node.child_by_field_name("object")?;
            let property = node.child_by_field_name("property")?;
            let object_path = resolve(&object, source)?;
            Some(format!("{}.{}", object_path, get_node_text(&property, source)))
        }
        _ => None,
    }
}
