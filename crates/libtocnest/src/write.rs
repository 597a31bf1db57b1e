use std::fmt::Write;

use crate::toc::{Item, Namespace};

/// Fixed first line of a DocFX table-of-contents document.
pub const HEADER: &str = "### YamlMime:TableOfContent";

/// Serialize the namespace forest back into document text.
///
/// Two spaces of indentation per level, children emitted as an indented
/// `items:` sub-list under their parent. The output always ends with a
/// trailing newline. Fields that were never set serialize as empty values.
pub fn write_toc(namespaces: &[Namespace]) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("items:\n");

    for ns in namespaces {
        writeln!(out, "- uid: {}", ns.uid).expect("write toc entry");
        writeln!(out, "  name: {}", ns.name.as_deref().unwrap_or("")).expect("write toc entry");
        writeln!(out, "  type: {}", ns.kind.as_deref().unwrap_or("")).expect("write toc entry");
        if !ns.items.is_empty() {
            out.push_str("  items:\n");
            for item in &ns.items {
                write_item(&mut out, item, 1);
            }
        }
    }

    out
}

/// Emit one item and, recursively, its children one level deeper.
fn write_item(out: &mut String, item: &Item, indent: usize) {
    let prefix = "  ".repeat(indent);
    writeln!(out, "{prefix}- uid: {}", item.uid).expect("write toc entry");
    writeln!(out, "{prefix}  name: {}", item.name.as_deref().unwrap_or(""))
        .expect("write toc entry");
    writeln!(out, "{prefix}  type: {}", item.kind.as_deref().unwrap_or(""))
        .expect("write toc entry");
    if !item.items.is_empty() {
        writeln!(out, "{prefix}  items:").expect("write toc entry");
        for child in &item.items {
            write_item(out, child, indent + 1);
        }
    }
}
