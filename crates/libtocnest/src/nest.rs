use std::collections::HashSet;

use tracing::debug;

use crate::toc::{Item, Namespace};

/// Re-parent dot-qualified items under their enclosing type, per namespace.
///
/// A single pass over each namespace's original item list: for every item
/// whose display name contains a dot, the text before the last dot names the
/// parent and the text after it becomes the child's name. The first sibling
/// whose name matches the parent receives a child entry with the identifier
/// and kind copied verbatim. Items whose parent was matched are removed from
/// the top level once the full scan is done; items with no matching parent
/// stay where they are.
///
/// Nesting is one level deep per pass. Because removal happens only after the
/// scan, an `A.B.C` item attaches its child to the still-present `A.B` entry,
/// which the filter then drops along with the attachment. Matching is purely
/// textual and never crosses namespace boundaries.
pub fn nest_items(namespaces: &mut [Namespace]) {
    for ns in namespaces.iter_mut() {
        if ns.items.is_empty() {
            continue;
        }

        // Full dotted names of items that found a parent.
        let mut nested: HashSet<String> = HashSet::new();

        for idx in 0..ns.items.len() {
            let Some(name) = ns.items[idx].name.clone() else {
                continue;
            };
            let Some((parent_name, suffix)) = name.rsplit_once('.') else {
                continue;
            };

            // First textual match wins.
            let parent = ns
                .items
                .iter()
                .position(|item| item.name.as_deref() == Some(parent_name));
            if let Some(parent_idx) = parent {
                let child = Item {
                    uid: ns.items[idx].uid.clone(),
                    name: Some(suffix.to_string()),
                    kind: ns.items[idx].kind.clone(),
                    items: Vec::new(),
                };
                ns.items[parent_idx].items.push(child);
                nested.insert(name);
            }
        }

        if !nested.is_empty() {
            debug!(
                namespace = %ns.uid,
                nested = nested.len(),
                "re-parented inner types"
            );
            ns.items
                .retain(|item| item.name.as_ref().is_none_or(|name| !nested.contains(name)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(uid: &str, name: &str, kind: &str) -> Item {
        Item {
            uid: uid.to_string(),
            name: Some(name.to_string()),
            kind: Some(kind.to_string()),
            items: Vec::new(),
        }
    }

    fn namespace(uid: &str, items: Vec<Item>) -> Namespace {
        Namespace {
            uid: uid.to_string(),
            name: Some(uid.to_string()),
            kind: Some("Namespace".to_string()),
            items,
        }
    }

    #[test]
    fn nests_child_under_parent() {
        let mut namespaces = vec![namespace(
            "N",
            vec![
                item("a", "Widget", "Class"),
                item("b", "Widget.Inner", "Struct"),
            ],
        )];
        nest_items(&mut namespaces);

        let items = &namespaces[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Widget"));
        assert_eq!(items[0].items, vec![item("b", "Inner", "Struct")]);
    }

    #[test]
    fn undotted_items_are_untouched() {
        let mut namespaces = vec![namespace(
            "N",
            vec![item("a", "Widget", "Class"), item("b", "Gadget", "Class")],
        )];
        let before = namespaces.clone();
        nest_items(&mut namespaces);
        assert_eq!(namespaces, before);
    }

    #[test]
    fn orphan_dotted_item_stays_at_top_level() {
        let mut namespaces = vec![namespace("N", vec![item("b", "Widget.Inner", "Class")])];
        nest_items(&mut namespaces);

        let items = &namespaces[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Widget.Inner"));
        assert!(items[0].items.is_empty());
    }

    #[test]
    fn children_keep_original_item_order() {
        let mut namespaces = vec![namespace(
            "N",
            vec![
                item("a", "Widget", "Class"),
                item("b", "Widget.Beta", "Class"),
                item("c", "Widget.Alpha", "Class"),
            ],
        )];
        nest_items(&mut namespaces);

        let children = &namespaces[0].items[0].items;
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name.as_deref(), Some("Beta"));
        assert_eq!(children[1].name.as_deref(), Some("Alpha"));
    }

    #[test]
    fn single_pass_over_three_dot_segments() {
        // A.B still sits at top level while A.B.C is scanned, so C attaches
        // to the A.B entry that the post-scan filter then removes. The output
        // keeps A with child B only.
        let mut namespaces = vec![namespace(
            "N",
            vec![
                item("a", "A", "Class"),
                item("ab", "A.B", "Class"),
                item("abc", "A.B.C", "Class"),
            ],
        )];
        nest_items(&mut namespaces);

        let items = &namespaces[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("A"));
        assert_eq!(items[0].items, vec![item("ab", "B", "Class")]);
    }

    #[test]
    fn no_nesting_across_namespaces() {
        let mut namespaces = vec![
            namespace("N1", vec![item("a", "Widget", "Class")]),
            namespace("N2", vec![item("b", "Widget.Inner", "Class")]),
        ];
        nest_items(&mut namespaces);

        assert!(namespaces[0].items[0].items.is_empty());
        assert_eq!(namespaces[1].items[0].name.as_deref(), Some("Widget.Inner"));
    }

    #[test]
    fn namespace_without_items_is_skipped() {
        let mut namespaces = vec![namespace("N", Vec::new())];
        nest_items(&mut namespaces);
        assert!(namespaces[0].items.is_empty());
    }
}
