/// A top-level grouping entry in the table-of-contents document, typically a
/// code namespace.
///
/// Scalar fields are `Option` so that the parser's first-occurrence-wins
/// semantics are explicit: `None` means the field has not been seen yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    /// Unique identifier of the namespace entry.
    pub uid: String,
    /// Display name shown in the rendered table of contents.
    pub name: Option<String>,
    /// Entry kind tag, `Namespace` in generated documents.
    pub kind: Option<String>,
    /// Documentation entries belonging to this namespace, in document order.
    pub items: Vec<Item>,
}

impl Namespace {
    /// Start a namespace record with only its identifier known.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: None,
            kind: None,
            items: Vec::new(),
        }
    }
}

/// A documentation entry within a namespace.
///
/// A dot-qualified display name (`Widget.Inner`) marks the entry as a
/// candidate for nesting under the sibling named by the prefix. Once nested,
/// a child keeps only the unqualified suffix as its name.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier of the entry.
    pub uid: String,
    /// Display name, possibly dot-qualified.
    pub name: Option<String>,
    /// Entry kind tag, e.g. `Class` or `Struct`.
    pub kind: Option<String>,
    /// Nested children. Empty until the nester populates it or an
    /// already-nested document is re-parsed.
    pub items: Vec<Item>,
}

impl Item {
    /// Start an item record with only its identifier known.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: None,
            kind: None,
            items: Vec::new(),
        }
    }
}
