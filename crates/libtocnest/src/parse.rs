use tracing::debug;

use crate::toc::{Item, Namespace};

/// The shapes of lines the parser recognizes, after stripping indentation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LineKind<'a> {
    /// `- uid: <value>` — starts a namespace, item or child depending on depth.
    Entry(&'a str),
    /// `name: <value>` scalar field.
    Name(&'a str),
    /// `type: <value>` scalar field.
    Type(&'a str),
    /// Bare `items:` marker announcing that entries follow.
    ItemsMarker,
}

/// Where the parser currently sits in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    /// Before the first namespace entry.
    Start,
    /// Reading a namespace's scalar fields.
    Namespace,
    /// Reading a top-level item's scalar fields.
    Item,
    /// Reading a nested child entry's scalar fields.
    Child,
}

/// Line-oriented parser for the narrow `YamlMime:TableOfContent` subset the
/// documentation generator emits.
///
/// This is not a YAML parser. Lines are matched by exact indentation width
/// (two spaces per level) and a handful of known prefixes; anything else is
/// silently ignored so that partial or unexpected content degrades to partial
/// records rather than errors.
struct Parser {
    /// Completed namespaces, in document order.
    namespaces: Vec<Namespace>,
    /// Namespace currently being accumulated, if any.
    current: Option<Namespace>,
    /// Current position in the entry hierarchy.
    state: State,
}

impl Parser {
    /// Create a parser positioned before any content.
    fn new() -> Self {
        Self {
            namespaces: Vec::new(),
            current: None,
            state: State::Start,
        }
    }

    /// Consume one line of input.
    fn feed(&mut self, line: &str) {
        let stripped = line.trim();
        // Blank lines and the YamlMime header carry no structure.
        if stripped.is_empty() || stripped.starts_with("###") {
            return;
        }
        let indent = line.len() - line.trim_start().len();
        let Some(kind) = classify(stripped) else {
            return;
        };

        match (indent, kind) {
            (0, LineKind::Entry(uid)) => {
                self.flush();
                self.current = Some(Namespace::new(uid));
                self.state = State::Namespace;
            }
            (2, LineKind::Name(value)) => {
                if let Some(ns) = &mut self.current {
                    set_if_unset(&mut ns.name, value);
                }
            }
            (2, LineKind::Type(value)) => {
                if let Some(ns) = &mut self.current {
                    set_if_unset(&mut ns.kind, value);
                }
            }
            (2, LineKind::Entry(uid)) => {
                if let Some(ns) = &mut self.current {
                    ns.items.push(Item::new(uid));
                    self.state = State::Item;
                }
            }
            (4, LineKind::Name(value)) if self.in_item() => {
                if let Some(item) = self.current_item() {
                    set_if_unset(&mut item.name, value);
                }
            }
            (4, LineKind::Type(value)) if self.in_item() => {
                if let Some(item) = self.current_item() {
                    set_if_unset(&mut item.kind, value);
                }
            }
            (4, LineKind::Entry(uid)) if self.in_item() => {
                if let Some(item) = self.current_item() {
                    item.items.push(Item::new(uid));
                    self.state = State::Child;
                }
            }
            (6, LineKind::Name(value)) if self.state == State::Child => {
                if let Some(child) = self.current_child() {
                    set_if_unset(&mut child.name, value);
                }
            }
            (6, LineKind::Type(value)) if self.state == State::Child => {
                if let Some(child) = self.current_child() {
                    set_if_unset(&mut child.kind, value);
                }
            }
            // Markers only announce that entries follow at the next depth.
            (0 | 2 | 4, LineKind::ItemsMarker) => {}
            // Unrecognized indentation for an otherwise known shape.
            _ => {}
        }
    }

    /// Whether the parser is positioned inside a top-level item.
    fn in_item(&self) -> bool {
        matches!(self.state, State::Item | State::Child)
    }

    /// The item currently accumulating fields, if any.
    fn current_item(&mut self) -> Option<&mut Item> {
        self.current.as_mut().and_then(|ns| ns.items.last_mut())
    }

    /// The nested child currently accumulating fields, if any.
    fn current_child(&mut self) -> Option<&mut Item> {
        self.current_item().and_then(|item| item.items.last_mut())
    }

    /// Move the in-progress namespace into the completed list.
    fn flush(&mut self) {
        if let Some(ns) = self.current.take() {
            self.namespaces.push(ns);
        }
    }

    /// Flush the final in-progress namespace and return the forest.
    fn finish(mut self) -> Vec<Namespace> {
        self.flush();
        self.namespaces
    }
}

/// Match a stripped line against the known shapes.
fn classify(stripped: &str) -> Option<LineKind<'_>> {
    if let Some(rest) = stripped.strip_prefix("- uid:") {
        return Some(LineKind::Entry(rest.trim()));
    }
    if let Some(rest) = stripped.strip_prefix("name:") {
        return Some(LineKind::Name(rest.trim()));
    }
    if let Some(rest) = stripped.strip_prefix("type:") {
        return Some(LineKind::Type(rest.trim()));
    }
    if stripped == "items:" {
        return Some(LineKind::ItemsMarker);
    }
    None
}

/// Assign a scalar field only on its first occurrence.
fn set_if_unset(slot: &mut Option<String>, value: &str) {
    if slot.is_none() {
        *slot = Some(value.to_string());
    }
}

/// Parse the full text of a table-of-contents document into namespace records.
///
/// The parser never fails; malformed content yields empty or partial records.
pub fn parse_toc(content: &str) -> Vec<Namespace> {
    let mut parser = Parser::new();
    for line in content.lines() {
        parser.feed(line);
    }
    let namespaces = parser.finish();
    debug!(namespaces = namespaces.len(), "parsed toc document");
    namespaces
}
