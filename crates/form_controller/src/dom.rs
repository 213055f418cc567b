//! Owned, in-memory page model the controller reads from and writes into.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::view::ViewNode;

/// Class that hides a region.
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Element(NodeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub smooth: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: Option<String>,
    tag: String,
    attrs: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    style: BTreeMap<String, String>,
    value: Option<String>,
    default_value: Option<String>,
    disabled: bool,
    form_owner: Option<NodeId>,
    children: Vec<NodeId>,
    content: Vec<ViewNode>,
}

impl Element {
    fn new(tag: &str, id: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            tag: tag.to_string(),
            attrs: BTreeMap::new(),
            classes: BTreeSet::new(),
            style: BTreeMap::new(),
            value: None,
            default_value: None,
            disabled: false,
            form_owner: None,
            children: Vec::new(),
            content: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_string(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn is_hidden(&self) -> bool {
        self.has_class(HIDDEN_CLASS)
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.add_class(HIDDEN_CLASS);
        } else {
            self.remove_class(HIDDEN_CLASS);
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Sets both the current and the default value, like an HTML `value` attribute.
    pub fn set_initial_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = Some(value.clone());
        self.default_value = Some(value);
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn content(&self) -> &[ViewNode] {
        &self.content
    }

    /// Drops whatever was rendered into this element and puts `content` in its place.
    pub fn replace_content(&mut self, content: Vec<ViewNode>) {
        self.content = content;
    }

    pub fn text(&self) -> String {
        self.content.iter().map(ViewNode::text_content).collect()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = vec![ViewNode::text(text)];
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Element>,
    by_id: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
    last_scroll: Option<ScrollRequest>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element under `parent`, or at the top level when `parent` is `None`.
    /// An id already taken by another element stays bound to the first one.
    pub fn append(&mut self, parent: Option<NodeId>, tag: &str, id: Option<&str>) -> NodeId {
        let node = NodeId(self.nodes.len());
        let mut element = Element::new(tag, id);
        element.form_owner = parent.and_then(|parent| {
            if self.nodes[parent.0].tag == "form" {
                Some(parent)
            } else {
                self.nodes[parent.0].form_owner
            }
        });
        self.nodes.push(element);

        if let Some(id) = id {
            self.by_id.entry(id.to_string()).or_insert(node);
        }
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(node),
            None => self.roots.push(node),
        }
        node
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    pub fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    /// Convenience for lookups by id in tests and callers that do not keep handles.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.get_element_by_id(id).map(|node| self.element(node))
    }

    /// Detaches the element with `id` (and its subtree) from the page.
    pub fn remove_element(&mut self, id: &str) -> bool {
        let Some(node) = self.by_id.remove(id) else {
            return false;
        };
        self.roots.retain(|root| *root != node);
        for element in &mut self.nodes {
            element.children.retain(|child| *child != node);
        }
        let mut stack = self.nodes[node.0].children.clone();
        while let Some(child) = stack.pop() {
            if let Some(child_id) = self.nodes[child.0].id.clone() {
                if self.by_id.get(&child_id) == Some(&child) {
                    self.by_id.remove(&child_id);
                }
            }
            stack.extend(self.nodes[child.0].children.iter().copied());
        }
        true
    }

    /// Restores every control owned by `form` to its default value.
    pub fn reset_form(&mut self, form: NodeId) {
        for element in &mut self.nodes {
            if element.form_owner == Some(form) && element.default_value.is_some() {
                element.value = element.default_value.clone();
            }
        }
    }

    pub fn scroll_to(&mut self, target: ScrollTarget) {
        self.last_scroll = Some(ScrollRequest {
            target,
            smooth: true,
        });
    }

    pub fn last_scroll(&self) -> Option<ScrollRequest> {
        self.last_scroll
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for root in &self.roots {
            self.write_element_html(*root, &mut out);
        }
        out
    }

    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_element_html(node, &mut out);
        out
    }

    fn write_element_html(&self, node: NodeId, out: &mut String) {
        let element = &self.nodes[node.0];
        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = &element.id {
            push_attr(out, "id", id);
        }
        if !element.classes.is_empty() {
            let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
            push_attr(out, "class", &classes.join(" "));
        }
        for (name, value) in &element.attrs {
            push_attr(out, name, value);
        }
        if let Some(value) = &element.value {
            push_attr(out, "value", value);
        }
        if element.disabled {
            out.push_str(" disabled");
        }
        if !element.style.is_empty() {
            let style: Vec<String> = element
                .style
                .iter()
                .map(|(property, value)| format!("{property}: {value}"))
                .collect();
            push_attr(out, "style", &style.join("; "));
        }
        out.push('>');

        if element.tag == "input" {
            return;
        }
        for child in &element.children {
            self.write_element_html(*child, out);
        }
        for node in &element.content {
            node.write_html(out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
