//! Structured view construction for dynamically rendered regions.

#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(ViewElement),
    Text(String),
    LineBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    tag: &'static str,
    classes: Vec<String>,
    children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn element(tag: &'static str) -> ViewElement {
        ViewElement {
            tag,
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
            Self::LineBreak => String::new(),
        }
    }

    pub fn as_element(&self) -> Option<&ViewElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Every element in this subtree (including `self`) carrying `class`, in document order.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a ViewElement> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a ViewElement>) {
        if let Self::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Self::LineBreak => out.push_str("<br>"),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl ViewElement {
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::text(text))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn child_nodes(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(ViewNode::text_content).collect()
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(
                &self.classes.join(" "),
            ));
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<ViewElement> for ViewNode {
    fn from(element: ViewElement) -> Self {
        Self::Element(element)
    }
}

/// One `<li>` per entry.
pub fn list_items(items: &[String]) -> Vec<ViewNode> {
    items
        .iter()
        .map(|item| ViewNode::from(ViewNode::element("li").text(item.as_str())))
        .collect()
}
