//! The page being styled: its body is the render source, and a single
//! `<style id="css">` in its head receives generated CSS.

use crate::error::{EditorError, Result};
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::{Attribute, LocalName, Namespace, QualName, parse_document};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::RefCell;
use std::rc::Rc;

pub const STYLESHEET_ID: &str = "css";

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Serialized page. Each operation parses, works on the tree and, for
/// mutations, serializes back, so the document can cross threads.
#[derive(Clone, Debug)]
pub struct PreviewDocument {
    html: String,
}

impl PreviewDocument {
    pub fn parse(html: &str) -> Result<Self> {
        // Normalize once so `to_html` is stable across mutations.
        let dom = parse(html)?;
        Ok(Self {
            html: serialize_children(&dom.document)?,
        })
    }

    pub fn to_html(&self) -> &str {
        &self.html
    }

    /// Markup inside `<body>`, read fresh for every render request.
    pub fn body_markup(&self) -> Result<String> {
        let dom = parse(&self.html)?;
        let body = find_element(&dom.document, "body")
            .ok_or_else(|| EditorError::Document("page has no body".into()))?;
        serialize_children(&body)
    }

    pub fn stylesheet(&self) -> Result<Option<String>> {
        let dom = parse(&self.html)?;
        Ok(stylesheets(&dom.document).first().map(text_content))
    }

    pub fn stylesheet_count(&self) -> Result<usize> {
        let dom = parse(&self.html)?;
        Ok(stylesheets(&dom.document).len())
    }

    /// Creates the stylesheet element on first use, then only replaces its text.
    pub fn apply_stylesheet(&mut self, css: &str) -> Result<()> {
        let dom = parse(&self.html)?;
        let style = match stylesheets(&dom.document).into_iter().next() {
            Some(style) => style,
            None => {
                let head = find_element(&dom.document, "head")
                    .ok_or_else(|| EditorError::Document("page has no head".into()))?;
                let style = style_element();
                append(&head, style.clone());
                style
            }
        };

        let text = Node::new(NodeData::Text {
            contents: RefCell::new(StrTendril::from_slice(css)),
        });
        text.parent.set(Some(Rc::downgrade(&style)));
        *style.children.borrow_mut() = vec![text];

        self.html = serialize_children(&dom.document)?;
        Ok(())
    }
}

fn parse(html: &str) -> Result<RcDom> {
    Ok(parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?)
}

fn serialize_children(node: &Handle) -> Result<String> {
    let mut bytes = Vec::new();
    let handle: SerializableHandle = node.clone().into();
    serialize(
        &mut bytes,
        &handle,
        SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        },
    )?;
    String::from_utf8(bytes).map_err(|e| EditorError::Document(e.to_string()))
}

fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if let NodeData::Element { name, .. } = &node.data
        && &*name.local == tag
    {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn stylesheets(node: &Handle) -> Vec<Handle> {
    let mut found = Vec::new();
    collect_stylesheets(node, &mut found);
    found
}

fn collect_stylesheets(node: &Handle, found: &mut Vec<Handle>) {
    if let NodeData::Element { name, attrs, .. } = &node.data
        && &*name.local == "style"
        && attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == STYLESHEET_ID)
    {
        found.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_stylesheets(child, found);
    }
}

fn text_content(node: &Handle) -> String {
    node.children
        .borrow()
        .iter()
        .filter_map(|child| match &child.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                Some(String::from(&**contents))
            }
            _ => None,
        })
        .collect()
}

fn style_element() -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from("style"),
        ),
        attrs: RefCell::new(vec![Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from("id")),
            value: StrTendril::from_slice(STYLESHEET_ID),
        }]),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

fn append(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}
