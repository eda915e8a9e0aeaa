#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
    children: Vec<CssRule>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, rule: CssRule) -> Self {
        self.children.push(rule);
        self
    }

    pub fn render(&self) -> String {
        self.render_internal(0)
    }

    fn render_internal(&self, indent: usize) -> String {
        let indent_str = "    ".repeat(indent);
        let inner_indent = "    ".repeat(indent + 1);

        let mut css = format!("{indent_str}{} {{\n", self.selector);

        for (name, value) in &self.properties {
            css.push_str(&format!("{inner_indent}{name}: {value};\n"));
        }

        for child in &self.children {
            css.push_str(&child.render_internal(indent + 1));
        }

        css.push_str(&format!("{indent_str}}}\n"));
        css
    }
}

pub fn render_rules(rules: &[CssRule]) -> String {
    rules.iter().map(CssRule::render).collect()
}

/// Escapes a class name for use in a selector (`md:p-0.5` -> `md\:p-0\.5`).
pub fn escape_class(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
