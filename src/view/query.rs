//! Lookups over a render tree, modelled on how a user finds things on a page:
//! by role and accessible name, by element id, or by visible text.

use super::{Element, Node};

/// Semantic role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Textbox,
    Spinbutton,
    Button,
    Table,
    Rowgroup,
    Row,
    Columnheader,
    Cell,
    Heading,
    Form,
}

impl Element {
    /// Role implied by the tag, and for inputs by the `type` attribute.
    pub fn role(&self) -> Option<Role> {
        match self.tag {
            "input" => match self.get_attr("type").unwrap_or("text") {
                "text" | "email" | "tel" | "search" | "url" => Some(Role::Textbox),
                "number" => Some(Role::Spinbutton),
                "submit" | "button" => Some(Role::Button),
                _ => None,
            },
            "textarea" => Some(Role::Textbox),
            "button" => Some(Role::Button),
            "table" => Some(Role::Table),
            "thead" | "tbody" | "tfoot" => Some(Role::Rowgroup),
            "tr" => Some(Role::Row),
            "th" => Some(Role::Columnheader),
            "td" => Some(Role::Cell),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Some(Role::Heading),
            "form" => Some(Role::Form),
            _ => None,
        }
    }
}

impl Node {
    /// Every element in the tree, depth-first, root included.
    pub fn elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.elements().into_iter().find(|el| el.id() == Some(id))
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    pub fn find_all_by_role(&self, role: Role) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|el| el.role() == Some(role))
            .collect()
    }

    /// First element with `role` whose accessible name contains `name`,
    /// compared case-insensitively.
    pub fn find_by_role(&self, role: Role, name: &str) -> Option<&Element> {
        let needle = name.to_lowercase();
        self.find_all_by_role(role)
            .into_iter()
            .find(|el| self.accessible_name(el).to_lowercase().contains(&needle))
    }

    /// Accessible name of `element`: the text of its `<label for>` when it
    /// is a labelled control, its own text content otherwise.
    pub fn accessible_name(&self, element: &Element) -> String {
        if let Some(id) = element.id() {
            let label = self
                .find_all_by_tag("label")
                .into_iter()
                .find(|label| label.get_attr("for") == Some(id));
            if let Some(label) = label {
                return label.text_content().trim().to_string();
            }
        }
        element
            .get_attr("aria-label")
            .map(str::to_string)
            .unwrap_or_else(|| element.text_content().trim().to_string())
    }
}

fn collect_elements<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        out.push(element);
        for child in &element.children {
            collect_elements(child, out);
        }
    }
}

/// Rows of the first row group with the given tag (`thead` or `tbody`).
pub fn rows_in<'a>(root: &'a Node, group: &str) -> Vec<&'a Element> {
    root.find_all_by_tag(group)
        .into_iter()
        .next()
        .map(|el| {
            el.children
                .iter()
                .filter_map(Node::as_element)
                .filter(|child| child.tag == "tr")
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled_form() -> Node {
        Element::new("form")
            .child(Element::new("label").attr("for", "first-name").text("*First Name:"))
            .child(Element::new("input").attr("id", "first-name").attr("type", "text"))
            .child(Element::new("label").attr("for", "experience").text("*Experience:"))
            .child(Element::new("input").attr("id", "experience").attr("type", "number"))
            .child(Element::new("button").attr("type", "submit").text("Add User"))
            .into()
    }

    #[test]
    fn infers_roles_from_tag_and_type() {
        let form = labelled_form();
        assert_eq!(form.find_all_by_role(Role::Textbox).len(), 1);
        assert_eq!(form.find_all_by_role(Role::Spinbutton).len(), 1);
        assert_eq!(form.find_all_by_role(Role::Button).len(), 1);
        assert_eq!(form.find_all_by_role(Role::Form).len(), 1);
    }

    #[test]
    fn finds_controls_by_label_text() {
        let form = labelled_form();
        let first = form.find_by_role(Role::Textbox, "*first name:").unwrap();
        assert_eq!(first.id(), Some("first-name"));
        let experience = form.find_by_role(Role::Spinbutton, "experience").unwrap();
        assert_eq!(experience.id(), Some("experience"));
        assert!(form.find_by_role(Role::Textbox, "last name").is_none());
    }

    #[test]
    fn button_name_is_its_text() {
        let form = labelled_form();
        assert!(form.find_by_role(Role::Button, "add user").is_some());
    }

    #[test]
    fn rows_in_only_counts_direct_rows_of_the_group() {
        let table: Node = Element::new("table")
            .child(Element::new("thead").child(Element::new("tr").child(Element::new("th").text("Name"))))
            .child(
                Element::new("tbody")
                    .child(Element::new("tr").child(Element::new("td").text("a")))
                    .child(Element::new("tr").child(Element::new("td").text("b"))),
            )
            .into();
        assert_eq!(rows_in(&table, "thead").len(), 1);
        assert_eq!(rows_in(&table, "tbody").len(), 2);
        assert_eq!(rows_in(&table, "tfoot").len(), 0);
        assert_eq!(table.find_all_by_role(Role::Row).len(), 3);
    }
}
