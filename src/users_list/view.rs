use super::state::UsersList;
use crate::component_framework::Component;
use crate::domain::UserRecord;
use crate::view::{Element, Node};

pub const TOGGLE_ID: &str = "toggle-btn";
pub const HEADING: &str = "Users List";
pub const EMPTY_PLACEHOLDER: &str = "No Data Found";

/// Header labels; the two trailing blanks are the action columns.
pub const COLUMNS: [&str; 5] = ["S.No.", "Name", "Email", "", ""];

pub fn render(list: &UsersList) -> Node {
    let toggle_label = if list.form_visible() {
        "Hide Form"
    } else {
        "Register User"
    };

    let mut root = Element::new("div")
        .attr("class", "users")
        .child(
            Element::new("div")
                .attr("class", "users-header")
                .child(Element::new("h2").text(HEADING))
                .child(
                    Element::new("button")
                        .attr("id", TOGGLE_ID)
                        .attr("type", "button")
                        .attr("aria-expanded", list.form_visible().to_string())
                        .text(toggle_label),
                ),
        );

    if let Some(form) = list.form() {
        root = root.child(form.view());
    }

    root.child(render_table(list.records())).into()
}

fn render_table(records: &[UserRecord]) -> Element {
    let header = Element::new("tr").children(
        COLUMNS
            .iter()
            .map(|label| Element::new("th").attr("scope", "col").text(*label)),
    );

    let body = if records.is_empty() {
        Element::new("tbody").child(
            Element::new("tr").attr("class", "placeholder").child(
                Element::new("td")
                    .attr("colspan", COLUMNS.len().to_string())
                    .text(EMPTY_PLACEHOLDER),
            ),
        )
    } else {
        Element::new("tbody").children(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| render_row(index, record)),
        )
    };

    Element::new("table")
        .attr("class", "users-table")
        .child(Element::new("thead").child(header))
        .child(body)
}

/// The sequence number is positional, not the record id.
fn render_row(index: usize, record: &UserRecord) -> Element {
    Element::new("tr")
        .attr("data-user-id", record.id.to_string())
        .child(Element::new("td").text((index + 1).to_string()))
        .child(Element::new("td").text(record.name.as_str()))
        .child(Element::new("td").text(record.email.as_str()))
        .child(Element::new("td"))
        .child(Element::new("td"))
}

/// Body rows that hold records, the placeholder row excluded.
pub fn record_rows(view: &Node) -> Vec<&Element> {
    crate::view::rows_in(view, "tbody")
        .into_iter()
        .filter(|row| row.get_attr("class") != Some("placeholder"))
        .collect()
}
