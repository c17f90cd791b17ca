use super::state::RegistrationForm;
use crate::domain::FieldId;
use crate::view::{Element, Node};

pub const FORM_ID: &str = "user-registration-form";
pub const SUBMIT_ID: &str = "add-user-btn";
pub const HEADING: &str = "User Registration";

pub fn render(form: &RegistrationForm) -> Node {
    Element::new("form")
        .attr("id", FORM_ID)
        .attr("aria-label", HEADING)
        .attr("novalidate", "")
        .child(Element::new("h2").text(HEADING))
        .children(FieldId::ALL.into_iter().map(|field| render_field(form, field)))
        .child(
            Element::new("button")
                .attr("id", SUBMIT_ID)
                .attr("type", "submit")
                .flag("disabled", !form.submit_enabled())
                .text("Add User"),
        )
        .into()
}

fn render_field(form: &RegistrationForm, field: FieldId) -> Element {
    let error = form.visible_error(field);

    let mut input = Element::new("input")
        .attr("id", field.dom_id())
        .attr("name", field.dom_id())
        .attr("type", field.input_type())
        .attr("value", form.value(field))
        .flag("required", field.is_required());
    if error.is_some() {
        input = input.attr("aria-invalid", "true");
    }
    if field == FieldId::Experience {
        input = input.attr("min", "0");
    }

    let wrapper = Element::new("div")
        .attr("class", "form-field")
        .child(
            Element::new("label")
                .attr("for", field.dom_id())
                .text(field.label()),
        )
        .child(input);

    match error {
        Some(message) => wrapper.child(
            Element::new("span")
                .attr("id", format!("{}-error", field.dom_id()))
                .attr("class", "error")
                .attr("role", "alert")
                .text(message),
        ),
        None => wrapper,
    }
}
