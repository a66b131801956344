//! Contact pages

use super::{
    escape, layout, method_override, render_delete_button, render_error_summary,
    render_text_field,
};
use crate::domain::entities::{Contact, ContactId, ContactInput, FirstLetter, PhoneAttrs, PhoneType};
use crate::error::ValidationErrors;

/// The form always offers at least this many phone rows
pub const MIN_PHONE_ROWS: usize = 3;

/// Where a contact form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Update(ContactId),
}

/// Everything needed to draw the new/edit form
pub struct ContactForm<'a> {
    pub input: &'a ContactInput,
    pub errors: Option<&'a ValidationErrors>,
    pub target: FormTarget,
}

/// GET /contacts; `total` is the unfiltered number of contacts
pub fn render_index(contacts: &[Contact], letter: Option<FirstLetter>, total: u64) -> String {
    let mut buf = String::new();

    match letter {
        Some(letter) => buf.push_str(&format!(
            "<h1>Contacts starting with {}</h1>\n",
            escape(&letter.to_string())
        )),
        None => buf.push_str("<h1>Contacts</h1>\n"),
    }

    buf.push_str(&format!(
        "<p class=\"count\">Showing {} of {} contacts</p>\n",
        contacts.len(),
        total
    ));
    buf.push_str(&render_letter_nav(letter));

    if contacts.is_empty() {
        buf.push_str("<p><em>No contacts found.</em></p>\n");
    } else {
        buf.push_str("<table>\n<thead>\n<tr><th>Name</th><th>Email</th><th>Phones</th></tr>\n</thead>\n<tbody>\n");
        for contact in contacts {
            buf.push_str(&format!(
                "<tr><td><a href=\"/contacts/{}\">{}</a></td><td>{}</td><td>{}</td></tr>\n",
                contact.id,
                escape(&contact.name()),
                escape(contact.email.as_deref().unwrap_or_default()),
                contact.phones.len()
            ));
        }
        buf.push_str("</tbody>\n</table>\n");
    }

    buf.push_str("<p><a href=\"/contacts/new\">New Contact</a></p>\n");

    layout("Contacts", &buf)
}

fn render_letter_nav(current: Option<FirstLetter>) -> String {
    let mut buf = String::from("<ul class=\"letters\">\n");

    buf.push_str("<li><a href=\"/contacts\">All</a></li>\n");
    for c in 'A'..='Z' {
        let class = if current == Some(FirstLetter(c)) {
            " class=\"current\""
        } else {
            ""
        };
        buf.push_str(&format!(
            "<li{}><a href=\"/contacts?letter={}\">{}</a></li>\n",
            class,
            urlencoding::encode(&c.to_string()),
            c
        ));
    }
    buf.push_str("</ul>\n");

    buf
}

/// GET /contacts/:id
pub fn render_show(contact: &Contact) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<h1>{}</h1>\n", escape(&contact.name())));
    if let Some(email) = &contact.email {
        buf.push_str(&format!(
            "<p><a href=\"mailto:{0}\">{0}</a></p>\n",
            escape(email)
        ));
    }

    if contact.phones.is_empty() {
        buf.push_str("<p><em>No phone numbers.</em></p>\n");
    } else {
        buf.push_str("<ul class=\"phones\">\n");
        for phone in &contact.phones {
            buf.push_str(&format!(
                "<li>{}: {}</li>\n",
                phone.phone_type,
                escape(&phone.number)
            ));
        }
        buf.push_str("</ul>\n");
    }

    buf.push_str(&format!(
        "<p><a href=\"/contacts/{}/edit\">Edit</a> | <a href=\"/contacts\">Back</a></p>\n",
        contact.id
    ));
    buf.push_str(&render_delete_button(
        &format!("/contacts/{}", contact.id),
        "Delete contact",
    ));

    layout(&contact.name(), &buf)
}

/// GET /contacts/new, GET /contacts/:id/edit, and failed submissions
pub fn render_form(form: &ContactForm<'_>) -> String {
    let attrs = &form.input.contact;
    let has_error = |field: &str| form.errors.is_some_and(|e| e.contains(field));
    let mut buf = String::new();

    let (title, action) = match form.target {
        FormTarget::Create => ("New Contact".to_string(), "/contacts".to_string()),
        FormTarget::Update(id) => ("Edit Contact".to_string(), format!("/contacts/{}", id)),
    };

    buf.push_str(&format!("<h1>{}</h1>\n", title));

    if let Some(errors) = form.errors.filter(|e| !e.is_empty()) {
        buf.push_str(&render_error_summary("contact", errors));
    }

    buf.push_str(&format!(
        "<form action=\"{}\" method=\"post\">\n",
        escape(&action)
    ));
    if let FormTarget::Update(_) = form.target {
        buf.push_str(&method_override("patch"));
    }

    buf.push_str(&render_text_field(
        "First name",
        "contact[firstname]",
        attrs.firstname.as_deref(),
        "text",
        has_error("firstname"),
    ));
    buf.push_str(&render_text_field(
        "Last name",
        "contact[lastname]",
        attrs.lastname.as_deref(),
        "text",
        has_error("lastname"),
    ));
    buf.push_str(&render_text_field(
        "Email",
        "contact[email]",
        attrs.email.as_deref(),
        "email",
        has_error("email"),
    ));

    buf.push_str("<fieldset>\n<legend>Phones</legend>\n");
    let blank = PhoneAttrs::default();
    let rows = form.input.phones.len().max(MIN_PHONE_ROWS);
    for index in 0..rows {
        let phone = form.input.phones.get(index).unwrap_or(&blank);
        buf.push_str(&render_phone_row(index, phone, &has_error));
    }
    buf.push_str("</fieldset>\n");

    buf.push_str("<button type=\"submit\">Save Contact</button>\n</form>\n");
    buf.push_str("<p><a href=\"/contacts\">Back</a></p>\n");

    layout(&title, &buf)
}

fn render_phone_row(index: usize, phone: &PhoneAttrs, has_error: &dyn Fn(&str) -> bool) -> String {
    let prefix = format!("contact[phones_attributes][{}]", index);
    let mut buf = String::from("<div class=\"phone\">\n");

    if let Some(id) = phone.id {
        buf.push_str(&format!(
            "<input type=\"hidden\" name=\"{}[id]\" value=\"{}\">\n",
            prefix, id
        ));
    }

    buf.push_str(&render_text_field(
        "Number",
        &format!("{}[number]", prefix),
        phone.number.as_deref(),
        "text",
        has_error(&format!("phones[{}].number", index)),
    ));

    let type_error = has_error(&format!("phones[{}].phone_type", index));
    let current = phone.phone_type.as_deref().unwrap_or_default();
    let known = current.parse::<PhoneType>().ok();

    buf.push_str(&format!(
        "<div{}><label>Type <select name=\"{}[phone_type]\">\n",
        if type_error { " class=\"field_with_errors\"" } else { "" },
        prefix
    ));
    buf.push_str("<option value=\"\"></option>\n");
    for phone_type in PhoneType::ALL {
        let selected = if known == Some(phone_type) { " selected" } else { "" };
        buf.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            phone_type, selected
        ));
    }
    // Keep an unrecognised submitted value visible so the user can fix it
    if known.is_none() && !current.trim().is_empty() {
        buf.push_str(&format!(
            "<option value=\"{0}\" selected>{0}</option>\n",
            escape(current)
        ));
    }
    buf.push_str("</select></label></div>\n</div>\n");

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ContactAttrs, Field};
    use crate::test_utils::{phone_attrs, test_contact_named};

    #[test]
    fn index_lists_contacts_with_links() {
        let smith = test_contact_named("John", "Smith");

        let page = render_index(&[smith.clone()], None, 1);

        assert!(page.contains("<h1>Contacts</h1>"));
        assert!(page.contains("Showing 1 of 1 contacts"));
        assert!(page.contains(&format!("href=\"/contacts/{}\"", smith.id)));
        assert!(page.contains("John Smith"));
    }

    #[test]
    fn index_highlights_current_letter() {
        let page = render_index(&[], Some(FirstLetter('S')), 4);

        assert!(page.contains("Contacts starting with S"));
        assert!(page.contains("<li class=\"current\"><a href=\"/contacts?letter=S\">S</a></li>"));
        assert!(page.contains("No contacts found."));
    }

    #[test]
    fn show_escapes_user_input() {
        let mut contact = test_contact_named("<b>", "Smith");
        contact.email = None;

        let page = render_show(&contact);

        assert!(page.contains("&lt;b&gt; Smith"));
        assert!(!page.contains("<b> Smith"));
        assert!(page.contains("home: 555-0100"));
        assert!(page.contains("name=\"_method\" value=\"delete\""));
    }

    #[test]
    fn new_form_has_three_blank_phone_rows() {
        let input = ContactInput::default();
        let page = render_form(&ContactForm {
            input: &input,
            errors: None,
            target: FormTarget::Create,
        });

        assert!(page.contains("action=\"/contacts\""));
        assert!(page.contains("contact[phones_attributes][2][number]"));
        assert!(!page.contains("contact[phones_attributes][3][number]"));
        assert!(!page.contains("_method"));
    }

    #[test]
    fn edit_form_keeps_phone_ids_and_overrides_method() {
        let contact = test_contact_named("Lawrence", "Smith");
        let input = contact.to_input();
        let page = render_form(&ContactForm {
            input: &input,
            errors: None,
            target: FormTarget::Update(contact.id),
        });

        assert!(page.contains(&format!("action=\"/contacts/{}\"", contact.id)));
        assert!(page.contains("name=\"_method\" value=\"patch\""));
        assert!(page.contains(&format!(
            "name=\"contact[phones_attributes][0][id]\" value=\"{}\"",
            contact.phones[0].id
        )));
        assert!(page.contains("value=\"Lawrence\""));
    }

    #[test]
    fn failed_form_preserves_input_and_lists_errors() {
        let input = ContactInput {
            contact: ContactAttrs {
                firstname: Field::from("Larry"),
                lastname: Field::from(""),
                email: Field::Absent,
            },
            phones: vec![phone_attrs("555-0100", "fax")],
        };
        let mut errors = ValidationErrors::new();
        errors.add("lastname", "can't be blank");
        errors.add("phones[0].phone_type", "is not included in the list");

        let page = render_form(&ContactForm {
            input: &input,
            errors: Some(&errors),
            target: FormTarget::Create,
        });

        assert!(page.contains("2 errors prohibited this contact from being saved"));
        assert!(page.contains("value=\"Larry\""));
        assert!(page.contains("<option value=\"fax\" selected>fax</option>"));
        assert!(page.contains("class=\"field_with_errors\""));
    }
}
