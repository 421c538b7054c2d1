//! User list and form pages.

use std::collections::BTreeMap;

use common::{AppError, FieldError};
use domain::{User, DATE_FORMAT};

use super::{escape, layout, path_segment};
use crate::dto::UserPayload;

/// Which form is being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { code: String },
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create User",
            FormMode::Edit { .. } => "Edit User",
        }
    }

    fn action(&self) -> String {
        match self {
            FormMode::Create => "/users/create".to_string(),
            FormMode::Edit { code } => format!("/users/edit/{}", path_segment(code)),
        }
    }
}

/// Messages shown on a re-rendered form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub summary: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn from_field_errors(errors: &[FieldError]) -> Self {
        let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for fe in errors {
            fields
                .entry(fe.field.clone())
                .or_default()
                .push(fe.message.clone());
        }
        Self {
            summary: None,
            fields,
        }
    }

    /// Messages for a rejected submission; duplicates are pinned to their field.
    pub fn from_error(err: &AppError) -> Self {
        let mut errors = Self::from_field_errors(err.field_errors());
        let pinned = match err {
            AppError::DuplicateCode(_) => Some("code"),
            AppError::DuplicateEmail(_) => Some("email"),
            _ => None,
        };
        if let Some(field) = pinned {
            errors
                .fields
                .entry(field.to_string())
                .or_default()
                .push(err.to_string());
        }
        errors.summary = Some(err.user_message());
        errors
    }

    fn for_field(&self, field: &str) -> String {
        self.fields
            .get(field)
            .map(|messages| {
                messages
                    .iter()
                    .map(|m| format!(r#"<div class="field-error">{}</div>"#, escape(m)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Table of every user with edit and delete actions.
pub fn list_page(users: &[User]) -> String {
    let rows: String = if users.is_empty() {
        r#"<tr><td colspan="7">No users yet.</td></tr>"#.to_string()
    } else {
        users.iter().map(user_row).collect()
    };

    layout(
        "Users",
        &format!(
            r#"<h1>Users</h1>
<p><a href="/users/create">Create New</a></p>
<table>
<thead>
<tr><th>Code</th><th>Full Name</th><th>Date of Birth</th><th>Email</th><th>Phone Number</th><th>Address</th><th></th></tr>
</thead>
<tbody>
{rows}
</tbody>
</table>"#
        ),
    )
}

fn user_row(user: &User) -> String {
    let segment = path_segment(&user.code);
    format!(
        r#"<tr><td>{code}</td><td>{name}</td><td>{dob}</td><td>{email}</td><td>{phone}</td><td>{address}</td><td><a href="/users/edit/{segment}">Edit</a> <form class="inline" method="post" action="/users/delete/{segment}" onsubmit="return confirm('Delete this user?');"><button type="submit">Delete</button></form></td></tr>
"#,
        code = escape(&user.code),
        name = escape(&user.full_name),
        dob = user.date_of_birth.format(DATE_FORMAT),
        email = escape(&user.email),
        phone = escape(&user.phone_number),
        address = escape(&user.address),
    )
}

/// Create or edit form, prefilled with `values`.
pub fn form_page(mode: &FormMode, values: &UserPayload, errors: &FormErrors) -> String {
    let summary = errors
        .summary
        .as_deref()
        .map(|s| format!(r#"<div class="alert">{}</div>"#, escape(s)))
        .unwrap_or_default();

    // Code is the lookup key; it cannot change once created
    let code_readonly = matches!(mode, FormMode::Edit { .. });

    let fields = [
        input("code", "Code", "text", &values.code, code_readonly, errors),
        input("fullName", "Full Name", "text", &values.full_name, false, errors),
        input("dateOfBirth", "Date of Birth", "date", &values.date_of_birth, false, errors),
        input("email", "Email", "email", &values.email, false, errors),
        input("phoneNumber", "Phone Number", "tel", &values.phone_number, false, errors),
        input("address", "Address", "text", &values.address, false, errors),
    ]
    .concat();

    layout(
        mode.title(),
        &format!(
            r#"<h1>{title}</h1>
{summary}<form method="post" action="{action}">
{fields}<div class="actions"><button type="submit">Save</button> <a href="/users">Back to list</a></div>
</form>"#,
            title = mode.title(),
            action = mode.action(),
        ),
    )
}

fn input(
    name: &str,
    label: &str,
    kind: &str,
    value: &str,
    readonly: bool,
    errors: &FormErrors,
) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input id="{name}" name="{name}" type="{kind}" value="{value}"{readonly}>
{messages}"#,
        value = escape(value),
        readonly = if readonly { " readonly" } else { "" },
        messages = errors.for_field(name),
    )
}
