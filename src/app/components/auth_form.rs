use dioxus::prelude::*;

use crate::domain::models::{Field, FormKind, FormStatus};
use crate::shared::hooks::use_auth_form;

fn label(field: Field) -> &'static str {
    match field {
        Field::FirstName => "First name",
        Field::Email => "Email",
        Field::Password => "Password",
        Field::RepeatPassword => "Repeat password",
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        Field::Password | Field::RepeatPassword => "password",
        Field::FirstName => "text",
    }
}

fn status_class(status: &FormStatus) -> &'static str {
    match status {
        FormStatus::Idle => "auth-form__status",
        FormStatus::Error(_) => "auth-form__status auth-form__status--error",
        FormStatus::Success(_) => "auth-form__status auth-form__status--success",
    }
}

/// Login or signup form. Native submission is suppressed; the form is
/// validated locally before anything is posted.
#[component]
pub fn AuthForm(kind: FormKind) -> Element {
    let auth = use_auth_form(kind);
    let form = auth.form.read().clone();

    let on_submit = {
        let auth = auth.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            auth.submit();
        }
    };

    rsx! {
        form { class: "auth-form", novalidate: true, onsubmit: on_submit,
            h2 { {kind.title()} }

            for field in form.fields().iter().copied() {
                div {
                    key: "{field.input_id()}",
                    class: if form.is_invalid(field) { "auth-form__field incorrect" } else { "auth-form__field" },
                    label { r#for: field.input_id(), {label(field)} }
                    input {
                        id: field.input_id(),
                        r#type: input_type(field),
                        value: form.value(field).to_string(),
                        oninput: {
                            let auth = auth.clone();
                            move |evt: FormEvent| auth.edit(field, evt.value())
                        },
                    }
                }
            }

            p { id: "error-message", class: status_class(form.status()), {form.status().text().to_string()} }

            button { r#type: "submit", class: "btn btn--primary", {kind.title()} }
        }
    }
}
