//! New-admission form: validates and creates a student document.

#[cfg(test)]
#[path = "student_form_test.rs"]
mod student_form_test;

use leptos::prelude::*;

use records::{Record as _, Student};

use crate::state::roster::CLASS_LEVELS;

/// Build a student from raw form fields, trimming everything and parsing
/// age. The store assigns the key on create, so it starts empty.
fn validate_admission(
    name: &str,
    father_name: &str,
    email: &str,
    age: &str,
    class_level: &str,
    student_id: &str,
    shift: &str,
    gender: &str,
) -> Result<Student, &'static str> {
    let name = name.trim();
    let father_name = father_name.trim();
    let email = email.trim();
    let class_level = class_level.trim();
    let student_id = student_id.trim();
    if name.is_empty()
        || father_name.is_empty()
        || email.is_empty()
        || class_level.is_empty()
        || student_id.is_empty()
    {
        return Err("All fields except shift and gender are required.");
    }
    let Ok(age) = age.trim().parse::<u32>() else {
        return Err("Age must be a whole number.");
    };
    let optional = |field: &str| {
        let field = field.trim();
        if field.is_empty() {
            None
        } else {
            Some(field.to_owned())
        }
    };
    Ok(Student {
        key: String::new(),
        name: name.to_owned(),
        father_name: father_name.to_owned(),
        email: email.to_owned(),
        age,
        class_level: class_level.to_owned(),
        student_id: student_id.to_owned(),
        shift: optional(shift),
        gender: optional(gender),
    })
}

#[component]
pub fn StudentFormPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let father_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let class_level = RwSignal::new(CLASS_LEVELS[0].to_owned());
    let student_id = RwSignal::new(String::new());
    let shift = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let store = expect_context::<crate::net::store::StoreHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let student = match validate_admission(
            &name.get(),
            &father_name.get(),
            &email.get(),
            &age.get(),
            &class_level.get(),
            &student_id.get(),
            &shift.get(),
            &gender.get(),
        ) {
            Ok(student) => student,
            Err(problem) => {
                message.set(Some(Err(problem.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            leptos::task::spawn_local(async move {
                match store.create::<Student>(&student.encode()).await {
                    Ok(_) => {
                        message.set(Some(Ok(format!("{} admitted.", student.name))));
                        name.set(String::new());
                        father_name.set(String::new());
                        email.set(String::new());
                        age.set(String::new());
                        student_id.set(String::new());
                        shift.set(String::new());
                        gender.set(String::new());
                    }
                    Err(err) => message.set(Some(Err(err.to_string()))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = student;
        }
    };

    view! {
        <div class="admission-page">
            <h1>"New Admission"</h1>
            <form class="admission-form" on:submit=on_submit>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Father's Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || father_name.get()
                        on:input=move |ev| father_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Age"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || age.get()
                        on:input=move |ev| age.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Class"
                    <select
                        class="dialog__input"
                        prop:value=move || class_level.get()
                        on:change=move |ev| class_level.set(event_target_value(&ev))
                    >
                        {CLASS_LEVELS
                            .iter()
                            .map(|level| view! { <option value=*level>{*level}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Student ID"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || student_id.get()
                        on:input=move |ev| student_id.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Shift (optional)"
                    <select
                        class="dialog__input"
                        prop:value=move || shift.get()
                        on:change=move |ev| shift.set(event_target_value(&ev))
                    >
                        <option value="">"Not set"</option>
                        <option value="Morning">"Morning"</option>
                        <option value="Evening">"Evening"</option>
                    </select>
                </label>
                <label class="dialog__label">
                    "Gender (optional)"
                    <select
                        class="dialog__input"
                        prop:value=move || gender.get()
                        on:change=move |ev| gender.set(event_target_value(&ev))
                    >
                        <option value="">"Not set"</option>
                        <option value="Male">"Male"</option>
                        <option value="Female">"Female"</option>
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Admit Student"
                </button>
            </form>
            <Show when=move || message.get().is_some()>
                {move || match message.get() {
                    Some(Ok(text)) => view! {
                        <p class="admission-form__ok">{text}</p>
                    }
                    .into_any(),
                    Some(Err(text)) => view! {
                        <p class="admission-form__error">{text}</p>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </Show>
        </div>
    }
}
