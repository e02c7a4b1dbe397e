//! Student roster page: class boxes, live search, and per-record dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Students are fetched from the document store on mount and again after
//! every mutation. Detail, edit, and delete all run through [`RecordView`],
//! so exactly one dialog can be open and every destructive action passes a
//! confirmation step.

use leptos::prelude::*;

use records::{Record as _, Student};

use crate::components::modal::Modal;
use crate::state::roster::{CLASS_LEVELS, RosterState};
use crate::state::view::RecordView;

#[cfg(feature = "csr")]
fn load_roster(store: crate::net::store::StoreHandle, roster: RwSignal<RosterState>) {
    roster.update(|s| {
        s.loading = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        match store.list::<Student>().await {
            Ok(students) => roster.update(|s| {
                s.students = students;
                s.loading = false;
            }),
            Err(err) => roster.update(|s| {
                s.error = Some(err.to_string());
                s.loading = false;
            }),
        }
    });
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    let roster = RwSignal::new(RosterState::default());
    let dialog = RwSignal::new(RecordView::<Student>::Idle);

    #[cfg(feature = "csr")]
    let store = expect_context::<crate::net::store::StoreHandle>();

    #[cfg(feature = "csr")]
    load_roster(store.clone(), roster);

    let on_select_class = move |level: String| {
        roster.update(|s| {
            if s.selected_class.as_deref() == Some(level.as_str()) {
                s.selected_class = None;
            } else {
                s.selected_class = Some(level);
            }
            s.search.clear();
        });
    };

    let on_detail = Callback::new(move |student: Student| {
        dialog.update(|d| d.inspect(student));
    });
    let on_edit = Callback::new(move |student: Student| {
        dialog.update(|d| d.begin_edit(student));
    });
    let on_delete_request = Callback::new(move |student: Student| {
        dialog.update(|d| d.request_delete(student));
    });
    let on_close = Callback::new(move |()| dialog.update(RecordView::cancel));

    #[cfg(feature = "csr")]
    let store_save = store.clone();
    let on_save = Callback::new(move |()| {
        let Some(draft) = dialog.try_update(RecordView::finish_edit).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let store = store_save.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = store.update(&draft).await {
                    roster.update(|s| s.error = Some(err.to_string()));
                }
                load_roster(store, roster);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = draft;
        }
    });

    #[cfg(feature = "csr")]
    let store_delete = store.clone();
    let on_confirm_delete = Callback::new(move |()| {
        let Some(doomed) = dialog.try_update(RecordView::confirm_delete).flatten() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let store = store_delete.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = store.delete(Student::COLLECTION, doomed.key()).await {
                    roster.update(|s| s.error = Some(err.to_string()));
                }
                load_roster(store, roster);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = doomed;
        }
    });

    view! {
        <div class="students-page">
            <h1>"Students"</h1>
            <Show when=move || roster.get().error.is_some()>
                <p class="students-page__error">
                    {move || roster.get().error.unwrap_or_default()}
                </p>
            </Show>
            <div class="students-page__classes">
                {CLASS_LEVELS
                    .iter()
                    .map(|level| {
                        let level = (*level).to_owned();
                        let level_label = level.clone();
                        let level_count = level.clone();
                        let level_active = level.clone();
                        view! {
                            <button
                                class="class-box"
                                class:class-box--active=move || {
                                    roster.get().selected_class.as_deref()
                                        == Some(level_active.as_str())
                                }
                                on:click=move |_| on_select_class(level.clone())
                            >
                                <span class="class-box__level">{level_label}</span>
                                <span class="class-box__count">
                                    {move || roster.get().count_for(&level_count)}
                                </span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || roster.get().selected_class.is_some()>
                <div class="students-page__table">
                    <input
                        class="students-page__search"
                        type="search"
                        placeholder="Search by name or student ID"
                        prop:value=move || roster.get().search
                        on:input=move |ev| {
                            roster.update(|s| s.search = event_target_value(&ev));
                        }
                    />
                    <Show
                        when=move || !roster.get().loading
                        fallback=move || view! { <p>"Loading students..."</p> }
                    >
                        <table class="record-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Student ID"</th>
                                    <th>"Email"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    roster
                                        .get()
                                        .visible()
                                        .into_iter()
                                        .map(|student| {
                                            view! {
                                                <StudentRow
                                                    student=student
                                                    on_detail=on_detail
                                                    on_edit=on_edit
                                                    on_delete=on_delete_request
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </Show>
                </div>
            </Show>
            {move || match dialog.get() {
                RecordView::Idle => ().into_any(),
                RecordView::Viewing(student) => view! {
                    <StudentDetailDialog student=student on_close=on_close/>
                }
                .into_any(),
                RecordView::Editing { .. } => view! {
                    <StudentEditDialog dialog=dialog on_save=on_save on_cancel=on_close/>
                }
                .into_any(),
                RecordView::Confirming(student) => view! {
                    <Modal title="Delete Student" on_close=on_close>
                        <p class="dialog__danger">
                            {format!(
                                "This will permanently remove {} from the roster.",
                                student.name,
                            )}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_close.run(())>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_confirm_delete.run(())
                            >
                                "Delete"
                            </button>
                        </div>
                    </Modal>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn StudentRow(
    student: Student,
    on_detail: Callback<Student>,
    on_edit: Callback<Student>,
    on_delete: Callback<Student>,
) -> impl IntoView {
    let detail = student.clone();
    let edit = student.clone();
    let doomed = student.clone();
    view! {
        <tr>
            <td>{student.name.clone()}</td>
            <td>{student.student_id.clone()}</td>
            <td>{student.email.clone()}</td>
            <td class="record-table__actions">
                <button class="btn" on:click=move |_| on_detail.run(detail.clone())>
                    "Detail"
                </button>
                <button class="btn" on:click=move |_| on_edit.run(edit.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(doomed.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Read-only detail dialog for one student.
#[component]
fn StudentDetailDialog(student: Student, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title="Student Detail" on_close=on_close>
            <dl class="detail-list">
                <dt>"Name"</dt>
                <dd>{student.name.clone()}</dd>
                <dt>"Father's Name"</dt>
                <dd>{student.father_name.clone()}</dd>
                <dt>"Email"</dt>
                <dd>{student.email.clone()}</dd>
                <dt>"Age"</dt>
                <dd>{student.age}</dd>
                <dt>"Class"</dt>
                <dd>{student.class_level.clone()}</dd>
                <dt>"Student ID"</dt>
                <dd>{student.student_id.clone()}</dd>
                <dt>"Shift"</dt>
                <dd>{student.shift.clone().unwrap_or_else(|| "\u{2014}".to_owned())}</dd>
                <dt>"Gender"</dt>
                <dd>{student.gender.clone().unwrap_or_else(|| "\u{2014}".to_owned())}</dd>
            </dl>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </Modal>
    }
}

/// Edit dialog writing into the shared [`RecordView`] draft.
#[component]
fn StudentEditDialog(
    dialog: RwSignal<RecordView<Student>>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft_field = move |read: fn(&Student) -> String| match dialog.get() {
        RecordView::Editing { draft, .. } => read(&draft),
        _ => String::new(),
    };
    let set_field = move |write: fn(&mut Student, String), value: String| {
        dialog.update(|d| {
            if let Some(draft) = d.draft_mut() {
                write(draft, value);
            }
        });
    };

    view! {
        <Modal title="Edit Student" on_close=on_cancel>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft_field(|s| s.name.clone())
                    on:input=move |ev| set_field(|s, v| s.name = v, event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Father's Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft_field(|s| s.father_name.clone())
                    on:input=move |ev| {
                        set_field(|s, v| s.father_name = v, event_target_value(&ev))
                    }
                />
            </label>
            <label class="dialog__label">
                "Email"
                <input
                    class="dialog__input"
                    type="email"
                    prop:value=move || draft_field(|s| s.email.clone())
                    on:input=move |ev| set_field(|s, v| s.email = v, event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Age"
                <input
                    class="dialog__input"
                    type="number"
                    prop:value=move || draft_field(|s| s.age.to_string())
                    on:input=move |ev| {
                        set_field(
                            |s, v| {
                                if let Ok(age) = v.parse() {
                                    s.age = age;
                                }
                            },
                            event_target_value(&ev),
                        )
                    }
                />
            </label>
            <label class="dialog__label">
                "Class"
                <select
                    class="dialog__input"
                    prop:value=move || draft_field(|s| s.class_level.clone())
                    on:change=move |ev| {
                        set_field(|s, v| s.class_level = v, event_target_value(&ev))
                    }
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
                    prop:value=move || draft_field(|s| s.student_id.clone())
                    on:input=move |ev| {
                        set_field(|s, v| s.student_id = v, event_target_value(&ev))
                    }
                />
            </label>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                    "Save"
                </button>
            </div>
        </Modal>
    }
}
