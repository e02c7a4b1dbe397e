//! Fees page: payment entry, payment ledger, and per-class fee structures.

#[cfg(test)]
#[path = "fees_test.rs"]
mod fees_test;

use leptos::prelude::*;

use records::{FeePayment, FeeStructure, Record as _};

use crate::components::modal::Modal;
use crate::state::fees::FeesState;
use crate::state::view::RecordView;

/// Build a payment from raw form fields. The store assigns the key.
fn validate_payment(
    student_name: &str,
    amount: &str,
    payment_date: &str,
    payment_method: &str,
) -> Result<FeePayment, &'static str> {
    let student_name = student_name.trim();
    let payment_date = payment_date.trim();
    let payment_method = payment_method.trim();
    if student_name.is_empty() || payment_date.is_empty() || payment_method.is_empty() {
        return Err("Student, date and method are required.");
    }
    let Ok(amount) = amount.trim().parse::<f64>() else {
        return Err("Amount must be a number.");
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(FeePayment {
        key: String::new(),
        student_name: student_name.to_owned(),
        amount,
        payment_date: payment_date.to_owned(),
        payment_method: payment_method.to_owned(),
    })
}

#[cfg(feature = "csr")]
fn load_fees(store: crate::net::store::StoreHandle, fees: RwSignal<FeesState>) {
    fees.update(|s| {
        s.loading = true;
        s.error = None;
    });
    leptos::task::spawn_local(async move {
        let structures = store.list::<FeeStructure>().await;
        let payments = store.list::<FeePayment>().await;
        fees.update(|s| {
            match structures {
                Ok(structures) => s.structures = structures,
                Err(err) => s.error = Some(err.to_string()),
            }
            match payments {
                Ok(payments) => s.payments = payments,
                Err(err) => s.error = Some(err.to_string()),
            }
            s.loading = false;
        });
    });
}

#[component]
pub fn FeesPage() -> impl IntoView {
    let fees = RwSignal::new(FeesState::default());
    let dialog = RwSignal::new(RecordView::<FeePayment>::Idle);

    let student_name = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let payment_date = RwSignal::new(String::new());
    let payment_method = RwSignal::new("Cash".to_owned());
    let form_error = RwSignal::new(None::<String>);

    #[cfg(feature = "csr")]
    let store = expect_context::<crate::net::store::StoreHandle>();

    #[cfg(feature = "csr")]
    load_fees(store.clone(), fees);

    #[cfg(feature = "csr")]
    let store_submit = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payment = match validate_payment(
            &student_name.get(),
            &amount.get(),
            &payment_date.get(),
            &payment_method.get(),
        ) {
            Ok(payment) => payment,
            Err(problem) => {
                form_error.set(Some(problem.to_owned()));
                return;
            }
        };
        form_error.set(None);

        #[cfg(feature = "csr")]
        {
            let store = store_submit.clone();
            leptos::task::spawn_local(async move {
                match store.create::<FeePayment>(&payment.encode()).await {
                    Ok(_) => {
                        student_name.set(String::new());
                        amount.set(String::new());
                        payment_date.set(String::new());
                    }
                    Err(err) => form_error.set(Some(err.to_string())),
                }
                load_fees(store, fees);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = payment;
        }
    };

    let on_delete_request = Callback::new(move |payment: FeePayment| {
        dialog.update(|d| d.request_delete(payment));
    });
    let on_close = Callback::new(move |()| dialog.update(RecordView::cancel));

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
                if let Err(err) = store.delete(FeePayment::COLLECTION, doomed.key()).await {
                    fees.update(|s| s.error = Some(err.to_string()));
                }
                load_fees(store, fees);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = doomed;
        }
    });

    view! {
        <div class="fees-page">
            <h1>"Fees"</h1>
            <Show when=move || fees.get().error.is_some()>
                <p class="fees-page__error">{move || fees.get().error.unwrap_or_default()}</p>
            </Show>

            <section class="fees-page__entry">
                <h2>"Record a Payment"</h2>
                <form class="fees-form" on:submit=on_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Student name"
                        prop:value=move || student_name.get()
                        on:input=move |ev| student_name.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.01"
                        placeholder="Amount (Rs.)"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || payment_date.get()
                        on:input=move |ev| payment_date.set(event_target_value(&ev))
                    />
                    <select
                        class="dialog__input"
                        prop:value=move || payment_method.get()
                        on:change=move |ev| payment_method.set(event_target_value(&ev))
                    >
                        <option value="Cash">"Cash"</option>
                        <option value="Bank Transfer">"Bank Transfer"</option>
                        <option value="Cheque">"Cheque"</option>
                    </select>
                    <button class="btn btn--primary" type="submit">
                        "Submit Payment"
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="fees-form__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
            </section>

            <section class="fees-page__ledger">
                <h2>
                    "Payments "
                    <span class="fees-page__total">
                        {move || format!("(total Rs. {:.2})", fees.get().total_collected())}
                    </span>
                </h2>
                <Show
                    when=move || !fees.get().loading
                    fallback=move || view! { <p>"Loading fees..."</p> }
                >
                    <table class="record-table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Amount"</th>
                                <th>"Date"</th>
                                <th>"Method"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                fees.get()
                                    .payments
                                    .into_iter()
                                    .map(|payment| {
                                        let doomed = payment.clone();
                                        view! {
                                            <tr>
                                                <td>{payment.student_name.clone()}</td>
                                                <td>{format!("Rs. {:.2}", payment.amount)}</td>
                                                <td>{payment.payment_date.clone()}</td>
                                                <td>{payment.payment_method.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            on_delete_request.run(doomed.clone())
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>

            <section class="fees-page__structures">
                <h2>"Fee Structures"</h2>
                <table class="record-table">
                    <thead>
                        <tr>
                            <th>"Class"</th>
                            <th>"Tuition"</th>
                            <th>"Library"</th>
                            <th>"Sports"</th>
                            <th>"Computer"</th>
                            <th>"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            fees.get()
                                .structures
                                .into_iter()
                                .map(|structure| {
                                    view! {
                                        <tr>
                                            <td>{structure.class_level.clone()}</td>
                                            <td>{format!("{:.0}", structure.tuition_fee)}</td>
                                            <td>{format!("{:.0}", structure.library_fee)}</td>
                                            <td>{format!("{:.0}", structure.sports_fee)}</td>
                                            <td>{format!("{:.0}", structure.computer_fee)}</td>
                                            <td>{format!("{:.0}", structure.total())}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            {move || match dialog.get() {
                RecordView::Confirming(payment) => view! {
                    <Modal title="Delete Payment" on_close=on_close>
                        <p class="dialog__danger">
                            {format!(
                                "This will permanently remove the Rs. {:.2} payment from {}.",
                                payment.amount, payment.student_name,
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
                _ => ().into_any(),
            }}
        </div>
    }
}
