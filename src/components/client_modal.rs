//! Client Modal Component
//!
//! Form for adding a client. Submitting prepends the client to the book and
//! closes the modal.

use leptos::prelude::*;

use crate::clients::ClientForm;
use crate::components::Field;
use crate::models::ClientStatus;

#[component]
pub fn ClientModal(
    /// Receives the completed form
    on_add: Callback<ClientForm>,
    on_close: Callback<()>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let form = RwSignal::new(ClientForm::new(today));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(form.get_untracked());
    };

    let on_status = move |ev| {
        let value = event_target_value(&ev);
        match value.parse::<ClientStatus>() {
            Ok(status) => form.update(|f| f.status = status),
            Err(e) => log::warn!("Ignoring client status: {}", e),
        }
    };

    let on_date = move |ev| {
        let value = event_target_value(&ev);
        if let Err(e) = form.try_update(|f| f.set_last_contact(&value)).unwrap_or(Ok(())) {
            log::warn!("Ignoring last contact: {}", e);
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <form class="modal card" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">"New client"</h3>

                <Field label="Name">
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </Field>

                <Field label="Status">
                    <select on:change=on_status>
                        {ClientStatus::ALL.into_iter().map(|status| view! {
                            <option
                                value=status.as_str()
                                selected=move || form.with(|f| f.status == status)
                            >
                                {status.as_str()}
                            </option>
                        }).collect_view()}
                    </select>
                </Field>

                <Field label="Contact person">
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.contact.clone())
                        on:input=move |ev| form.update(|f| f.contact = event_target_value(&ev))
                    />
                </Field>

                <Field label="Email">
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </Field>

                <Field label="Phone">
                    <input
                        type="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                    />
                </Field>

                <Field label="Last contact">
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.last_contact.format("%Y-%m-%d").to_string())
                        on:change=on_date
                    />
                </Field>

                <div class="modal-actions">
                    <button type="button" class="btn ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn primary">"Add client"</button>
                </div>
            </form>
        </div>
    }
}
