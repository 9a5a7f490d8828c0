//! Clients View
//!
//! Client table with a status filter and the "new client" modal.

use leptos::prelude::*;

use crate::clients::{ClientBook, ClientForm};
use crate::components::{ClientModal, SectionShell};
use crate::format::format_date;
use crate::models::{Client, ClientFilter};
use crate::seed;

#[component]
fn ClientRow(client: Client) -> impl IntoView {
    let status_class = format!("status-badge {}", client.status.as_str().to_lowercase());
    view! {
        <tr>
            <td class="client-name">{client.name}</td>
            <td><span class=status_class>{client.status.as_str()}</span></td>
            <td>{client.contact}</td>
            <td>{client.email}</td>
            <td>{client.phone}</td>
            <td>{format_date(client.last_contact)}</td>
        </tr>
    }
}

#[component]
pub fn ClientsView() -> impl IntoView {
    let book = RwSignal::new(ClientBook::new(seed::clients()));
    let (filter, set_filter) = signal(ClientFilter::All);
    let (show_modal, set_show_modal) = signal(false);

    let visible = move || book.with(|b| b.filtered(filter.get()));

    let on_filter = move |ev| {
        let value = event_target_value(&ev);
        match value.parse::<ClientFilter>() {
            Ok(f) => set_filter.set(f),
            Err(e) => log::warn!("Ignoring client filter: {}", e),
        }
    };

    let on_add = Callback::new(move |form: ClientForm| {
        let name = form.name.clone();
        if let Some(id) = book.try_update(|b| b.add(form)) {
            log::info!("Client #{} '{}' added", id, name);
        }
        set_show_modal.set(false);
    });
    let on_close = Callback::new(move |_: ()| set_show_modal.set(false));

    view! {
        <SectionShell title="Clients" subtitle="Manage contacts and relationships">
            <div class="card">
                <div class="toolbar">
                    <select class="filter-select" on:change=on_filter>
                        {ClientFilter::ALL.into_iter().map(|f| view! {
                            <option value=f.as_str() selected=move || filter.get() == f>{f.as_str()}</option>
                        }).collect_view()}
                    </select>
                    <button class="btn primary" on:click=move |_| set_show_modal.set(true)>"+ New client"</button>
                </div>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Status"</th>
                            <th>"Contact"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Last contact"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=visible key=|c| c.id let:client>
                            <ClientRow client=client />
                        </For>
                    </tbody>
                </table>
            </div>

            <Show when=move || show_modal.get()>
                <ClientModal on_add=on_add on_close=on_close />
            </Show>
        </SectionShell>
    }
}
