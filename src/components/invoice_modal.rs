//! Invoice Modal Component
//!
//! Draft editor for a new invoice: client plus any number of line items with
//! a live total.

use leptos::prelude::*;

use crate::components::Field;
use crate::context::use_app_context;
use crate::finance::InvoiceDraft;
use crate::format::format_currency;

#[component]
fn LineItemRow(index: usize, draft: RwSignal<InvoiceDraft>) -> impl IntoView {
    let description = move || draft.with(|d| d.items.get(index).map(|i| i.description.clone()).unwrap_or_default());
    let amount = move || draft.with(|d| d.items.get(index).map(|i| i.amount.clone()).unwrap_or_default());
    let invalid = move || draft.with(|d| d.items.get(index).is_some_and(|i| i.parsed_amount().is_err()));

    view! {
        <div class="line-item-row">
            <input
                type="text"
                class="line-item-description"
                placeholder="Description"
                prop:value=description
                on:input=move |ev| draft.update(|d| d.set_description(index, event_target_value(&ev)))
            />
            <input
                type="text"
                inputmode="decimal"
                class=move || if invalid() { "line-item-amount invalid" } else { "line-item-amount" }
                placeholder="0,00"
                prop:value=amount
                on:input=move |ev| draft.update(|d| d.set_amount(index, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn InvoiceModal(
    /// Receives the draft on submit
    on_create: Callback<InvoiceDraft>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let symbol = ctx.config(|c| c.currency_symbol.clone());
    let draft = RwSignal::new(InvoiceDraft::default());

    let rows = move || draft.with(|d| (0..d.items.len()).collect::<Vec<_>>());
    let total = move || draft.with(|d| format_currency(d.total(), &symbol));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let invalid = current.invalid_rows();
        if !invalid.is_empty() {
            log::warn!("[FINANCE] Line items {:?} have unreadable amounts, counted as zero", invalid);
        }
        on_create.run(current);
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <form class="modal card" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h3 class="modal-title">"New invoice"</h3>

                <Field label="Client">
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.client.clone())
                        on:input=move |ev| draft.update(|d| d.client = event_target_value(&ev))
                    />
                </Field>

                <div class="line-items">
                    <div class="field-label">"Line items"</div>
                    <For each=rows key=|i| *i let:index>
                        <LineItemRow index=index draft=draft />
                    </For>
                    <button type="button" class="btn ghost small" on:click=move |_| draft.update(|d| d.add_item())>
                        "+ Add item"
                    </button>
                </div>

                <div class="invoice-total">
                    <span>"Total"</span>
                    <strong>{total}</strong>
                </div>

                <div class="modal-actions">
                    <button type="button" class="btn ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" class="btn primary">"Create invoice"</button>
                </div>
            </form>
        </div>
    }
}
