//! Finance View
//!
//! Summary cards, invoice table and the "new invoice" modal.

use leptos::prelude::*;

use crate::components::{InvoiceModal, SectionShell};
use crate::context::use_app_context;
use crate::finance::{FinanceSummary, InvoiceDraft, Ledger};
use crate::format::format_currency;
use crate::models::Invoice;
use crate::money::Money;
use crate::seed;

#[component]
fn SummaryCard(#[prop(into)] label: String, value: Signal<String>, #[prop(into)] meta: Signal<String>) -> impl IntoView {
    view! {
        <div class="card summary-card">
            <div class="summary-label">{label}</div>
            <div class="summary-value">{value}</div>
            <div class="summary-meta">{meta}</div>
        </div>
    }
}

#[component]
fn InvoiceRow(invoice: Invoice, #[prop(into)] symbol: String) -> impl IntoView {
    let status_class = format!("status-badge {}", invoice.status.as_str().to_lowercase());
    view! {
        <tr>
            <td class="invoice-id">{invoice.id}</td>
            <td>{invoice.client}</td>
            <td class="amount">{format_currency(invoice.amount, &symbol)}</td>
            <td><span class=status_class>{invoice.status.as_str()}</span></td>
        </tr>
    }
}

#[component]
pub fn FinanceView() -> impl IntoView {
    let ctx = use_app_context();
    let symbol = StoredValue::new(ctx.config(|c| c.currency_symbol.clone()));
    let ledger = RwSignal::new(Ledger::new(seed::invoices()));
    let (show_modal, set_show_modal) = signal(false);

    let summary = Memo::new(move |_| ledger.with(|l| l.summary()));
    let money = move |f: fn(&FinanceSummary) -> Money| {
        Signal::derive(move || symbol.with_value(|s| format_currency(f(&summary.get()), s)))
    };

    let on_create = Callback::new(move |draft: InvoiceDraft| {
        if let Some((id, total)) = ledger.try_update(|l| {
            let invoice = l.create(&draft);
            (invoice.id.clone(), invoice.amount)
        }) {
            log::info!("[FINANCE] Invoice {} created for '{}' ({} cents)", id, draft.client, total.cents());
        }
        set_show_modal.set(false);
    });
    let on_close = Callback::new(move |_: ()| set_show_modal.set(false));

    view! {
        <SectionShell title="Finance" subtitle="Invoices and revenue at a glance">
            <div class="summary-grid">
                <SummaryCard
                    label="Open invoices"
                    value=money(|s| s.open.sum)
                    meta=Signal::derive(move || format!("{} invoices", summary.get().open.count))
                />
                <SummaryCard
                    label="Paid invoices"
                    value=money(|s| s.paid.sum)
                    meta=Signal::derive(move || format!("{} invoices", summary.get().paid.count))
                />
                <SummaryCard label="Revenue" value=money(|s| s.revenue()) meta="Open and paid".to_string() />
                <SummaryCard label="Outstanding" value=money(|s| s.outstanding()) meta="Not yet paid".to_string() />
            </div>

            <div class="card">
                <div class="toolbar">
                    <div class="card-title">"Invoices"</div>
                    <button class="btn primary" on:click=move |_| set_show_modal.set(true)>"+ New invoice"</button>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Invoice"</th>
                            <th>"Client"</th>
                            <th>"Amount"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || ledger.with(|l| l.invoices().to_vec()) key=|inv| inv.id.clone() let:invoice>
                            <InvoiceRow invoice=invoice symbol=symbol.get_value() />
                        </For>
                    </tbody>
                </table>
            </div>

            <Show when=move || show_modal.get()>
                <InvoiceModal on_create=on_create on_close=on_close />
            </Show>
        </SectionShell>
    }
}
