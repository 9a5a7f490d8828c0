//! UI Components
//!
//! Shell chrome and one view per dashboard section.

mod analytics_view;
mod client_modal;
mod clients_view;
mod content_view;
mod field;
mod finance_view;
mod invoice_modal;
mod loading_block;
mod section_shell;
mod sidebar;
mod top_bar;
mod workflow_view;

pub use analytics_view::AnalyticsView;
pub use client_modal::ClientModal;
pub use clients_view::ClientsView;
pub use content_view::ContentView;
pub use field::Field;
pub use finance_view::FinanceView;
pub use invoice_modal::InvoiceModal;
pub use loading_block::LoadingBlock;
pub use section_shell::SectionShell;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
pub use workflow_view::WorkflowView;
