//! Page logic kept apart from rendering so it runs under plain `cargo test`.

pub mod bills;
pub mod new_bill;

pub use bills::{BillRow, BillsContainer, BillsPageState, ReceiptPreview};
pub use new_bill::{NewBillContainer, NewBillForm, SubmitPhase};
