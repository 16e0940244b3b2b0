//! Records exchanged with the bills API and the session store.

pub mod bill;
pub mod session;

pub use bill::{decode_bills, Bill, BillStatus, ExpenseType, StoredReceipt};
pub use session::{Session, UserType};
