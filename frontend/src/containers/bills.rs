//! Bills listing: fetching, display formatting, sort order and the two
//! click handlers of the Bills page.

use chrono::NaiveDate;

use crate::format::{format_date, parse_date};
use crate::gateway::BillsGateway;
use crate::models::Bill;
use crate::router::{Navigator, Route};

/// A bill ready for the table.
#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub bill: Bill,
    pub date_label: String,
    pub status_label: &'static str,
    pub sort_key: Option<NaiveDate>,
}

impl BillRow {
    /// Bills whose date does not parse keep the raw text.
    pub fn from_bill(bill: Bill) -> Self {
        let sort_key = match parse_date(&bill.date) {
            Ok(date) => Some(date),
            Err(err) => {
                log::warn!("bill {:?} has an unreadable date {:?}: {err}", bill.id, bill.date);
                None
            }
        };
        let date_label = sort_key.map(format_date).unwrap_or_else(|| bill.date.clone());

        Self {
            status_label: bill.status.label(),
            date_label,
            sort_key,
            bill,
        }
    }

    /// Link to the uploaded receipt. Rows without one get no eye icon.
    pub fn receipt_url(&self) -> Option<&str> {
        self.bill
            .file_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}

/// Most recent first; equal dates keep their order, undated rows go last.
pub fn sort_rows(rows: &mut [BillRow]) {
    rows.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));
}

pub fn prepare_rows(bills: Vec<Bill>) -> Vec<BillRow> {
    let mut rows: Vec<BillRow> = bills.into_iter().map(BillRow::from_bill).collect();
    sort_rows(&mut rows);
    rows
}

#[derive(Clone, Debug, PartialEq)]
pub enum BillsPageState {
    Loading,
    Loaded(Vec<BillRow>),
    Failed(String),
}

/// Receipt shown in the modal after clicking a row's eye icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReceiptPreview {
    pub url: String,
}

#[derive(Clone, PartialEq)]
pub struct BillsContainer {
    navigator: Navigator,
}

impl BillsContainer {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    pub async fn fetch_bills(&self, gateway: &dyn BillsGateway) -> BillsPageState {
        match gateway.list().await {
            Ok(bills) => {
                log::info!("loaded {} bills", bills.len());
                BillsPageState::Loaded(prepare_rows(bills))
            }
            Err(err) => {
                log::error!("could not load bills: {err}");
                BillsPageState::Failed(err.to_string())
            }
        }
    }

    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    pub fn handle_click_icon_eye(&self, bill_url: &str) -> ReceiptPreview {
        log::info!("showing receipt {bill_url}");
        ReceiptPreview {
            url: bill_url.to_string(),
        }
    }
}
