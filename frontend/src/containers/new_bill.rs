//! New Bill form: receipt validation, bill construction and submission.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{FileError, SubmitError};
use crate::format::parse_whole;
use crate::gateway::{BillsGateway, Receipt, ReceiptUpload};
use crate::models::{Bill, BillStatus, ExpenseType, Session, StoredReceipt};
use crate::router::{Navigator, Route};

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

const DEFAULT_PCT: i64 = 20;

pub fn validate_receipt_name(file_name: &str) -> Result<(), FileError> {
    let accepted = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));

    if accepted {
        Ok(())
    } else {
        Err(FileError::UnsupportedExtension {
            file_name: file_name.to_string(),
        })
    }
}

/// Raw field values as typed, plus the receipt that passed validation and
/// the text of the file error slot.
#[derive(Clone, Debug, Default)]
pub struct NewBillForm {
    pub expense_type: ExpenseType,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
    receipt: Option<Receipt>,
    file_error: String,
}

impl NewBillForm {
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn file_error(&self) -> &str {
        &self.file_error
    }

    /// Keeps the receipt when its extension is accepted. Returns `false` when
    /// the selection was dropped, so the view can clear the file input.
    pub fn handle_change_file(&mut self, receipt: Option<Receipt>) -> bool {
        let checked = receipt
            .ok_or(FileError::Missing)
            .and_then(|receipt| validate_receipt_name(&receipt.file_name).map(|()| receipt));

        match checked {
            Ok(receipt) => {
                self.receipt = Some(receipt);
                self.file_error.clear();
                true
            }
            Err(err) => {
                if let FileError::UnsupportedExtension { file_name } = &err {
                    log::warn!("refused receipt {file_name:?}");
                }
                self.receipt = None;
                self.file_error = err.to_string();
                false
            }
        }
    }

    /// Fills the error slot when no accepted receipt is attached.
    pub fn check_receipt(&mut self) -> Result<(), FileError> {
        if self.receipt.is_some() {
            return Ok(());
        }
        if self.file_error.is_empty() {
            self.file_error = FileError::Missing.to_string();
        }
        Err(FileError::Missing)
    }

    pub fn build_bill(&self, session: &Session, stored: &StoredReceipt) -> Bill {
        Bill {
            id: Some(stored.key.clone()),
            email: session.email.clone(),
            expense_type: self.expense_type,
            name: self.name.trim().to_string(),
            date: self.date.trim().to_string(),
            amount: parse_whole(&self.amount).unwrap_or(0),
            vat: self.vat.trim().to_string(),
            pct: parse_whole(&self.pct)
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_PCT),
            commentary: self.commentary.clone(),
            file_url: Some(stored.file_url.clone()),
            file_name: self.receipt.as_ref().map(|r| r.file_name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
    Failed(String),
}

impl SubmitPhase {
    pub fn begin(&mut self) -> Result<(), SubmitError> {
        match self {
            SubmitPhase::Submitting => Err(SubmitError::InProgress),
            SubmitPhase::Done => Err(SubmitError::AlreadySubmitted),
            SubmitPhase::Idle | SubmitPhase::Failed(_) => {
                *self = SubmitPhase::Submitting;
                Ok(())
            }
        }
    }

    pub fn finish<T>(&mut self, result: &Result<T, SubmitError>) {
        *self = match result {
            Ok(_) => SubmitPhase::Done,
            Err(err) => SubmitPhase::Failed(err.to_string()),
        };
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitPhase::Submitting | SubmitPhase::Done)
    }
}

pub struct NewBillContainer {
    session: Session,
    navigator: Navigator,
    phase: Rc<RefCell<SubmitPhase>>,
}

impl NewBillContainer {
    pub fn new(session: Session, navigator: Navigator, phase: Rc<RefCell<SubmitPhase>>) -> Self {
        Self {
            session,
            navigator,
            phase,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.borrow().is_busy()
    }

    /// Uploads the receipt, then stores the bill under the returned key.
    /// Refused without any gateway call while another submission is running
    /// or once the bill was stored.
    pub async fn handle_submit(
        &self,
        gateway: &dyn BillsGateway,
        form: &NewBillForm,
    ) -> Result<Bill, SubmitError> {
        self.phase.borrow_mut().begin()?;
        let result = self.store_bill(gateway, form).await;
        self.phase.borrow_mut().finish(&result);
        result
    }

    async fn store_bill(
        &self,
        gateway: &dyn BillsGateway,
        form: &NewBillForm,
    ) -> Result<Bill, SubmitError> {
        let receipt = form.receipt().cloned().ok_or(FileError::Missing)?;
        let stored = gateway
            .create(ReceiptUpload {
                email: self.session.email.clone(),
                receipt,
            })
            .await?;
        let bill = form.build_bill(&self.session, &stored);
        let saved = gateway.update(&stored.key, &bill).await?;
        log::info!("stored bill {}", stored.key);
        Ok(saved)
    }

    /// Success and transport failures both lead back to the Bills page;
    /// the latter carries the error for its banner.
    pub fn finish_submit(&self, result: &Result<Bill, SubmitError>) {
        match result {
            Ok(_) => self.navigator.navigate(Route::Bills),
            Err(SubmitError::Gateway(err)) => {
                log::error!("could not store bill: {err}");
                self.navigator.navigate_with_error(Route::Bills, err.to_string());
            }
            Err(err) => log::warn!("submission refused: {err}"),
        }
    }
}
