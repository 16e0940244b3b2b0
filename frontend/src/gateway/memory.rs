use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{BillsGateway, ReceiptUpload};
use crate::error::GatewayError;
use crate::models::{Bill, BillStatus, ExpenseType, StoredReceipt};

const RECEIPT_HOST: &str = "https://localhost:3456/images";

/// Bills kept in memory. Used for offline demos and by the test suite.
#[derive(Debug, Default)]
pub struct MemoryBillsGateway {
    bills: RefCell<Vec<Bill>>,
    failure: Cell<Option<u16>>,
    uploads: Cell<usize>,
}

impl MemoryBillsGateway {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: RefCell::new(bills),
            ..Self::default()
        }
    }

    pub fn with_sample_bills() -> Self {
        Self::new(sample_bills())
    }

    /// Every following call rejects with `Erreur <status>`.
    #[cfg(test)]
    pub fn fail_with(self, status: u16) -> Self {
        self.failure.set(Some(status));
        self
    }

    #[cfg(test)]
    pub fn upload_count(&self) -> usize {
        self.uploads.get()
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.borrow().clone()
    }

    fn check(&self) -> Result<(), GatewayError> {
        match self.failure.get() {
            Some(status) => Err(GatewayError::Status { status }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl BillsGateway for MemoryBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>, GatewayError> {
        self.check()?;
        Ok(self.bills())
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<StoredReceipt, GatewayError> {
        self.check()?;
        let uploads = self.uploads.get() + 1;
        self.uploads.set(uploads);

        Ok(StoredReceipt {
            file_url: format!("{}/{}", RECEIPT_HOST, upload.receipt.file_name),
            key: format!("bill-{}", uploads),
        })
    }

    async fn update(&self, id: &str, bill: &Bill) -> Result<Bill, GatewayError> {
        self.check()?;
        let mut saved = bill.clone();
        saved.id = Some(id.to_string());

        let mut bills = self.bills.borrow_mut();
        match bills.iter_mut().find(|b| b.id.as_deref() == Some(id)) {
            Some(existing) => *existing = saved.clone(),
            None => bills.push(saved.clone()),
        }
        Ok(saved)
    }
}

#[allow(clippy::too_many_arguments)]
fn sample_bill(
    id: &str,
    expense_type: ExpenseType,
    name: &str,
    date: &str,
    amount: i64,
    vat: &str,
    file_name: &str,
    status: BillStatus,
    comment_admin: &str,
) -> Bill {
    Bill {
        id: Some(id.to_string()),
        email: "a@a".to_string(),
        expense_type,
        name: name.to_string(),
        date: date.to_string(),
        amount,
        vat: vat.to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: Some(format!("{}/{}", RECEIPT_HOST, file_name)),
        file_name: Some(file_name.to_string()),
        status,
        comment_admin: Some(comment_admin.to_string()),
    }
}

fn sample_bills() -> Vec<Bill> {
    vec![
        sample_bill(
            "47qAXb6fIm2zOKkLzMro",
            ExpenseType::Hotel,
            "encore",
            "2004-04-04",
            400,
            "80",
            "preview-facture-free-201801-pdf-1.jpg",
            BillStatus::Pending,
            "ok",
        ),
        sample_bill(
            "BeKy5Mo4jkmdfPGYpTxZ",
            ExpenseType::Transports,
            "test1",
            "2001-01-01",
            100,
            "",
            "1592770761.jpeg",
            BillStatus::Refused,
            "en fait non",
        ),
        sample_bill(
            "UIUZtnPQvnbFnB0ozvJh",
            ExpenseType::OnlineServices,
            "test3",
            "2003-03-03",
            300,
            "60",
            "facture-client-php-exportee.png",
            BillStatus::Accepted,
            "bon bah d'accord",
        ),
        sample_bill(
            "qcCK3SzECmaZAGRrHjaC",
            ExpenseType::Restaurants,
            "test2",
            "2002-02-02",
            200,
            "40",
            "preview-facture-free-201801-pdf-1.jpg",
            BillStatus::Refused,
            "pas la bonne facture",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Receipt;

    fn upload(name: &str) -> ReceiptUpload {
        ReceiptUpload {
            email: "employee@test.tld".to_string(),
            receipt: Receipt::named(name),
        }
    }

    #[tokio::test]
    async fn test_lists_sample_bills() -> Result<(), String> {
        let gateway = MemoryBillsGateway::with_sample_bills();
        let bills = gateway.list().await.map_err(|e| e.to_string())?;
        assert_eq!(bills.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_then_update_stores_bill() -> Result<(), String> {
        let gateway = MemoryBillsGateway::default();
        let stored = gateway
            .create(upload("receipt.jpg"))
            .await
            .map_err(|e| e.to_string())?;
        assert_eq!(stored.key, "bill-1");
        assert!(stored.file_url.ends_with("/receipt.jpg"));

        let bill = Bill {
            name: "Ibis Hotel".to_string(),
            date: "2022-06-01".to_string(),
            ..Bill::default()
        };
        let saved = gateway
            .update(&stored.key, &bill)
            .await
            .map_err(|e| e.to_string())?;
        assert_eq!(saved.id.as_deref(), Some("bill-1"));
        assert_eq!(gateway.bills(), vec![saved]);
        assert_eq!(gateway.upload_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_existing_id() -> Result<(), String> {
        let gateway = MemoryBillsGateway::with_sample_bills();
        let mut bill = gateway.bills()[0].clone();
        bill.name = "renamed".to_string();

        gateway
            .update("47qAXb6fIm2zOKkLzMro", &bill)
            .await
            .map_err(|e| e.to_string())?;
        let bills = gateway.bills();
        assert_eq!(bills.len(), 4);
        assert_eq!(bills[0].name, "renamed");
        Ok(())
    }

    #[tokio::test]
    async fn test_failing_store_rejects_every_call() {
        let gateway = MemoryBillsGateway::with_sample_bills().fail_with(404);
        assert_eq!(
            gateway.list().await,
            Err(GatewayError::Status { status: 404 })
        );
        assert!(gateway.create(upload("receipt.png")).await.is_err());
        assert!(gateway.update("x", &Bill::default()).await.is_err());
        assert_eq!(gateway.upload_count(), 0);
    }
}
