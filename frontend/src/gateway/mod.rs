//! Access to the remote bills API.

mod http;
mod memory;

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::GatewayError;
use crate::models::{Bill, StoredReceipt};

pub use http::HttpBillsGateway;
pub use memory::MemoryBillsGateway;

/// A receipt picked in the file input. `file` is the browser handle that
/// gets uploaded; the in-memory gateway only looks at the name.
#[derive(Clone, Debug)]
pub struct Receipt {
    pub file_name: String,
    pub file: Option<web_sys::File>,
}

impl Receipt {
    pub fn from_file(file: web_sys::File) -> Self {
        Self {
            file_name: file.name(),
            file: Some(file),
        }
    }

    #[cfg(test)]
    pub fn named(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ReceiptUpload {
    pub email: String,
    pub receipt: Receipt,
}

#[async_trait(?Send)]
pub trait BillsGateway {
    async fn list(&self) -> Result<Vec<Bill>, GatewayError>;

    /// Uploads the receipt and reserves a bill for it.
    async fn create(&self, upload: ReceiptUpload) -> Result<StoredReceipt, GatewayError>;

    async fn update(&self, id: &str, bill: &Bill) -> Result<Bill, GatewayError>;
}

/// Shared gateway passed to pages as a prop.
#[derive(Clone)]
pub struct GatewayHandle(Rc<dyn BillsGateway>);

impl GatewayHandle {
    pub fn new(gateway: impl BillsGateway + 'static) -> Self {
        Self(Rc::new(gateway))
    }

    pub fn connect(config: &AppConfig, token: Option<String>) -> Self {
        if config.use_memory_store {
            log::info!("using the in-memory bills store");
            Self::new(MemoryBillsGateway::with_sample_bills())
        } else {
            log::info!("using the bills API at {}", config.api_base_url);
            Self::new(HttpBillsGateway::new(config.api_base_url.clone(), token))
        }
    }
}

impl Deref for GatewayHandle {
    type Target = dyn BillsGateway;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
