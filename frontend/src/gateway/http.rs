use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::FormData;

use super::{BillsGateway, ReceiptUpload};
use crate::error::GatewayError;
use crate::models::{decode_bills, Bill, StoredReceipt};

/// Talks to the bills API over `fetch`.
pub struct HttpBillsGateway {
    base_url: String,
    token: Option<String>,
}

impl HttpBillsGateway {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

fn ensure_ok(resp: Response) -> Result<Response, GatewayError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(GatewayError::Status {
            status: resp.status(),
        })
    }
}

fn receipt_form(upload: &ReceiptUpload) -> Result<FormData, GatewayError> {
    let browser_err = |err: wasm_bindgen::JsValue| GatewayError::Browser(format!("{:?}", err));

    let file = upload
        .receipt
        .file
        .as_ref()
        .ok_or_else(|| GatewayError::Browser("receipt has no file handle".to_string()))?;
    let form = FormData::new().map_err(browser_err)?;
    form.append_with_blob_and_filename("file", file, &upload.receipt.file_name)
        .map_err(browser_err)?;
    form.append_with_str("email", &upload.email)
        .map_err(browser_err)?;
    Ok(form)
}

#[async_trait(?Send)]
impl BillsGateway for HttpBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>, GatewayError> {
        let resp = self.authorize(Request::get(&self.url("bills"))).send().await?;
        let records = ensure_ok(resp)?.json::<Vec<serde_json::Value>>().await?;
        Ok(decode_bills(records))
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<StoredReceipt, GatewayError> {
        let form = receipt_form(&upload)?;
        // The browser sets the multipart boundary itself, so no Content-Type here.
        let resp = self
            .authorize(Request::post(&self.url("bills")))
            .body(form)?
            .send()
            .await?;
        let stored = ensure_ok(resp)?.json::<StoredReceipt>().await?;
        Ok(stored)
    }

    async fn update(&self, id: &str, bill: &Bill) -> Result<Bill, GatewayError> {
        let resp = self
            .authorize(Request::patch(&self.url(&format!("bills/{}", id))))
            .json(bill)?
            .send()
            .await?;
        let saved = ensure_ok(resp)?.json::<Bill>().await?;
        Ok(saved)
    }
}
