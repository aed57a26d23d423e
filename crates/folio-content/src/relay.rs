use crate::error::{Error, Result};
use folio_types::ContactMessage;

/// Third-party email relay for contact submissions.
///
/// Sends a form-encoded POST; success is inferred from a 2xx status. A
/// failure leaves the caller's message untouched so it can be resubmitted.
pub struct EmailRelay {
    http: reqwest::Client,
    endpoint: String,
}

impl EmailRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn send(&self, message: &ContactMessage) -> Result<()> {
        let form = [
            ("name", message.name.as_str()),
            ("email", message.email.as_str()),
            ("subject", message.subject.as_str()),
            ("message", message.message.as_str()),
        ];

        let response = self.http.post(&self.endpoint).form(&form).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        Ok(())
    }
}
