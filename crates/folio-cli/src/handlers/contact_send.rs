use crate::context::ExecutionContext;
use crate::presentation::{presenters, render};
use crate::types::OutputFormat;
use anyhow::{Result, bail};
use folio_engine::ContactForm;
use folio_types::ContactMessage;

pub async fn handle(
    context: &ExecutionContext,
    message: ContactMessage,
    format: OutputFormat,
) -> Result<()> {
    let mut form = ContactForm::new(message);

    // Validation short-circuits before the relay is even constructed, so
    // an unconfigured relay never masks field errors.
    if form.begin_submit().is_none() {
        let view_model = presenters::present_contact_result(&form);
        render(&view_model, format)?;
        bail!("contact message not sent");
    }

    let validated = form.message().clone();
    let outcome = context
        .client()?
        .contact()?
        .send(&validated)
        .await
        .map_err(|e| e.to_string());
    let failed = outcome.is_err();
    form.complete(outcome);

    let view_model = presenters::present_contact_result(&form);
    render(&view_model, format)?;

    if failed {
        bail!("contact message not sent");
    }
    Ok(())
}
