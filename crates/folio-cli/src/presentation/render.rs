use super::views::PlainView;
use crate::types::OutputFormat;
use anyhow::Result;
use serde::Serialize;

/// Emit a view-model. JSON always dumps the full view-model; plain output
/// is the human console layout.
pub fn render<T: Serialize + PlainView>(view_model: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view_model)?),
        OutputFormat::Plain => view_model.render_plain(),
    }
    Ok(())
}
