//! Lookup command handler

use crate::cli::{LookupArgs, OutputFormat};
use crate::commands::{CommandContext, CommandOutput};
use crate::error::{Result, ScanError};

/// Run the lookup command
pub fn run_lookup(args: &LookupArgs, ctx: &CommandContext) -> Result<CommandOutput> {
    let kb = ctx.knowledge_base();
    let info = kb.api_info(args.api.trim());

    let text = match ctx.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&info)
                .map_err(|e| ScanError::Generic(format!("JSON serialization failed: {}", e)))?;
            json.push('\n');
            json
        }
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str(&format!("api: {}\n", info.api));
            output.push_str(&format!("baseline: {}\n", info.is_baseline));
            output.push_str(&format!("status: {}\n", info.status));
            output.push_str(&format!("browser_support: {}\n", info.browser_support));
            if let Some(ref suggestion) = info.suggestion {
                output.push_str(&format!("suggestion: {}\n", suggestion));
            }
            output.push_str(&format!("description: {}\n", info.description));
            output
        }
    };

    Ok(CommandOutput::ok(text))
}
