//! Scan command handler

use std::collections::BTreeMap;
use std::io::Read;

use crate::cli::{OutputFormat, ScanArgs, StdinKind};
use crate::commands::{CommandContext, CommandOutput};
use crate::enrich::SuggestionEnricher;
use crate::error::{Result, ScanError};
use crate::lang::{ScriptDialect, SourceKind};
use crate::schema::{Issue, ScanResult};
use crate::session::{ScanSession, SourceUnit};
use crate::walk::collect_units;

/// Identifier given to text read from stdin
pub const STDIN_IDENTIFIER: &str = "<stdin>";

/// Run the scan command
pub fn run_scan(args: &ScanArgs, ctx: &CommandContext) -> Result<CommandOutput> {
    let stdin_text = if args.reads_stdin() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Some(text)
    } else {
        None
    };

    scan_with_input(args, ctx, stdin_text)
}

/// Scan with stdin content already captured
pub fn scan_with_input(
    args: &ScanArgs,
    ctx: &CommandContext,
    stdin_text: Option<String>,
) -> Result<CommandOutput> {
    let units = build_units(args, ctx, stdin_text)?;
    tracing::info!("Scanning {} units", units.len());

    let session = ScanSession::new(ctx.knowledge_base());
    let mut result = session.run(units);

    if args.ai_suggestions {
        enrich(args, ctx, &mut result.issues)?;
    }

    let text = match ctx.format {
        OutputFormat::Json => render_json(&result)?,
        OutputFormat::Text => render_text(&result, args.ai_suggestions),
    };

    Ok(CommandOutput {
        text,
        failed: args.fail_on_issues && result.has_issues(),
    })
}

fn build_units(
    args: &ScanArgs,
    ctx: &CommandContext,
    mut stdin_text: Option<String>,
) -> Result<Vec<SourceUnit>> {
    let mut units = Vec::new();

    let stdin_count = args.paths.iter().filter(|p| p.as_os_str() == "-").count();
    if stdin_count > 1 {
        return Err(ScanError::ConfigError {
            message: format!("stdin ('-') named {} times; it can be read only once", stdin_count),
        });
    }

    for path in &args.paths {
        if path.as_os_str() == "-" {
            if let Some(text) = stdin_text.take() {
                units.push(SourceUnit::from_text(STDIN_IDENTIFIER, text, stdin_kind(args.stdin_kind)));
            }
            continue;
        }

        units.extend(collect_units(std::slice::from_ref(path), &ctx.config.scan)?);
    }

    Ok(units)
}

fn stdin_kind(kind: StdinKind) -> SourceKind {
    match kind {
        StdinKind::Script => SourceKind::Script(ScriptDialect::JavaScript),
        StdinKind::TypeScript => SourceKind::Script(ScriptDialect::TypeScript),
        StdinKind::Markup => SourceKind::Markup,
    }
}

fn enrich(args: &ScanArgs, ctx: &CommandContext, issues: &mut [Issue]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }

    let mut config = ctx.config.suggestions.clone();
    if args.api_key.is_some() {
        config.api_key = args.api_key.clone();
    }

    let enricher = SuggestionEnricher::new(&config)?;
    if !enricher.has_credential() {
        tracing::info!("No suggestion provider credential; using built-in suggestions");
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| ScanError::ConfigError {
        message: format!("Failed to create tokio runtime: {}", e),
    })?;
    runtime.block_on(enricher.enrich_issues(issues));

    Ok(())
}

fn render_json(result: &ScanResult) -> Result<String> {
    let by_type: BTreeMap<&str, usize> = result
        .issues_by_type()
        .into_iter()
        .map(|(kind, count)| (kind.as_str(), count))
        .collect();

    let mut value = serde_json::to_value(result)
        .map_err(|e| ScanError::Generic(format!("JSON serialization failed: {}", e)))?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("totalIssues".to_string(), result.total_issues().into());
        obj.insert(
            "issuesByType".to_string(),
            serde_json::to_value(by_type).unwrap_or_default(),
        );
    }

    let mut output = serde_json::to_string_pretty(&value)
        .map_err(|e| ScanError::Generic(format!("JSON serialization failed: {}", e)))?;
    output.push('\n');
    Ok(output)
}

fn render_text(result: &ScanResult, with_suggestions: bool) -> String {
    let mut output = String::new();

    output.push_str("═══════════════════════════════════════════\n");
    output.push_str("  BASELINE COMPATIBILITY SCAN\n");
    output.push_str("═══════════════════════════════════════════\n\n");

    output.push_str(&format!("files_scanned: {}\n", result.files_scanned));
    output.push_str(&format!("files_with_issues: {}\n", result.files_with_issues));
    output.push_str(&format!("issues: {}\n", result.total_issues()));
    for (kind, count) in result.issues_by_type() {
        output.push_str(&format!("  {}: {}\n", kind, count));
    }
    output.push('\n');

    if result.issues.is_empty() {
        output.push_str("No problematic APIs found.\n");
        return output;
    }

    let mut current_file: Option<&str> = None;
    for issue in &result.issues {
        if current_file != Some(issue.file.as_str()) {
            output.push_str(&format!("── {} ──\n", issue.file));
            current_file = Some(issue.file.as_str());
        }

        output.push_str(&format!(
            "  {}:{}  [{}]  {}\n",
            issue.line, issue.column, issue.kind, issue.api
        ));
        output.push_str(&format!("    {}\n", issue.description));
        output.push_str(&format!("    suggestion: {}\n", issue.suggestion));
        output.push_str(&format!("    support: {}\n", issue.browser_support));
        if !issue.context.is_empty() {
            output.push_str(&format!("    > {}\n", issue.context));
        }

        if with_suggestions {
            if let Some(ai) = &issue.ai_suggestion {
                output.push_str(&format!("    alternative: {}\n", ai.alternative));
                output.push_str(&format!("    why: {}\n", ai.explanation));
                output.push_str("    example:\n");
                for line in ai.code_example.lines() {
                    output.push_str(&format!("      {}\n", line));
                }
                output.push_str(&format!("    alternative_support: {}\n", ai.browser_support));
            }
        }
        output.push('\n');
    }

    output
}
