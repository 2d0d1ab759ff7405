//! Command implementations for the contact processor CLI
//!
//! This module contains the command execution logic: input validation
//! (extension and size limits are enforced here, outside the core), logging
//! setup, and result presentation. The core pipeline itself runs on a
//! blocking worker thread so the async runtime is never stalled by a large
//! file.

use std::path::Path;

use colored::Colorize;
use tracing::debug;

use crate::app::services::csv_analyzer::{CsvProcessor, ProcessingResult};
use crate::cli::args::{AnalyzeArgs, Args, Commands, OutputFormat, SchemaArgs};
use crate::constants::{
    CALL_OPTIONAL_FIELDS, INPUT_EXTENSION, MAX_INPUT_SIZE_MB, TICKET_OPTIONAL_FIELDS,
};
use crate::{DatasetKind, Error, Result};

/// Main command runner for the contact processor
pub async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Analyze(analyze_args)) => run_analyze(analyze_args).await,
        Some(Commands::Schema(schema_args)) => run_schema(schema_args).await,
        None => {
            // main() shows help before dispatching, so this is unreachable
            // in practice; kept total for safety.
            Ok(())
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("contact_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Validate an input file before invoking the core.
///
/// The core itself accepts any text; the `.csv` extension and the size cap
/// are caller-side contracts enforced here.
async fn validate_input(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    if extension.as_deref() != Some(INPUT_EXTENSION) {
        return Err(Error::configuration(format!(
            "Unsupported file type for {}: expected a .{} file",
            path.display(),
            INPUT_EXTENSION
        )));
    }

    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        Error::io_error(format!("Cannot access file {}: {}", path.display(), e))
    })?;

    let limit_bytes = MAX_INPUT_SIZE_MB * 1024 * 1024;
    if metadata.len() > limit_bytes {
        return Err(Error::configuration(format!(
            "File {} is {:.1} MB; the maximum supported size is {} MB",
            path.display(),
            metadata.len() as f64 / (1024.0 * 1024.0),
            MAX_INPUT_SIZE_MB
        )));
    }

    Ok(())
}

/// Run the analyze command
async fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    setup_logging(args.log_level());
    validate_input(&args.file).await?;

    let content = tokio::fs::read_to_string(&args.file).await.map_err(|e| {
        Error::io_error(format!("Failed to read file {}: {}", args.file.display(), e))
    })?;

    // The pipeline is synchronous by contract; run it off the async runtime
    // so a large file never blocks the event loop.
    let result = tokio::task::spawn_blocking(move || CsvProcessor::new().process_text(&content))
        .await
        .map_err(|e| Error::io_error(format!("Processing task failed: {}", e)))??;

    let Some(result) = result else {
        println!(
            "{}",
            "Input has no data rows (a header line plus at least one data line is required)"
                .yellow()
        );
        return Ok(());
    };

    match args.format {
        OutputFormat::Json => emit_json(&result, args.output.as_deref()).await,
        OutputFormat::Table => {
            print_summary(&result);
            Ok(())
        }
    }
}

/// Serialize the full result as JSON to stdout or a file
async fn emit_json(result: &ProcessingResult, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| Error::data_validation(format!("Failed to serialize result: {}", e)))?;

    match output {
        Some(path) => {
            tokio::fs::write(path, &json).await.map_err(|e| {
                Error::io_error(format!("Failed to write {}: {}", path.display(), e))
            })?;
            println!("Wrote analysis to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Print a human-readable analysis summary
fn print_summary(result: &ProcessingResult) {
    println!();
    println!("{}", "Analysis Summary".bold());
    println!("{}", "================".bold());
    println!("Dataset kind:      {}", result.data_type.to_string().cyan());
    println!("Records:           {}", result.summary.total_count);
    println!(
        "Distinct {}: {}",
        match result.data_type {
            DatasetKind::CallCenter => "agents   ",
            DatasetKind::Ticket => "customers",
        },
        result.summary.distinct_entity_count
    );
    if let (Some(start), Some(end)) = (result.summary.date_range.start, result.summary.date_range.end)
    {
        println!(
            "Date range:        {} to {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );
    }
    if result.stats.rows_dropped > 0 || result.stats.records_skipped > 0 {
        println!(
            "{}",
            format!(
                "Dropped rows:      {} malformed, {} skipped",
                result.stats.rows_dropped, result.stats.records_skipped
            )
            .yellow()
        );
    }
    println!();

    match &result.analytics {
        crate::Analytics::CallCenter(analytics) => {
            println!("{}", "Call Metrics".bold());
            println!("  Total calls:       {}", analytics.total_calls);
            println!("  Inbound:           {}", analytics.inbound_calls);
            println!("  Outbound:          {}", analytics.outbound_calls);
            println!("  Abandoned:         {}", analytics.abandoned_calls);
            println!("  Lost in IVR:       {}", analytics.lost_in_ivr_calls);
            println!("  Avg talk time:     {:.2} h", analytics.avg_talk_time);
            println!("  Avg queue time:    {:.2} h", analytics.avg_time_in_queue);
            println!("  Avg hold time:     {:.2} h", analytics.avg_on_hold_duration);
            println!("  Avg survey rating: {:.2}", analytics.avg_survey_rating);
            println!(
                "  Repeat call rate:  {:.1}%",
                analytics.repeat_call_rate_pct
            );
            println!();
            println!("{}", "Agents".bold());
            let mut agents: Vec<_> = analytics.agent_performance.iter().collect();
            agents.sort_by(|a, b| b.1.total_calls.cmp(&a.1.total_calls));
            for (name, perf) in agents {
                println!(
                    "  {:<24} {:>4} calls  {:.2} h avg  rating {:.2}",
                    name, perf.total_calls, perf.avg_talk_time, perf.avg_survey_rating
                );
            }
        }
        crate::Analytics::Ticket(analytics) => {
            println!("{}", "Ticket Metrics".bold());
            println!("  Total tickets:     {}", analytics.total_tickets);
            println!("  Resolved:          {}", analytics.resolved_tickets);
            println!("  Resolution rate:   {:.1}%", analytics.resolution_rate_pct);
            println!(
                "  Satisfaction:      {:.1}%",
                analytics.customer_satisfaction_pct
            );
            println!(
                "  SLA first resp.:   {:.1}%",
                analytics.sla_first_response_pct
            );
            println!("  SLA resolution:    {:.1}%", analytics.sla_resolution_pct);
            println!("  Avg response:      {:.2} h", analytics.avg_response_time);
            println!("  Avg resolution:    {:.2} h", analytics.avg_resolution_time);
            println!("  Avg rating:        {:.2}", analytics.avg_customer_rating);
            println!();
            println!("{}", "Status".bold());
            for (status, count) in &analytics.status_distribution {
                println!("  {:<24} {:>4}", status, count);
            }
            println!();
            println!("{}", "Priority".bold());
            for (priority, count) in &analytics.priority_distribution {
                println!("  {:<24} {:>4}", priority, count);
            }
        }
    }
    println!();
}

/// Run the schema command
async fn run_schema(args: SchemaArgs) -> Result<()> {
    use crate::app::services::csv_analyzer::column_map::ColumnMap;
    use crate::app::services::csv_analyzer::schema::detect_kind;
    use crate::app::services::csv_analyzer::tabular::parse_table;

    setup_logging(args.log_level());
    validate_input(&args.file).await?;

    let content = tokio::fs::read_to_string(&args.file).await.map_err(|e| {
        Error::io_error(format!("Failed to read file {}: {}", args.file.display(), e))
    })?;

    let Some(table) = parse_table(&content) else {
        println!(
            "{}",
            "Input has no data rows (a header line plus at least one data line is required)"
                .yellow()
        );
        return Ok(());
    };

    let kind = detect_kind(&table.headers);
    println!();
    println!("Detected dataset kind: {}", kind.to_string().cyan().bold());
    println!(
        "Columns: {} headers, {} data rows ({} dropped)",
        table.headers.len(),
        table.rows.len(),
        table.dropped_rows
    );
    println!();

    // The MissingColumns message is the user-facing contract; let it
    // propagate untouched when required fields are absent.
    let map = ColumnMap::resolve(kind, &table.headers)?;

    println!("{}", "Resolved columns".bold());
    for (canonical, column) in map.resolved_fields() {
        println!(
            "  {:<18} <- column {:>2} ({})",
            canonical, column.index, column.header
        );
    }

    let optional = match kind {
        DatasetKind::CallCenter => CALL_OPTIONAL_FIELDS,
        DatasetKind::Ticket => TICKET_OPTIONAL_FIELDS,
    };
    let unresolved: Vec<&str> = optional
        .iter()
        .map(|(canonical, _)| *canonical)
        .filter(|canonical| !map.is_resolved(canonical))
        .collect();

    if !unresolved.is_empty() {
        println!();
        println!("{}", "Absent optional fields (defaults apply)".bold());
        for canonical in unresolved {
            println!("  {}", canonical.dimmed());
        }
    }
    println!();

    Ok(())
}
