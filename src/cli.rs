use crate::app::dto::{CaseRecord, PathRecord};
use crate::app::engine::AuditEngine;
use anyhow::Result;

pub fn display_summary(engine: &AuditEngine) -> Result<()> {
    let summary = engine.summary();
    println!("Questionnaire: {}", summary.origin);
    println!("Graph Summary:");
    println!("  Nodes: {}", summary.node_count);
    println!("  Edges: {}", summary.edge_count);
    println!("  Questions: {}", summary.questions);
    println!("  Answers: {}", summary.answers);
    println!("  Documents: {}", summary.documents);
    println!("  Rejections: {}", summary.rejections);
    println!("  Child links: {}", summary.child_links);
    println!("  Result links: {}", summary.result_links);
    Ok(())
}

pub fn display_paths(engine: &AuditEngine, json: bool) -> Result<()> {
    let report = engine.paths_report()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Paths: {}", report.path_count);
    println!("{}", "=".repeat(80));
    for (i, path) in report.paths.iter().enumerate() {
        print_path(i + 1, path, "");
    }
    Ok(())
}

pub fn display_cases(engine: &AuditEngine, mode: &str, json: bool) -> Result<()> {
    let report = engine.cases_report(mode)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Mode: {}", report.mode);
    println!(
        "Paths: {} enumerated, {} aggregated",
        report.enumerated_paths, report.aggregated_paths
    );
    println!("Cases: {}", report.cases.len());
    println!("{}", "=".repeat(80));
    for (i, case) in report.cases.iter().enumerate() {
        print_case(i + 1, case);
    }
    Ok(())
}

/// Prints structural findings. Returns whether the questionnaire is clean.
pub fn display_check(engine: &AuditEngine) -> Result<bool> {
    let report = engine.check_report();
    if report.clean {
        println!("{}: no structural findings", report.origin);
        return Ok(true);
    }

    println!("{}: {} finding(s)", report.origin, report.findings.len());
    for finding in &report.findings {
        println!("  - {}", finding);
    }
    // A cyclic questionnaire cannot be enumerated; surface that here as well.
    if let Err(e) = engine.enumerate() {
        println!("  ! {}", e);
    }
    Ok(false)
}

pub fn debug_graph(engine: &AuditEngine) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&engine.debug_graph())?);
    Ok(())
}

fn print_case(n: usize, case: &CaseRecord) {
    let kind = if case.is_rejection {
        "rejection"
    } else {
        "documents"
    };
    println!("{}. [{}] ({})", n, kind, case.footprint.join(", "));
    if case.text.is_empty() {
        println!("   (no results)");
    } else {
        println!("   {}", case.text);
    }
    for (i, path) in case.paths.iter().enumerate() {
        print_path(i + 1, path, "   ");
    }
    println!();
}

fn print_path(n: usize, path: &PathRecord, indent: &str) {
    let marker = if path.ends_in_rejection { " (rejected)" } else { "" };
    println!("{}{}. {}{}", indent, n, path.display, marker);
    println!("{}   {}", indent, path.description);
}
