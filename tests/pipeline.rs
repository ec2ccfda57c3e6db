//! End-to-end pipeline tests: ingest through extraction, summarization, and
//! agent queries over a real temporary corpus.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use docsift_rs::pipeline::{
    self, PipelineConfig, run_agent, run_evaluate, run_extract, run_ingest, run_preprocess,
    run_summarize,
};
use docsift_rs::{EntityKind, SentimentLabel};

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig::builder()
        .docs_dir(dir.join("docs"))
        .artifacts_dir(dir.join("artifacts"))
        .build()
}

fn write_doc(dir: &Path, name: &str, text: &str) {
    let docs = dir.join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join(name), text).unwrap();
}

/// Five documents, four of which mention "budget".
fn seed_budget_corpus(dir: &Path) {
    write_doc(dir, "a.txt", "City Council budget talks improved in Q1.");
    write_doc(dir, "b.txt", "The transit budget is a concern for riders.");
    write_doc(dir, "c.txt", "Parks department reported reliable service.");
    write_doc(dir, "d.txt", "School budget cuts were requested in March.");
    write_doc(dir, "e.txt", "Library budget grew 4% after expanded hours.");
}

#[test]
fn full_pipeline_produces_all_artifacts() {
    let tmp = tempfile::tempdir().unwrap();
    seed_budget_corpus(tmp.path());
    let config = config_in(tmp.path());

    run_ingest(&config).unwrap();
    run_preprocess(&config).unwrap();
    run_extract(&config).unwrap();
    run_summarize(&config).unwrap();
    let stats = run_evaluate(&config).unwrap();

    let artifacts = tmp.path().join("artifacts");
    for name in [
        "corpus.json",
        "corpus_clean.json",
        "extractions.json",
        "summaries.json",
    ] {
        assert!(artifacts.join(name).is_file(), "missing artifact {name}");
    }
    assert_eq!(stats.count, 5);
    assert!(stats.mean_chars > 0.0);
}

#[test]
fn extraction_records_carry_expected_facts() {
    let tmp = tempfile::tempdir().unwrap();
    seed_budget_corpus(tmp.path());
    let config = config_in(tmp.path());

    run_ingest(&config).unwrap();
    run_preprocess(&config).unwrap();
    let records = run_extract(&config).unwrap();

    // e.txt: "Library budget grew 4% after expanded hours."
    let library = records.iter().find(|r| r.filename == "e.txt").unwrap();
    assert!(
        library
            .extraction
            .entities
            .iter()
            .any(|e| e.kind == EntityKind::Percent && e.text == "4%")
    );
    assert_eq!(library.extraction.metrics[0].value, "4%");
    assert_eq!(library.extraction.sentiment.label, SentimentLabel::Positive);

    // b.txt: "The transit budget is a concern for riders."
    let transit = records.iter().find(|r| r.filename == "b.txt").unwrap();
    assert_eq!(transit.extraction.sentiment.label, SentimentLabel::Negative);
    assert_eq!(transit.extraction.issues.len(), 1);
}

#[test]
fn agent_query_bounded_ordered_and_summarized() {
    let tmp = tempfile::tempdir().unwrap();
    seed_budget_corpus(tmp.path());
    let config = config_in(tmp.path());

    run_ingest(&config).unwrap();
    run_preprocess(&config).unwrap();
    run_summarize(&config).unwrap();

    let result = run_agent(&config, "find budget issues").unwrap();
    // Planner picks the last token: "issues" matches nothing here
    assert!(result.results.is_empty());

    let result = run_agent(&config, "find the budget").unwrap();
    assert_eq!(result.results.len(), 3);
    // Matches keep corpus (sorted filename) order among the four hits
    let names: Vec<&str> = result.results.iter().map(|h| h.filename.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "d.txt"]);
    for hit in &result.results {
        assert!(hit.summary.is_some());
    }
}

#[test]
fn agent_search_is_case_insensitive() {
    let tmp = tempfile::tempdir().unwrap();
    seed_budget_corpus(tmp.path());
    let config = config_in(tmp.path());

    run_ingest(&config).unwrap();
    run_preprocess(&config).unwrap();
    run_summarize(&config).unwrap();

    let upper = run_agent(&config, "find BUDGET").unwrap();
    let lower = run_agent(&config, "find budget").unwrap();
    assert_eq!(upper.results, lower.results);
}

#[test]
fn reingesting_unchanged_files_keeps_doc_ids() {
    let tmp = tempfile::tempdir().unwrap();
    seed_budget_corpus(tmp.path());
    let config = config_in(tmp.path());

    let first = run_ingest(&config).unwrap();
    let second = run_ingest(&config).unwrap();
    let first_ids: Vec<&str> = first.iter().map(|d| d.doc_id.as_str()).collect();
    let second_ids: Vec<&str> = second.iter().map(|d| d.doc_id.as_str()).collect();
    assert_eq!(first_ids, second_ids);

    // Unique within the snapshot
    let mut deduped = first_ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), first_ids.len());
}

#[test]
fn empty_corpus_is_handled_throughout() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("docs")).unwrap();
    let config = config_in(tmp.path());

    assert!(run_ingest(&config).unwrap().is_empty());
    assert!(run_preprocess(&config).unwrap().is_empty());
    assert!(run_extract(&config).unwrap().is_empty());
    assert!(run_summarize(&config).unwrap().is_empty());
    assert_eq!(run_evaluate(&config).unwrap().count, 0);

    let result = pipeline::run_agent(&config, "find anything").unwrap();
    assert!(result.results.is_empty());
}
