//! Finding deduplication — the uniqueness contract for regulation codes.
//!
//! The LLM sometimes emits the same regulation twice with different
//! evidence. Findings are merged per code, keeping first-seen order.
//! Pure, order-stable, and idempotent.

use complyx_common::RegulationFinding;
use std::collections::HashMap;

/// Priority rank under high > medium > low; anything unrecognized sorts
/// below low.
fn priority_rank(priority: &str) -> u8 {
    match priority {
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}

/// Union-append `incoming` onto `existing`, skipping duplicates, keeping
/// first-seen order.
fn merge_unique(existing: &mut Vec<String>, incoming: Vec<String>) {
    for item in incoming {
        if !existing.contains(&item) {
            existing.push(item);
        }
    }
}

fn merge_into(existing: &mut RegulationFinding, incoming: RegulationFinding) {
    merge_unique(&mut existing.triggers, incoming.triggers);
    merge_unique(&mut existing.key_obligations, incoming.key_obligations);
    merge_unique(&mut existing.next_steps, incoming.next_steps);

    if existing.reasoning.is_empty() {
        existing.reasoning = incoming.reasoning;
    } else if !incoming.reasoning.is_empty() {
        existing.reasoning = format!("{} {}", existing.reasoning, incoming.reasoning);
    }

    existing.confidence = existing.confidence.max(incoming.confidence);

    if priority_rank(&incoming.priority) > priority_rank(&existing.priority) {
        existing.priority = incoming.priority;
    }

    // First-wins: a later value only fills an absent slot, so a more
    // accurate later category can be discarded. Kept for compatibility
    // with stored results; the tests pin this tie-break.
    if existing.thresholds_met.is_none() {
        existing.thresholds_met = incoming.thresholds_met;
    }
    if existing.category.is_none() {
        existing.category = incoming.category;
    }
    if existing.name.is_empty() {
        existing.name = incoming.name;
    }
}

/// Merge duplicate findings by `code`, first occurrence wins the slot.
/// Output preserves first-seen order with each code exactly once.
pub fn dedupe_findings(findings: Vec<RegulationFinding>) -> Vec<RegulationFinding> {
    let mut merged: Vec<RegulationFinding> = Vec::with_capacity(findings.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for finding in findings {
        match index.get(&finding.code) {
            Some(&i) => merge_into(&mut merged[i], finding),
            None => {
                index.insert(finding.code.clone(), merged.len());
                merged.push(finding);
            }
        }
    }
    merged
}
