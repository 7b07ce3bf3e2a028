//! Input normalization for CLI ergonomics.
//!
//! Provides O(1) validation sets and synonym maps so quick terminal
//! entry works with natural language for statuses, stages, and
//! priorities. Three-tier resolution: exact match → synonym lookup →
//! error with a closest-match suggestion.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::model::{Priority, Stage, TaskStatus};

// ── Valid value sets (O(1) lookups) ──────────────────────────

pub static VALID_TASK_STATUSES: LazyLock<HashSet<&str>> =
    LazyLock::new(|| ["todo", "in-progress", "completed"].into_iter().collect());

pub static VALID_STAGES: LazyLock<HashSet<&str>> = LazyLock::new(|| {
    ["lead", "prospect", "qualified", "closed", "closed-lost"]
        .into_iter()
        .collect()
});

pub static VALID_PRIORITIES: LazyLock<HashSet<&str>> =
    LazyLock::new(|| ["low", "medium", "high"].into_iter().collect());

// ── Synonym maps (typo and shorthand recovery) ───────────────

pub static TASK_STATUS_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("done", "completed"),
        ("complete", "completed"),
        ("finished", "completed"),
        ("closed", "completed"),
        ("wip", "in-progress"),
        ("in_progress", "in-progress"),
        ("inprogress", "in-progress"),
        ("working", "in-progress"),
        ("started", "in-progress"),
        ("active", "in-progress"),
        ("open", "todo"),
        ("new", "todo"),
        ("pending", "todo"),
        ("backlog", "todo"),
    ]
    .into_iter()
    .collect()
});

pub static STAGE_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("won", "closed"),
        ("win", "closed"),
        ("signed", "closed"),
        ("lost", "closed-lost"),
        ("dead", "closed-lost"),
        ("closed_lost", "closed-lost"),
        ("qualify", "qualified"),
        ("contacted", "prospect"),
        ("new", "lead"),
        ("cold", "lead"),
    ]
    .into_iter()
    .collect()
});

pub static PRIORITY_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("critical", "high"),
        ("urgent", "high"),
        ("important", "high"),
        ("p0", "high"),
        ("p1", "high"),
        ("normal", "medium"),
        ("default", "medium"),
        ("p2", "medium"),
        ("minor", "low"),
        ("trivial", "low"),
        ("later", "low"),
        ("p3", "low"),
    ]
    .into_iter()
    .collect()
});

/// Normalize a task status via exact match or synonym lookup.
///
/// # Errors
///
/// Returns the original input and an optional suggestion when nothing
/// matches.
pub fn normalize_task_status(input: &str) -> Result<TaskStatus, (String, Option<String>)> {
    let canonical = normalize(input, &VALID_TASK_STATUSES, &TASK_STATUS_SYNONYMS)?;
    canonical
        .parse()
        .map_err(|_| (input.to_string(), None))
}

/// Normalize a prospect stage via exact match or synonym lookup.
///
/// # Errors
///
/// Returns the original input and an optional suggestion when nothing
/// matches.
pub fn normalize_stage(input: &str) -> Result<Stage, (String, Option<String>)> {
    let canonical = normalize(input, &VALID_STAGES, &STAGE_SYNONYMS)?;
    canonical
        .parse()
        .map_err(|_| (input.to_string(), None))
}

/// Normalize a priority via exact match or synonym lookup.
///
/// # Errors
///
/// Returns the original input and an optional suggestion when nothing
/// matches.
pub fn normalize_priority(input: &str) -> Result<Priority, (String, Option<String>)> {
    let canonical = normalize(input, &VALID_PRIORITIES, &PRIORITY_SYNONYMS)?;
    canonical
        .parse()
        .map_err(|_| (input.to_string(), None))
}

/// Three-tier resolution shared by the normalizers.
fn normalize(
    input: &str,
    valid: &HashSet<&str>,
    synonyms: &HashMap<&str, &str>,
) -> Result<String, (String, Option<String>)> {
    let lower = input.to_lowercase();

    // Tier 1: exact match
    if valid.contains(lower.as_str()) {
        return Ok(lower);
    }

    // Tier 2: synonym lookup
    if let Some(&canonical) = synonyms.get(lower.as_str()) {
        return Ok(canonical.to_string());
    }

    // Tier 3: find closest suggestion
    let suggestion = find_closest_match(&lower, valid, synonyms);
    Err((input.to_string(), suggestion))
}

/// Find the closest matching value across valid set and synonyms.
fn find_closest_match(
    input: &str,
    valid: &HashSet<&str>,
    synonyms: &HashMap<&str, &str>,
) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;

    for &v in valid.iter().chain(synonyms.keys()) {
        let dist = levenshtein_distance(input, v);
        if dist <= 3 && best.is_none_or(|(_, d)| dist < d) {
            // For synonyms, show what it maps to
            if let Some(&canonical) = synonyms.get(v) {
                best = Some((canonical, dist));
            } else {
                best = Some((v, dist));
            }
        }
    }

    best.map(|(v, _)| v.to_string())
}

// ── Levenshtein distance ─────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Use single-row optimization (O(min(m,n)) space)
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Find existing IDs similar to the searched ID.
///
/// Returns up to `max` suggestions with edit distance ≤ 3,
/// sorted by distance then alphabetically.
#[must_use]
pub fn find_similar_ids(searched: &str, existing: &[String], max: usize) -> Vec<String> {
    let mut candidates: Vec<(usize, &str)> = existing
        .iter()
        .map(|id| (levenshtein_distance(searched, id), id.as_str()))
        .filter(|(dist, _)| *dist <= 3)
        .collect();

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    candidates
        .into_iter()
        .take(max)
        .map(|(_, id)| id.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_task_status() {
        assert_eq!(normalize_task_status("todo"), Ok(TaskStatus::Todo));
        assert_eq!(normalize_task_status("done"), Ok(TaskStatus::Completed));
        assert_eq!(normalize_task_status("wip"), Ok(TaskStatus::InProgress));
        assert_eq!(normalize_task_status("TODO"), Ok(TaskStatus::Todo));
        assert!(normalize_task_status("nonsense").is_err());
    }

    #[test]
    fn test_normalize_stage() {
        assert_eq!(normalize_stage("lead"), Ok(Stage::Lead));
        assert_eq!(normalize_stage("won"), Ok(Stage::Closed));
        assert_eq!(normalize_stage("lost"), Ok(Stage::ClosedLost));
        assert!(normalize_stage("nonsense").is_err());
    }

    #[test]
    fn test_normalize_priority() {
        assert_eq!(normalize_priority("high"), Ok(Priority::High));
        assert_eq!(normalize_priority("urgent"), Ok(Priority::High));
        assert_eq!(normalize_priority("normal"), Ok(Priority::Medium));
        assert_eq!(normalize_priority("trivial"), Ok(Priority::Low));
        assert!(normalize_priority("nonsense").is_err());
    }

    #[test]
    fn test_suggestion_for_near_miss() {
        let err = normalize_task_status("complated").unwrap_err();
        assert_eq!(err.1, Some("completed".to_string()));
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", "abd"), 1);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_find_similar_ids() {
        let ids = vec![
            "task-a1b2".to_string(),
            "task-a1b3".to_string(),
            "task-xxxx".to_string(),
        ];
        let result = find_similar_ids("task-a1b1", &ids, 3);
        assert!(!result.is_empty());
        assert!(result.contains(&"task-a1b2".to_string()));
    }
}
