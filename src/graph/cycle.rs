use std::collections::HashMap;

use crate::error::TrackerError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Reject containment cycles among scenario task keys.
/// `edges` are `(composite, subtask)` pairs. Uses a three-colour DFS; the error
/// names a task on the cycle.
pub fn detect_cycle(nodes: &[String], edges: &[(String, String)]) -> Result<(), TrackerError> {
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    for node in nodes {
        adj.entry(node.as_str()).or_default();
    }
    for (parent, child) in edges {
        adj.entry(parent.as_str()).or_default().push(child.as_str());
    }

    let mut marks: HashMap<&str, Mark> = adj.keys().map(|k| (*k, Mark::Unvisited)).collect();

    // Declaration order keeps the reported key stable.
    for node in nodes {
        if marks[node.as_str()] == Mark::Unvisited {
            if let Some(on_cycle) = visit(node.as_str(), &adj, &mut marks) {
                return Err(TrackerError::cycle_detected(on_cycle));
            }
        }
    }
    Ok(())
}

fn visit<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    marks: &mut HashMap<&'a str, Mark>,
) -> Option<&'a str> {
    marks.insert(node, Mark::OnStack);
    for &child in adj.get(node).into_iter().flatten() {
        match marks.get(child).copied().unwrap_or(Mark::Unvisited) {
            Mark::OnStack => return Some(child),
            Mark::Unvisited => {
                if let Some(found) = visit(child, adj, marks) {
                    return Some(found);
                }
            }
            Mark::Done => {}
        }
    }
    marks.insert(node, Mark::Done);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn edge(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_tree_has_no_cycle() {
        let nodes = keys(&["c1", "t1", "t2", "c2"]);
        let edges = vec![edge("c1", "t1"), edge("c1", "t2"), edge("c2", "c1")];
        assert!(detect_cycle(&nodes, &edges).is_ok());
    }

    #[test]
    fn test_shared_subtask_is_not_a_cycle() {
        let nodes = keys(&["a", "b", "shared"]);
        let edges = vec![edge("a", "shared"), edge("b", "shared"), edge("b", "a")];
        assert!(detect_cycle(&nodes, &edges).is_ok());
    }

    #[test]
    fn test_cycle_reported() {
        let nodes = keys(&["a", "b", "c"]);
        let edges = vec![edge("a", "b"), edge("b", "c"), edge("c", "a")];
        let err = detect_cycle(&nodes, &edges).unwrap_err();
        assert_eq!(err.code, ErrorCode::CycleDetected);
        assert!(err.message.contains("'a'"));
    }

    #[test]
    fn test_self_containment() {
        let nodes = keys(&["a"]);
        let edges = vec![edge("a", "a")];
        assert!(detect_cycle(&nodes, &edges).is_err());
    }
}
