use crate::error::TrackerError;
use crate::models::{Task, TaskId};
use crate::store::Store;

/// Depth-first walk visiting every subtask before the node that contains it.
pub fn walk_children_first<F>(store: &Store, root: TaskId, visit: &mut F) -> Result<(), TrackerError>
where
    F: FnMut(&Task) -> Result<(), TrackerError>,
{
    let task = store.task(root)?;
    for sub in task.subtasks() {
        walk_children_first(store, *sub, visit)?;
    }
    visit(task)
}

/// Depth-first pre-order walk; `depth` is 0 for `root`.
pub fn walk_pre_order<F>(store: &Store, root: TaskId, depth: usize, visit: &mut F) -> Result<(), TrackerError>
where
    F: FnMut(&Task, usize) -> Result<(), TrackerError>,
{
    let task = store.task(root)?;
    visit(task, depth)?;
    for sub in task.subtasks() {
        walk_pre_order(store, *sub, depth + 1, visit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tree() -> (Store, TaskId) {
        let mut store = Store::new();
        let u = store.add_user("u");
        let d = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let a = store.add_simple_task(u, "a", d).unwrap();
        let b = store.add_simple_task(u, "b", d).unwrap();
        let inner = store.add_composite_task(vec![a, b], vec![u], "inner", d).unwrap();
        let c = store.add_simple_task(u, "c", d).unwrap();
        let root = store.add_composite_task(vec![inner, c], vec![u], "root", d).unwrap();
        (store, root)
    }

    #[test]
    fn test_children_first_order() {
        let (store, root) = tree();
        let mut seen = Vec::new();
        walk_children_first(&store, root, &mut |t| {
            seen.push(t.description().to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, ["a", "b", "inner", "c", "root"]);
    }

    #[test]
    fn test_pre_order_with_depth() {
        let (store, root) = tree();
        let mut seen = Vec::new();
        walk_pre_order(&store, root, 0, &mut |t, depth| {
            seen.push((t.description().to_string(), depth));
            Ok(())
        })
        .unwrap();
        let expected = [("root", 0), ("inner", 1), ("a", 2), ("b", 2), ("c", 1)];
        let expected: Vec<_> = expected.iter().map(|(d, n)| (d.to_string(), *n)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_visitor_error_stops_walk() {
        let (store, root) = tree();
        let mut count = 0;
        let result = walk_children_first(&store, root, &mut |_| {
            count += 1;
            Err(TrackerError::validation("stop"))
        });
        assert!(result.is_err());
        assert_eq!(count, 1);
    }
}
