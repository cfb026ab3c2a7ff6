//! Status classification shared by every renderer

use super::collection::TaskCollection;
use super::task::Task;

/// Visual state of a task, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The task itself is done
    Completed,
    /// Not done, and every predecessor is done
    Ready,
    /// Not done, and at least one predecessor is not
    Blocked,
}

impl Status {
    /// Classifies a task against the collection it belongs to
    pub fn of(task: &Task, tasks: &TaskCollection) -> Self {
        if task.is_completed() {
            Status::Completed
        } else if is_ready(task, tasks) {
            Status::Ready
        } else {
            Status::Blocked
        }
    }

    pub fn is_completed(self) -> bool {
        self == Status::Completed
    }
}

/// True when every predecessor is completed. Unknown ids count as incomplete.
pub fn is_ready(task: &Task, tasks: &TaskCollection) -> bool {
    task.blocked_by()
        .iter()
        .all(|id| tasks.get(id).is_some_and(Task::is_completed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_predecessors_is_ready() {
        let tasks = TaskCollection::from_tasks([Task::new("1", "a")]).unwrap();
        let task = tasks.get("1").unwrap();

        assert!(is_ready(task, &tasks));
        assert_eq!(Status::of(task, &tasks), Status::Ready);
    }

    #[test]
    fn completed_wins_over_blocked() {
        let tasks = TaskCollection::from_tasks([
            Task::new("1", "a"),
            Task::new("2", "b").with_blocked_by(["1"]).with_completed(true),
        ])
        .unwrap();
        let task = tasks.get("2").unwrap();

        assert!(!is_ready(task, &tasks));
        assert_eq!(Status::of(task, &tasks), Status::Completed);
    }

    #[test]
    fn completed_predecessor_makes_ready() {
        let tasks = TaskCollection::from_tasks([
            Task::new("A", "a").with_completed(true),
            Task::new("B", "b").with_blocked_by(["A"]),
        ])
        .unwrap();

        assert_eq!(Status::of(tasks.get("A").unwrap(), &tasks), Status::Completed);
        assert_eq!(Status::of(tasks.get("B").unwrap(), &tasks), Status::Ready);
    }

    #[test]
    fn one_incomplete_predecessor_blocks() {
        let tasks = TaskCollection::from_tasks([
            Task::new("1", "a").with_completed(true),
            Task::new("2", "b"),
            Task::new("3", "c").with_blocked_by(["1", "2"]),
        ])
        .unwrap();

        assert_eq!(Status::of(tasks.get("3").unwrap(), &tasks), Status::Blocked);
    }

    #[test]
    fn milestone_does_not_change_status() {
        let tasks = TaskCollection::from_tasks([Task::new("M", "m").with_milestone(true)]).unwrap();
        assert_eq!(Status::of(tasks.get("M").unwrap(), &tasks), Status::Ready);
    }

    #[test]
    fn unknown_predecessor_counts_as_incomplete() {
        let tasks = TaskCollection::from_tasks([Task::new("1", "a")]).unwrap();
        let orphan = Task::new("2", "b").with_blocked_by(["missing"]);

        assert!(!is_ready(&orphan, &tasks));
        assert_eq!(Status::of(&orphan, &tasks), Status::Blocked);
    }

    /// Generates a closed collection: task `i` may only depend on tasks `< i`
    fn arb_collection() -> impl Strategy<Value = TaskCollection> {
        prop::collection::vec((any::<bool>(), any::<bool>(), any::<u8>()), 1..12).prop_map(
            |specs| {
                let tasks = specs.iter().enumerate().map(|(i, &(milestone, completed, mask))| {
                    let deps: Vec<String> = (0..i)
                        .filter(|j| (mask >> (j % 8)) & 1 == 1)
                        .map(|j| j.to_string())
                        .collect();
                    Task::new(i.to_string(), "t")
                        .with_blocked_by(deps)
                        .with_milestone(milestone)
                        .with_completed(completed)
                });
                TaskCollection::from_tasks(tasks.collect::<Vec<_>>()).unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn empty_blocked_by_is_always_ready(milestone: bool, completed: bool) {
            let tasks = TaskCollection::from_tasks([
                Task::new("1", "a").with_milestone(milestone).with_completed(completed),
            ]).unwrap();
            prop_assert!(is_ready(tasks.get("1").unwrap(), &tasks));
        }

        #[test]
        fn classification_matches_flags(tasks in arb_collection()) {
            for task in &tasks {
                let status = Status::of(task, &tasks);
                let ready = is_ready(task, &tasks);
                prop_assert_eq!(status == Status::Completed, task.is_completed());
                prop_assert_eq!(status == Status::Ready, !task.is_completed() && ready);
                prop_assert_eq!(status == Status::Blocked, !task.is_completed() && !ready);
            }
        }
    }
}
