//! Priority ordering
//!
//! An in-place quicksort over task slices, ordering by ascending priority
//! value (1 = high first). The sort is unstable: tasks with equal priority
//! may swap relative positions, which is accepted for an interactive
//! personal list. The pivot is always the last element of the subrange, so
//! adversarial inputs (all-equal, reverse-sorted) degrade to O(n^2); n is
//! small enough not to care.

use crate::domain::Task;

/// Reorder `tasks` in place by ascending priority. No-op for 0 or 1 tasks.
pub fn sort_by_priority(tasks: &mut [Task]) {
    if tasks.len() > 1 {
        quicksort(tasks, 0, tasks.len() - 1);
    }
}

fn quicksort(tasks: &mut [Task], low: usize, high: usize) {
    if low < high {
        let pivot = partition(tasks, low, high);
        if pivot > low {
            quicksort(tasks, low, pivot - 1);
        }
        quicksort(tasks, pivot + 1, high);
    }
}

/// Partition around the priority of the last element: strictly smaller
/// priorities move left, the pivot lands at the boundary. Returns the
/// pivot's final index.
fn partition(tasks: &mut [Task], low: usize, high: usize) -> usize {
    let pivot = tasks[high].priority;
    let mut boundary = low;
    for j in low..high {
        if tasks[j].priority < pivot {
            tasks.swap(boundary, j);
            boundary += 1;
        }
    }
    tasks.swap(boundary, high);
    boundary
}
