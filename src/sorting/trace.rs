//! Step-by-step sort traces
//!
//! Each algorithm is the textbook in-place formulation (Lomuto partition for
//! quick sort, top-down merge sort) instrumented to push a [`SortStep`] at
//! every comparison, swap, and milestone. Index sets in a step refer to
//! positions in the array as it stood when the step was recorded.

use super::SortAlgorithm;
use rand::Rng;
use serde::Serialize;

/// One recorded moment of a sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortStep {
    pub array: Vec<i64>,
    /// Indices being compared
    pub comparing: Vec<usize>,
    /// Indices being swapped or shifted
    pub swapping: Vec<usize>,
    /// Indices known to be in their final position
    pub sorted: Vec<usize>,
    pub description: String,
    /// Running count of steps with a non-empty `comparing` set
    pub comparisons: usize,
    /// Running count of steps with a non-empty `swapping` set
    pub swaps: usize,
}

/// `[5, 10, 15, ...]`
pub fn ascending(size: usize) -> Vec<i64> {
    (0..size).map(|i| (i as i64 + 1) * 5).collect()
}

/// `[size * 5, ..., 10, 5]`
pub fn descending(size: usize) -> Vec<i64> {
    (0..size).map(|i| (size - i) as i64 * 5).collect()
}

/// `size` values drawn uniformly from `5..=104`
pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(5..=104)).collect()
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Records the step log of a sort over a fixed input
#[derive(Debug, Clone)]
pub struct SortTracer {
    input: Vec<i64>,
    steps: Vec<SortStep>,
    comparisons: usize,
    swaps: usize,
}

impl SortTracer {
    pub fn new(input: Vec<i64>) -> Self {
        SortTracer {
            input,
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn input(&self) -> &[i64] {
        &self.input
    }

    /// Sort a copy of the input with `algorithm`, returning every step
    pub fn trace(&mut self, algorithm: SortAlgorithm) -> Vec<SortStep> {
        self.steps.clear();
        self.comparisons = 0;
        self.swaps = 0;
        let mut arr = self.input.clone();
        let n = arr.len();

        match algorithm {
            SortAlgorithm::Bubble => self.bubble_sort(&mut arr),
            SortAlgorithm::Selection => self.selection_sort(&mut arr),
            SortAlgorithm::Insertion => self.insertion_sort(&mut arr),
            SortAlgorithm::Quick => {
                if n > 0 {
                    self.quick_sort(&mut arr, 0, n - 1);
                }
                let all: Vec<usize> = (0..n).collect();
                self.add_step(&arr, &[], &[], &all, "Quick sort complete!");
            }
            SortAlgorithm::Merge => {
                if n > 0 {
                    self.merge_sort(&mut arr, 0, n - 1);
                }
                let all: Vec<usize> = (0..n).collect();
                self.add_step(&arr, &[], &[], &all, "Merge sort complete!");
            }
        }

        log::debug!("{} sort traced in {} steps", algorithm, self.steps.len());
        std::mem::take(&mut self.steps)
    }

    fn add_step(
        &mut self,
        array: &[i64],
        comparing: &[usize],
        swapping: &[usize],
        sorted: &[usize],
        description: impl Into<String>,
    ) {
        if !comparing.is_empty() {
            self.comparisons += 1;
        }
        if !swapping.is_empty() {
            self.swaps += 1;
        }
        self.steps.push(SortStep {
            array: array.to_vec(),
            comparing: comparing.to_vec(),
            swapping: swapping.to_vec(),
            sorted: sorted.to_vec(),
            description: description.into(),
            comparisons: self.comparisons,
            swaps: self.swaps,
        });
    }

    fn bubble_sort(&mut self, arr: &mut [i64]) {
        let n = arr.len();
        let mut sorted: Vec<usize> = Vec::new();

        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                let description = format!("Comparing {} and {}", arr[j], arr[j + 1]);
                self.add_step(arr, &[j, j + 1], &[], &sorted, description);

                if arr[j] > arr[j + 1] {
                    let description = format!("Swapping {} and {}", arr[j], arr[j + 1]);
                    self.add_step(arr, &[], &[j, j + 1], &sorted, description);
                    arr.swap(j, j + 1);
                    self.add_step(arr, &[], &[], &sorted, "Swapped!");
                }
            }
            sorted.insert(0, n - 1 - i);
        }
        if n > 0 {
            sorted.insert(0, 0);
        }
        self.add_step(arr, &[], &[], &sorted, "Bubble sort complete!");
    }

    fn selection_sort(&mut self, arr: &mut [i64]) {
        let n = arr.len();
        let mut sorted: Vec<usize> = Vec::new();

        for i in 0..n.saturating_sub(1) {
            let mut min_idx = i;

            for j in i + 1..n {
                let description = format!("Comparing {} with {}", arr[min_idx], arr[j]);
                self.add_step(arr, &[min_idx, j], &[], &sorted, description);
                if arr[j] < arr[min_idx] {
                    min_idx = j;
                    let description = format!("New minimum found: {}", arr[min_idx]);
                    self.add_step(arr, &[min_idx], &[], &sorted, description);
                }
            }

            if min_idx != i {
                let description = format!("Swapping {} and {}", arr[i], arr[min_idx]);
                self.add_step(arr, &[], &[i, min_idx], &sorted, description);
                arr.swap(i, min_idx);
            }

            sorted.push(i);
            let description = format!("Position {} is now sorted", i);
            self.add_step(arr, &[], &[], &sorted, description);
        }
        if n > 0 {
            sorted.push(n - 1);
        }
        self.add_step(arr, &[], &[], &sorted, "Selection sort complete!");
    }

    fn insertion_sort(&mut self, arr: &mut [i64]) {
        let n = arr.len();
        let mut sorted: Vec<usize> = if n > 0 { vec![0] } else { Vec::new() };

        self.add_step(arr, &[], &[], &sorted, "Starting with first element as sorted");

        for i in 1..n {
            let key = arr[i];
            // `j` is one past the element under inspection
            let mut j = i;

            let description = format!("Inserting {} into sorted portion", key);
            self.add_step(arr, &[i], &[], &sorted, description);

            while j > 0 && arr[j - 1] > key {
                let description = format!("{} > {}, shifting right", arr[j - 1], key);
                self.add_step(arr, &[j - 1, j], &[], &sorted, description);
                arr[j] = arr[j - 1];
                let description = format!("Shifted {}", arr[j - 1]);
                self.add_step(arr, &[], &[j - 1, j], &sorted, description);
                j -= 1;
            }

            arr[j] = key;
            sorted.push(i);
            let description = format!("Inserted {} at position {}", key, j);
            self.add_step(arr, &[], &[], &sorted, description);
        }

        self.add_step(arr, &[], &[], &sorted, "Insertion sort complete!");
    }

    fn quick_sort(&mut self, arr: &mut [i64], low: usize, high: usize) {
        if low < high {
            let pivot_index = self.partition(arr, low, high);
            if pivot_index > low {
                self.quick_sort(arr, low, pivot_index - 1);
            }
            self.quick_sort(arr, pivot_index + 1, high);
        }
    }

    /// Lomuto partition around `arr[high]`, returning the pivot's final index
    fn partition(&mut self, arr: &mut [i64], low: usize, high: usize) -> usize {
        let pivot = arr[high];
        self.add_step(arr, &[high], &[], &[], format!("Pivot selected: {}", pivot));

        // Next slot for an element smaller than the pivot
        let mut store = low;

        for j in low..high {
            let description = format!("Comparing {} with pivot {}", arr[j], pivot);
            self.add_step(arr, &[j, high], &[], &[], description);

            if arr[j] < pivot {
                if store != j {
                    let description = format!("Swapping {} and {}", arr[store], arr[j]);
                    self.add_step(arr, &[], &[store, j], &[], description);
                    arr.swap(store, j);
                    self.add_step(arr, &[], &[], &[], "Swapped!");
                }
                store += 1;
            }
        }

        let description = format!("Placing pivot {} in correct position", pivot);
        self.add_step(arr, &[], &[store, high], &[], description);
        arr.swap(store, high);
        let description = format!("Pivot {} is now in place", pivot);
        self.add_step(arr, &[], &[], &[store], description);

        store
    }

    fn merge_sort(&mut self, arr: &mut [i64], left: usize, right: usize) {
        if left < right {
            let mid = (left + right) / 2;
            let description = format!(
                "Dividing: [{}...{}] and [{}...{}]",
                left,
                mid,
                mid + 1,
                right
            );
            self.add_step(arr, &[], &[], &[], description);

            self.merge_sort(arr, left, mid);
            self.merge_sort(arr, mid + 1, right);
            self.merge(arr, left, mid, right);
        }
    }

    fn merge(&mut self, arr: &mut [i64], left: usize, mid: usize, right: usize) {
        let left_part = arr[left..=mid].to_vec();
        let right_part = arr[mid + 1..=right].to_vec();
        let (mut i, mut j, mut k) = (0, 0, left);

        let description = format!(
            "Merging [{}] and [{}]",
            join(&left_part),
            join(&right_part)
        );
        self.add_step(arr, &[], &[], &[], description);

        while i < left_part.len() && j < right_part.len() {
            let description = format!("Comparing {} and {}", left_part[i], right_part[j]);
            self.add_step(arr, &[left + i, mid + 1 + j], &[], &[], description);

            if left_part[i] <= right_part[j] {
                arr[k] = left_part[i];
                i += 1;
            } else {
                arr[k] = right_part[j];
                j += 1;
            }
            k += 1;
            let description = format!("Placed {}", arr[k - 1]);
            self.add_step(arr, &[], &[], &[], description);
        }

        for &value in left_part[i..].iter().chain(&right_part[j..]) {
            arr[k] = value;
            k += 1;
        }

        let description = format!("Merged section: [{}]", join(&arr[left..=right]));
        self.add_step(arr, &[], &[], &[], description);
    }
}
