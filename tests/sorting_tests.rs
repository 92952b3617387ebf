// Integration tests for the sort-trace generator

use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, SeedableRng};
use stepviz::sorting::{ascending, descending, random, SortAlgorithm, SortStep, SortTracer};

fn trace(input: &[i64], algorithm: SortAlgorithm) -> Vec<SortStep> {
    SortTracer::new(input.to_vec()).trace(algorithm)
}

#[test]
fn test_every_algorithm_sorts_and_completes() {
    let input = [38, 27, 43, 3, 9, 82, 10, 3];
    let mut expected = input.to_vec();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let steps = trace(&input, algorithm);
        let last = steps.last().unwrap();
        assert_eq!(last.array, expected, "{} sort", algorithm);
        assert!(last.description.ends_with(" sort complete!"), "{}", last.description);
        assert_eq!(last.sorted.len(), input.len(), "{} sort", algorithm);
    }
}

#[test]
fn test_input_is_untouched() {
    let mut tracer = SortTracer::new(descending(5));
    tracer.trace(SortAlgorithm::Quick);
    assert_eq!(tracer.input(), &[25, 20, 15, 10, 5]);
}

#[test]
fn test_counters_match_step_sets() {
    for algorithm in SortAlgorithm::ALL {
        let steps = trace(&descending(6), algorithm);
        let comparing = steps.iter().filter(|s| !s.comparing.is_empty()).count();
        let swapping = steps.iter().filter(|s| !s.swapping.is_empty()).count();
        let last = steps.last().unwrap();
        assert_eq!(last.comparisons, comparing, "{} sort", algorithm);
        assert_eq!(last.swaps, swapping, "{} sort", algorithm);
    }
}

#[test]
fn test_bubble_sort_on_sorted_input_never_swaps() {
    let steps = trace(&ascending(5), SortAlgorithm::Bubble);
    let last = steps.last().unwrap();
    assert_eq!(last.swaps, 0);
    // n * (n - 1) / 2 comparisons
    assert_eq!(last.comparisons, 10);
    assert_eq!(last.sorted, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_bubble_sort_first_steps() {
    let steps = trace(&[3, 1, 2], SortAlgorithm::Bubble);
    let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(
        descriptions[..4].to_vec(),
        vec!["Comparing 3 and 1", "Swapping 3 and 1", "Swapped!", "Comparing 3 and 2"]
    );
    assert_eq!(steps[1].swapping, vec![0, 1]);
    assert_eq!(steps[1].array, vec![3, 1, 2]);
    assert_eq!(steps[2].array, vec![1, 3, 2]);
}

#[test]
fn test_selection_sort_marks_positions() {
    let steps = trace(&[2, 1], SortAlgorithm::Selection);
    let descriptions: Vec<&str> = steps.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec![
            "Comparing 2 with 1",
            "New minimum found: 1",
            "Swapping 2 and 1",
            "Position 0 is now sorted",
            "Selection sort complete!"
        ]
    );
}

#[test]
fn test_quick_sort_places_pivot() {
    let steps = trace(&[3, 1, 2], SortAlgorithm::Quick);
    assert_eq!(steps[0].description, "Pivot selected: 2");
    assert_eq!(steps[0].comparing, vec![2]);

    let placed = steps
        .iter()
        .find(|s| s.description == "Pivot 2 is now in place")
        .unwrap();
    assert_eq!(placed.array, vec![1, 2, 3]);
    assert_eq!(placed.sorted, vec![1]);
}

#[test]
fn test_merge_sort_divides_then_merges() {
    let steps = trace(&[4, 3, 2, 1], SortAlgorithm::Merge);
    assert_eq!(steps[0].description, "Dividing: [0...1] and [2...3]");
    assert!(steps
        .iter()
        .any(|s| s.description == "Merged section: [1, 2, 3, 4]"));
}

#[test]
fn test_single_element_input() {
    for algorithm in SortAlgorithm::ALL {
        let last = trace(&[7], algorithm).pop().unwrap();
        assert_eq!(last.array, vec![7]);
        assert_eq!(last.sorted, vec![0]);
        assert_eq!(last.comparisons, 0);
    }
}

#[test]
fn test_step_serializes() {
    let steps = trace(&[1], SortAlgorithm::Insertion);
    let value = serde_json::to_value(&steps[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "array": [1],
            "comparing": [],
            "swapping": [],
            "sorted": [0],
            "description": "Starting with first element as sorted",
            "comparisons": 0,
            "swaps": 0
        })
    );
}

#[test]
fn test_seeded_random_input_is_repeatable() {
    let first = random(15, &mut StdRng::seed_from_u64(42));
    let second = random(15, &mut StdRng::seed_from_u64(42));
    assert_eq!(first, second);
    assert_eq!(first.len(), 15);
    assert!(first.iter().all(|v| (5..=104).contains(v)));

    // The same seed gives the same trace
    assert_eq!(
        trace(&first, SortAlgorithm::Merge),
        trace(&second, SortAlgorithm::Merge)
    );
    assert!(random(0, &mut StdRng::seed_from_u64(42)).is_empty());
}
