use serde_json::json;
use sl_error::{MeanLoss, TrainingExample, TrainingExampleSet};

#[test]
fn example_set_serializes_as_ordered_list() {
    let set = TrainingExampleSet::from(vec![(1, 2), (2, 4)]);

    assert_eq!(
        serde_json::to_value(&set).unwrap(),
        json!([
            {"input": 1, "expected": 2},
            {"input": 2, "expected": 4}
        ])
    );
}

#[test]
fn example_set_loads_from_json() {
    let set: TrainingExampleSet<String, f64> = serde_json::from_value(json!([
        {"input": "b", "expected": 0.5},
        {"input": "a", "expected": 1.5}
    ]))
    .unwrap();

    assert_eq!(
        set.as_slice(),
        &[
            TrainingExample::new("b".to_string(), 0.5),
            TrainingExample::new("a".to_string(), 1.5),
        ]
    );
}

#[test]
fn finalized_loss_reports_mean() {
    let loss = MeanLoss::single(1.0).merge(MeanLoss::single(4.0)).finalized();

    assert_eq!(
        serde_json::to_value(loss).unwrap(),
        json!({"sum": 5.0, "count": 2, "mean": 2.5})
    );
}
