use lazyseq::Sequence;

#[test]
fn from_collection_preserves_order() {
    let seq = Sequence::from_collection(vec![1, 2, 3, 4, 5]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn from_collection_accepts_any_iterable() {
    let seq = Sequence::from_collection(1..=5);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn from_collection_empty() {
    let seq = Sequence::from_collection(Vec::<i32>::new());
    assert_eq!(seq.to_vec(), Vec::<i32>::new());
}

#[test]
fn from_range_drains_iterator_up_front() {
    let values = vec![1, 2, 3, 4, 5];
    let seq = Sequence::from_range(values.iter().cloned());
    assert_eq!(seq.to_vec(), values);
}

#[test]
fn from_values_pack_is_left_to_right() {
    let seq = Sequence::from_values([1, 2, 3, 4, 5]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn from_values_single() {
    let seq = Sequence::from_values([42]);
    assert_eq!(seq.to_vec(), vec![42]);
}

#[test]
fn from_generator_fn_yields_repeated_calls() {
    let seq = Sequence::from_generator_fn(|| 1);
    assert_eq!(seq.take(5).to_vec(), vec![1, 1, 1, 1, 1]);
}

#[test]
fn generator_restarts_from_captured_state() {
    let mut counter = 0;
    let seq = Sequence::from_generator_fn(move || {
        counter += 1;
        counter
    });
    let first_three = seq.take(3);

    // Every terminal operation drains a fresh duplicate, so the captured
    // counter restarts at its construction-time value each time.
    assert_eq!(first_three.to_vec(), vec![1, 2, 3]);
    assert_eq!(first_three.to_vec(), vec![1, 2, 3]);
}

#[test]
fn finiteness_tags() {
    let finite = Sequence::from_collection(vec![1, 2, 3]);
    let infinite = Sequence::from_generator_fn(|| 11);

    assert!(finite.is_finite());
    assert!(!infinite.is_finite());
    assert!(infinite.take(3).is_finite());
}

#[test]
fn clone_yields_independent_equal_sequence() {
    let original = Sequence::from_collection(vec![1, 2, 3, 4, 5]);
    let copy = original.clone();

    assert_eq!(original.to_vec(), copy.to_vec());
    // Consuming one handle never advances the other.
    assert_eq!(original.sum(), Ok(15));
    assert_eq!(copy.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn clone_of_combinator_pipeline_restarts() {
    let skipped = Sequence::from_collection(vec![1, 2, 3, 4, 5]).skip(2);
    let copy = skipped.clone();

    assert_eq!(skipped.to_vec(), vec![3, 4, 5]);
    assert_eq!(copy.to_vec(), vec![3, 4, 5]);
}
