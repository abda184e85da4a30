use super::*;

#[test]
fn can_reproduce_sequence_with_the_same_seed() {
    let first = DefaultRandom::new_with_seed(42);
    let second = DefaultRandom::new_with_seed(42);

    let first = (0..100).map(|_| first.uniform_int(1, 10)).collect::<Vec<_>>();
    let second = (0..100).map(|_| second.uniform_int(1, 10)).collect::<Vec<_>>();

    assert_eq!(first, second);
}

#[test]
fn can_advance_shared_generator_between_calls() {
    let random = DefaultRandom::new_with_seed(7);

    let values = (0..100).map(|_| random.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert!(values.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn can_produce_uniform_int_in_closed_range() {
    let random = DefaultRandom::new_with_seed(0);

    let values = (0..1000).map(|_| random.uniform_int(1, 10)).collect::<Vec<_>>();

    assert!(values.iter().all(|value| (1..=10).contains(value)));
    assert!(values.contains(&1));
    assert!(values.contains(&10));
    assert_eq!(random.uniform_int(5, 5), 5);
}

parameterized_test! {can_handle_probability_bounds, (probability, expected), {
    can_handle_probability_bounds_impl(probability, expected);
}}

can_handle_probability_bounds! {
    case_01_never: (0., false),
    case_02_always: (1., true),
    case_03_clamp_below: (-1., false),
    case_04_clamp_above: (2., true),
}

fn can_handle_probability_bounds_impl(probability: f64, expected: bool) {
    let random = DefaultRandom::new_with_seed(0);

    assert!((0..100).all(|_| random.is_hit(probability) == expected));
}

#[test]
fn can_hit_with_approximate_probability() {
    let random = DefaultRandom::new_with_seed(3);
    let experiments = 10000;

    let hits = (0..experiments).filter(|_| random.is_hit(0.15)).count();

    assert!((hits as f64 / experiments as f64 - 0.15).abs() < 0.02);
}
