use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::random::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_flip_only_hit_gens() {
    let random = FakeRandom::new(vec![], vec![0.1, 0.5, 0.14, 0.15]);
    let mut chromosome = create_chromosome(&[0, 0, 1, 1], 0.);

    FlipMutation::default().mutate(&mut chromosome, &random);

    assert_eq!(get_gens_as_bits(&chromosome), vec![1, 0, 0, 1]);
}

parameterized_test! {can_use_flip_rate_bounds, (flip_rate, expected), {
    can_use_flip_rate_bounds_impl(flip_rate, expected);
}}

can_use_flip_rate_bounds! {
    case_01_never: (0., vec![1, 0, 1, 0, 0]),
    case_02_always: (1., vec![0, 1, 0, 1, 1]),
}

fn can_use_flip_rate_bounds_impl(flip_rate: f64, expected: Vec<u8>) {
    let random = DefaultRandom::new_with_seed(0);
    let mut chromosome = create_chromosome(&[1, 0, 1, 0, 0], 0.);

    FlipMutation::new(flip_rate).mutate(&mut chromosome, &random);

    assert_eq!(get_gens_as_bits(&chromosome), expected);
}

#[test]
fn can_preserve_chromosome_length() {
    let random = DefaultRandom::new_with_seed(11);
    let mutation = FlipMutation::default();

    (0..10_usize).for_each(|size| {
        let mut chromosome = create_chromosome(vec![1; size].as_slice(), 0.);

        (0..20).for_each(|_| mutation.mutate(&mut chromosome, &random));

        assert_eq!(chromosome.gens.len(), size);
    });
}
