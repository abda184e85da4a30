use super::*;

fn create_state(number_of_updates: usize, convergence_counter: usize) -> AlgorithmState {
    AlgorithmState { number_of_updates, previous_fitness: 1., convergence_counter }
}

parameterized_test! {can_detect_termination, (condition, state, best_fitness, expected), {
    can_detect_termination_impl(condition, state, best_fitness, expected);
}}

can_detect_termination! {
    case_01_updates_below: (FinishCondition::NumberOfUpdates { count: 5 }, create_state(4, 4), 10., false),
    case_02_updates_equal: (FinishCondition::NumberOfUpdates { count: 5 }, create_state(5, 1), 0., true),
    case_03_updates_above: (FinishCondition::NumberOfUpdates { count: 5 }, create_state(6, 1), 0., true),
    case_04_fitness_below: (FinishCondition::RequiredFitness { threshold: 1.2 }, create_state(100, 100), 1.1, false),
    case_05_fitness_equal: (FinishCondition::RequiredFitness { threshold: 1.2 }, create_state(1, 1), 1.2, true),
    case_06_fitness_above: (FinishCondition::RequiredFitness { threshold: 1.2 }, create_state(1, 1), 2.6, true),
    case_07_streak_below: (FinishCondition::ConvergenceOfFitness { streak: 5 }, create_state(100, 4), 3., false),
    case_08_streak_equal: (FinishCondition::ConvergenceOfFitness { streak: 5 }, create_state(5, 5), 3., true),
}

fn can_detect_termination_impl(condition: FinishCondition, state: AlgorithmState, best_fitness: f64, expected: bool) {
    assert_eq!(condition.is_termination(&state, best_fitness), expected);
}

parameterized_test! {can_estimate_progress, (condition, state, best_fitness, expected), {
    can_estimate_progress_impl(condition, state, best_fitness, expected);
}}

can_estimate_progress! {
    case_01_updates: (FinishCondition::NumberOfUpdates { count: 4 }, create_state(1, 1), 0., 0.25),
    case_02_updates_capped: (FinishCondition::NumberOfUpdates { count: 4 }, create_state(8, 1), 0., 1.),
    case_03_fitness: (FinishCondition::RequiredFitness { threshold: 2. }, create_state(1, 1), 1., 0.5),
    case_04_fitness_negative: (FinishCondition::RequiredFitness { threshold: -2. }, create_state(1, 1), -5., 1.),
    case_05_streak: (FinishCondition::ConvergenceOfFitness { streak: 5 }, create_state(9, 2), 0., 0.4),
}

fn can_estimate_progress_impl(condition: FinishCondition, state: AlgorithmState, best_fitness: f64, expected: f64) {
    assert!((condition.estimate(&state, best_fitness) - expected).abs() < 1E-9);
}

parameterized_test! {can_parse_finish_condition, (value, expected), {
    can_parse_finish_condition_impl(value, expected);
}}

can_parse_finish_condition! {
    case_01: ("number-of-updates:5", Ok(FinishCondition::NumberOfUpdates { count: 5 })),
    case_02: ("required-fitness:1.2", Ok(FinishCondition::RequiredFitness { threshold: 1.2 })),
    case_03: ("convergence-of-fitness: 7", Ok(FinishCondition::ConvergenceOfFitness { streak: 7 })),
    case_04: ("max-time:5", Err("unknown finish condition type: 'max-time'".into())),
    case_05: ("convergence-of-fitness", Err("finish condition must be in '<type>:<value>' form: 'convergence-of-fitness'".into())),
    case_06: ("number-of-updates:0", Err("number of updates must be at least 1".into())),
    case_07: ("required-fitness:inf", Err("required fitness must be a finite number, got: inf".into())),
}

fn can_parse_finish_condition_impl(value: &str, expected: GenericResult<FinishCondition>) {
    assert_eq!(value.parse::<FinishCondition>(), expected);
}

#[test]
fn can_display_in_parsable_form() {
    let conditions = vec![
        FinishCondition::NumberOfUpdates { count: 3 },
        FinishCondition::RequiredFitness { threshold: 2.5 },
        FinishCondition::ConvergenceOfFitness { streak: 4 },
    ];

    conditions.into_iter().for_each(|condition| {
        assert_eq!(condition.to_string().parse::<FinishCondition>(), Ok(condition));
    });
}

#[test]
fn can_deserialize_tagged_condition() {
    let condition: FinishCondition =
        serde_json::from_str(r#"{"type":"convergence-of-fitness","streak":5}"#).expect("cannot deserialize");

    assert_eq!(condition, FinishCondition::ConvergenceOfFitness { streak: 5 });
}

#[test]
fn can_reject_unknown_condition_type() {
    let result = serde_json::from_str::<FinishCondition>(r#"{"type":"max-time","limit":5}"#);

    assert!(result.is_err());
}

#[test]
fn can_reject_parameter_of_another_strategy() {
    let result = serde_json::from_str::<FinishCondition>(r#"{"type":"convergence-of-fitness","threshold":1.5}"#);

    assert!(result.is_err());
}
