use std::cell::Cell;

use fallible::{Completion, ErrorBox, Failure, Result, Success};
use proptest::prelude::*;

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Success),
        "[a-z]{0,8}".prop_map(Failure),
    ]
}

proptest! {
    #[test]
    fn has_value_matches_alternative(r in result_strategy()) {
        prop_assert_eq!(r.has_value(), matches!(r, Success(_)));
        prop_assert_eq!(r.has_value(), !r.has_error());
    }

    #[test]
    fn value_round_trips(v in any::<i32>()) {
        let r: Result<i32, String> = Result::new(v);
        prop_assert_eq!(*r.value(), v);
    }

    #[test]
    fn error_round_trips(e in "[a-z]{0,8}") {
        let r: Result<i32, String> = ErrorBox::new(e.clone()).into();
        prop_assert_eq!(r.error(), &e);
    }

    #[test]
    fn value_or_prefers_held_payload(r in result_strategy(), d in any::<i32>()) {
        let expected = match &r {
            Success(v) => *v,
            Failure(_) => d,
        };
        prop_assert_eq!(r.value_or_ref(d), expected);
        prop_assert_eq!(r.value_or(d), expected);
    }

    #[test]
    fn and_then_short_circuits(e in "[a-z]{0,8}") {
        let invoked = Cell::new(false);
        let r: Result<i32, String> = Failure(e.clone());
        let out = r.and_then(|x| -> Result<i64, String> {
            invoked.set(true);
            Success(i64::from(x))
        });
        prop_assert_eq!(out, Failure(e));
        prop_assert!(!invoked.get());
    }

    #[test]
    fn transform_is_identity_on_error(e in "[a-z]{0,8}") {
        let r: Result<i32, String> = Failure(e.clone());
        prop_assert_eq!(r.transform_ref(|x| x.wrapping_mul(3)), Failure(e.clone()));
        prop_assert_eq!(r.transform(|x| i64::from(x) + 1), Failure(e));
    }

    #[test]
    fn transform_error_is_identity_on_success(v in any::<i32>()) {
        let r: Result<i32, String> = Success(v);
        prop_assert_eq!(r.transform_error_ref(String::len), Success(v));
        prop_assert_eq!(r.transform_error(|e| e.into_bytes()), Success(v));
    }

    #[test]
    fn assign_always_lands_in_success(r in result_strategy(), v in any::<i32>()) {
        let mut r = r;
        r.assign(v);
        prop_assert_eq!(r, Success(v));
    }

    #[test]
    fn completion_mirrors_unit_result(r in prop_oneof![
        Just(Success(())),
        "[a-z]{0,8}".prop_map(Failure),
    ]) {
        let r: Result<(), String> = r;
        let c = Completion::from(r.clone());
        prop_assert_eq!(c.has_value(), r.has_value());
        prop_assert_eq!(Result::from(c), r);
    }
}
