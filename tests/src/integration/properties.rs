//! # Properties
//!
//! - Sequential correctness: the final value is the initial value plus the
//!   signed sum of every applied operand, in submission order.
//! - Zero is the identity for both operations.
//! - Rejected calls never change the stored value.

use super::fixtures::{calc_session, stored_value};
use cc_harness::prelude::*;
use proptest::prelude::*;

fn op_strategy() -> impl Strategy<Value = (bool, i64)> {
    (any::<bool>(), -1_000_000i64..1_000_000)
}

fn malformed_args() -> impl Strategy<Value = Vec<String>> {
    prop_oneof![
        // non-numeric operand
        "[a-z]{1,8}".prop_map(|s| vec!["invoke".to_string(), "add".to_string(), s]),
        // unknown keyword
        ("(multiply|divide|mod|ADD)", -100i64..100)
            .prop_map(|(op, n)| vec!["invoke".to_string(), op, n.to_string()]),
        // wrong arity
        Just(vec!["invoke".to_string(), "subtract".to_string()]),
        Just(vec![
            "invoke".to_string(),
            "add".to_string(),
            "1".to_string(),
            "2".to_string(),
        ]),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sequential_sum(
        initial in -1_000_000i64..1_000_000,
        ops in prop::collection::vec(op_strategy(), 0..20)
    ) {
        let mut session = calc_session(initial).unwrap();
        let mut expected = initial;

        for (i, (is_add, operand)) in ops.iter().enumerate() {
            let keyword = if *is_add { "add" } else { "subtract" };
            expected = if *is_add { expected + operand } else { expected - operand };

            let args = encode_args("invoke", [keyword.to_string(), operand.to_string()]);
            let response = session.expect_value(&format!("Tx{i}"), args, expected).unwrap();
            prop_assert_eq!(decode_payload(&response.payload).unwrap(), expected);
        }

        prop_assert_eq!(stored_value(&session), Some(expected));
    }

    #[test]
    fn prop_zero_is_identity(initial in any::<i64>(), is_add in any::<bool>()) {
        let mut session = calc_session(initial).unwrap();
        let keyword = if is_add { "add" } else { "subtract" };
        session
            .expect_value("TxZero", encode_args("invoke", [keyword, "0"]), initial)
            .unwrap();
        prop_assert_eq!(stored_value(&session), Some(initial));
    }

    #[test]
    fn prop_rejected_calls_do_not_mutate(initial in -1_000i64..1_000, args in malformed_args()) {
        let mut session = calc_session(initial).unwrap();
        let function = args[0].clone();
        let response = session.submit("TxBad", encode_args(&function, &args[1..]));

        prop_assert!(!response.is_ok());
        prop_assert!(response.payload.is_empty());
        prop_assert_eq!(stored_value(&session), Some(initial));
    }
}
