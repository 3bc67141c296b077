use differences::*;
use env_logger::Env;
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::Builder::from_env(Env::default())
        .is_test(true)
        .try_init();
}

fn engines() -> Vec<DiffOptions> {
    let mut myers = DiffOptions::new();
    myers.set_algorithm(Algorithm::Myers);
    vec![DiffOptions::new(), myers]
}

proptest! {
    #[test]
    fn test_round_trip_lines(
        old in prop::collection::vec("[a-c]{0,3}", 0..15),
        new in prop::collection::vec("[a-c]{0,3}", 0..15),
    ) {
        init_logger();
        let old_text = old.join("\n");
        let new_text = new.join("\n");
        let result = compare_lines(&old_text, &new_text);
        prop_assert_eq!(restore_older(&result).join("\n"), old_text.as_str());
        prop_assert_eq!(restore_newer(&result).join("\n"), new_text.as_str());
    }

    #[test]
    fn test_engines_round_trip(
        old in prop::collection::vec(any::<i32>().prop_map(|i| i % 3), 0..30),
        new in prop::collection::vec(any::<i32>().prop_map(|i| i % 3), 0..30),
    ) {
        let expected = edit_distance(&old, &new);
        for options in engines() {
            let result = options.compare(&old, &new).unwrap();
            prop_assert_eq!(restore_older(&result), old.clone());
            prop_assert_eq!(restore_newer(&result), new.clone());
            prop_assert_eq!(options.edit_distance(&old, &new), Ok(expected));
        }
    }

    #[test]
    fn test_limit_is_tight(
        old in prop::collection::vec(0u8..3, 0..20),
        new in prop::collection::vec(0u8..3, 0..20),
    ) {
        let d = edit_distance(&old, &new);
        for mut options in engines() {
            options.set_max_edit_distance(d);
            prop_assert!(options.compare(&old, &new).is_ok());
            if d > 0 {
                options.set_max_edit_distance(d - 1);
                prop_assert_eq!(
                    options.compare(&old, &new),
                    Err(Error::EditLimitExceeded { limit: d - 1 })
                );
            }
        }
    }
}

#[test]
fn test_line_diff_of_a_file() {
    init_logger();
    let old = "fn main() {\n    println!(\"hi\");\n}\n";
    let new = "fn main() {\n    let name = \"you\";\n    println!(\"hi {name}\");\n}\n";
    let result = compare_lines(old, new);
    let conditions: Vec<_> = result.iter().map(Difference::condition).collect();
    assert_eq!(
        conditions,
        vec![Condition::Unchanged, Condition::Changed, Condition::Unchanged]
    );
    assert_eq!(result[1].older(), Some(&["    println!(\"hi\");"][..]));
    assert_eq!(
        result[1].newer(),
        Some(&["    let name = \"you\";", "    println!(\"hi {name}\");"][..])
    );
    assert_eq!(result[2].older(), Some(&["}", ""][..]));
}

#[test]
fn test_large_similar_inputs() {
    init_logger();
    let old: Vec<u32> = (0..20_000).collect();
    let mut new = old.clone();
    new.remove(10);
    new.insert(15_000, 99_999);
    new[19_000] = 7;

    let result = compare(&old, &new);
    assert_eq!(edit_distance(&old, &new), 4);
    assert_eq!(restore_older(&result), old);
    assert_eq!(restore_newer(&result), new);
    let conditions: Vec<_> = result.iter().map(Difference::condition).collect();
    assert_eq!(
        conditions,
        vec![
            Condition::Unchanged,
            Condition::Deleted,
            Condition::Unchanged,
            Condition::Inserted,
            Condition::Unchanged,
            Condition::Changed,
            Condition::Unchanged,
        ]
    );
}

#[test]
fn test_options_reject_distant_inputs() {
    let old: Vec<u32> = (0..5_000).collect();
    let new: Vec<u32> = (5_000..10_000).collect();
    let mut options = DiffOptions::new();
    options.set_max_edit_distance(100);
    assert_eq!(
        options.compare(&old, &new),
        Err(Error::EditLimitExceeded { limit: 100 })
    );
}

#[test]
fn test_try_compare() {
    let old = ['a', 'b'];
    let result = try_compare(Some(&old[..]), Some(&['a', 'c'][..])).unwrap();
    assert_eq!(result.len(), 2);
    let err = try_compare::<char>(Some(&old[..]), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument: newer sequence is absent");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip() {
    let result = compare_chars("Hello, world.", "Hello, sunset.");
    let json = serde_json::to_string(&result).unwrap();
    let back: Differences<char> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    let condition: Condition = serde_json::from_str("\"Changed\"").unwrap();
    assert_eq!(condition, Condition::Changed);

    let mut options = DiffOptions::new();
    options.set_algorithm(Algorithm::Myers).set_max_edit_distance(8);
    let json = serde_json::to_string(&options).unwrap();
    let back: DiffOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
    assert_eq!(back.algorithm(), Algorithm::Myers);
    assert_eq!(back.max_edit_distance(), Some(8));
}
