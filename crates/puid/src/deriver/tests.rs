use super::*;

fn map(pairs: &[(&str, &str)]) -> PrefixMap {
    pairs
        .iter()
        .map(|&(p, n)| (p.to_owned(), n.to_owned()))
        .collect()
}

#[test]
fn generates_valid_prefixes_for_unique_lowercase_models() {
    let result = derive_prefixes(&["account", "invoice", "invite", "session"]).unwrap();
    assert_eq!(
        result,
        map(&[
            ("acc", "account"),
            ("inv", "invoice"),
            ("ivt", "invite"),
            ("ssn", "session"),
        ])
    );
}

#[test]
fn handles_single_model_input() {
    assert_eq!(derive_prefixes(&["task"]).unwrap(), map(&[("tsk", "task")]));
}

#[test]
fn handles_empty_input() {
    let empty: [&str; 0] = [];
    assert!(derive_prefixes(&empty).unwrap().is_empty());
}

#[test]
fn accepts_owned_names() {
    let names = vec![String::from("user"), String::from("post")];
    assert_eq!(
        derive_prefixes(names.as_slice()).unwrap(),
        map(&[("usr", "user"), ("pst", "post")])
    );
}

#[test]
fn reports_every_duplicate_occurrence() {
    assert_eq!(
        derive_prefixes(&["user", "post", "user"]).unwrap_err(),
        Error::DuplicateModelNames {
            names: vec!["user".into()],
        }
    );
    assert_eq!(
        derive_prefixes(&["user", "user", "post", "user", "post"]).unwrap_err(),
        Error::DuplicateModelNames {
            names: vec!["user".into(), "user".into(), "post".into()],
        }
    );
}

#[test]
fn reports_every_invalid_name() {
    assert_eq!(
        derive_prefixes(&["User", "post123", "comment-test"]).unwrap_err(),
        Error::InvalidModelNames {
            names: vec!["User".into(), "post123".into(), "comment-test".into()],
        }
    );
}

#[test]
fn invalid_names_take_precedence_over_duplicates() {
    assert_eq!(
        derive_prefixes(&["user", "user", "User"]).unwrap_err(),
        Error::InvalidModelNames {
            names: vec!["User".into()],
        }
    );
}

#[test]
fn rejects_models_exceeding_length_limit() {
    let long = "a".repeat(101);
    assert_eq!(
        derive_prefixes(&[long.as_str()]).unwrap_err(),
        Error::InvalidModelNames { names: vec![long] }
    );
    let longest = "b".repeat(100);
    assert!(derive_prefixes(&[longest.as_str()]).is_ok());
}

#[test]
fn rejects_empty_name_as_invalid() {
    assert_eq!(
        derive_prefixes(&[""]).unwrap_err(),
        Error::InvalidModelNames {
            names: vec![String::new()],
        }
    );
}

#[test]
fn short_names_pass_the_batch_check_but_fail_derivation() {
    assert_eq!(
        derive_prefixes(&["user", "ab"]).unwrap_err(),
        Error::ModelNameTooShort { name: "ab".into() }
    );
}

#[test]
fn collisions_fall_through_the_heuristics() {
    assert_eq!(
        derive_prefixes(&["session", "sessions", "sessionx"]).unwrap(),
        map(&[("ssn", "session"), ("sss", "sessions"), ("ses", "sessionx")])
    );
    assert_eq!(
        derive_prefixes(&["setup", "settings", "setting"]).unwrap(),
        map(&[("stp", "setup"), ("stt", "settings"), ("set", "setting")])
    );
}

#[test]
fn three_letter_names_keep_themselves() {
    assert_eq!(
        derive_prefixes(&["user", "post", "comment", "setup", "mfa"]).unwrap(),
        map(&[
            ("usr", "user"),
            ("pst", "post"),
            ("cmm", "comment"),
            ("stp", "setup"),
            ("mfa", "mfa"),
        ])
    );
}

#[test]
fn exhausts_when_every_candidate_is_taken() {
    assert_eq!(
        derive_prefixes(&["abc", "abcd", "abcde"]).unwrap_err(),
        Error::PrefixExhausted {
            name: "abcde".into()
        }
    );
    assert_eq!(
        derive_prefixes(&["invoice", "invite", "inventory", "invitation"]).unwrap_err(),
        Error::PrefixExhausted {
            name: "invitation".into()
        }
    );
}

#[test]
fn short_candidate_is_an_invariant_violation() {
    // Neither sparse heuristic finds a consonant, and the fourth heuristic
    // then produces a single letter.
    assert_eq!(
        derive_prefixes(&["baaa"]).unwrap_err(),
        Error::HeuristicInvariantViolation {
            name: "baaa".into(),
            prefix: "b".into(),
            heuristic: 4,
        }
    );
}

#[test]
fn derivation_is_deterministic() {
    let names = ["user", "users", "usera", "userb", "userc", "userd", "usere"];
    let first = derive_prefixes(&names).unwrap();
    let second = derive_prefixes(&names).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), names.len());
    assert!(first.keys().all(|p| is_prefix(p)));
    assert_eq!(
        first,
        map(&[
            ("usr", "user"),
            ("urs", "users"),
            ("urr", "usera"),
            ("urb", "userb"),
            ("urc", "userc"),
            ("urd", "userd"),
            ("use", "usere"),
        ])
    );
}

#[test]
fn derive_prefix_extends_an_existing_assignment() {
    let assigned = derive_prefixes(&["invoice"]).unwrap();
    assert_eq!(derive_prefix("invite", &assigned).unwrap(), "ivt");
    assert_eq!(
        derive_prefix("Invite", &assigned).unwrap_err(),
        Error::InvalidModelNames {
            names: vec!["Invite".into()]
        }
    );
}
