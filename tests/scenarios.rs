//! End-to-end validation scenarios
//!
//! Covers flat, nested and sequence-heavy records through the public API.

use fieldcheck::prelude::*;
use fieldcheck::{assert_invalid, assert_valid};
use std::borrow::Cow;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

struct Person {
    name: String,
    age: i32,
}

describe_record!(Person {
    #[tag = "json:\"name\""]
    name,
    #[tag = "json:\"age\""]
    age,
});

struct Tags {
    tags: Vec<String>,
}

describe_record!(Tags { tags });

struct Inner {
    score: i64,
}

describe_record!(Inner { score });

struct Outer {
    inner: Inner,
}

describe_record!(Outer { inner });

struct Flag {
    flag: bool,
}

describe_record!(Flag { flag });

#[test]
fn empty_name_is_string_empty() {
    let person = Person {
        name: String::new(),
        age: 5,
    };
    assert_invalid!(validate(&person, false), ErrorKind::StringEmpty, "name");
}

#[test]
fn zero_age_is_number_zero() {
    let person = Person {
        name: "Ann".to_string(),
        age: 0,
    };
    let err = validate(&person, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumberZero);
    assert_eq!(err.field(), "age");
    assert_eq!(err.tag(), "json:\"age\"");
    assert_eq!(err.to_string(), "field: age {json:\"age\"}: number is zero");
}

#[test]
fn empty_tags_is_list_empty() {
    let value = Tags { tags: vec![] };
    assert_invalid!(validate(&value, false), ErrorKind::ListEmpty, "tags");
}

#[test]
fn nested_zero_score_reports_inner_field() {
    let value = Outer {
        inner: Inner { score: 0 },
    };
    let err = validate(&value, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumberZero);
    assert_eq!(err.field(), "score");
    assert_eq!(err.dotted_path(), "inner.score");
    assert_eq!(
        err.to_string(),
        "field: score {}: number is zero\n  -> in inner"
    );
}

#[test]
fn lone_false_flag_is_valid() {
    assert_valid!(validate(&Flag { flag: false }, false));
}

#[test]
fn negative_numbers_are_valid() {
    let person = Person {
        name: "Bo".to_string(),
        age: -3,
    };
    assert_valid!(validate(&person, false));
}

struct Everything {
    text: &'static str,
    cow: Cow<'static, str>,
    tiny: i8,
    huge: u128,
    size: usize,
    ratio: f64,
    small_ratio: f32,
    on: bool,
    list: Vec<u16>,
    array: [i32; 3],
    queue: VecDeque<String>,
    boxed: Box<Inner>,
    shared: Rc<String>,
    atomic: Arc<Vec<u8>>,
}

describe_record!(Everything {
    text,
    cow,
    tiny,
    huge,
    size,
    ratio,
    small_ratio,
    on,
    list,
    array,
    queue,
    boxed,
    shared,
    atomic,
});

fn everything() -> Everything {
    Everything {
        text: "t",
        cow: Cow::Borrowed("c"),
        tiny: -1,
        huge: u128::MAX,
        size: 1,
        ratio: 0.25,
        small_ratio: 1.5,
        on: false,
        list: vec![1, 2],
        array: [1, -1, 2],
        queue: VecDeque::from(vec!["q".to_string()]),
        boxed: Box::new(Inner { score: 9 }),
        shared: Rc::new("s".to_string()),
        atomic: Arc::new(vec![1]),
    }
}

#[test]
fn fully_populated_record_is_valid() {
    assert_valid!(validate(&everything(), false));
}

#[test]
fn each_field_kind_reports_its_own_failure() {
    let mut value = everything();
    value.cow = Cow::Owned(String::new());
    assert_invalid!(validate(&value, false), ErrorKind::StringEmpty, "cow");

    let mut value = everything();
    value.small_ratio = 0.0;
    assert_invalid!(validate(&value, false), ErrorKind::NumberZero, "small_ratio");

    let mut value = everything();
    value.array = [1, 0, 2];
    let err = validate(&value, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumberZero);
    assert_eq!(err.field(), "array");
    assert_eq!(err.index(), Some(1));

    let mut value = everything();
    value.queue.clear();
    assert_invalid!(validate(&value, false), ErrorKind::ListEmpty, "queue");

    let mut value = everything();
    value.boxed = Box::new(Inner { score: 0 });
    let err = validate(&value, false).unwrap_err();
    assert_eq!(err.dotted_path(), "boxed.score");

    let mut value = everything();
    value.shared = Rc::new(String::new());
    assert_invalid!(validate(&value, false), ErrorKind::StringEmpty, "shared");
}

struct Service {
    name: String,
    labels: BTreeMap<String, String>,
    fallback: Option<String>,
    port: u16,
}

describe_record!(Service {
    name,
    #[tag = "yaml:\"labels\""]
    labels,
    fallback,
    port,
});

#[test]
fn unsupported_fields_follow_policy() {
    let service = Service {
        name: "api".to_string(),
        labels: BTreeMap::new(),
        fallback: None,
        port: 8080,
    };

    let err = validate(&service, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    assert_eq!(err.field(), "labels");
    assert_eq!(err.tag(), "yaml:\"labels\"");
    assert_eq!(
        err.to_string(),
        "field: labels {yaml:\"labels\"}: this type is not handled"
    );

    assert_valid!(validate(&service, true));
}

#[test]
fn lenient_mode_does_not_hide_other_failures() {
    let service = Service {
        name: "api".to_string(),
        labels: BTreeMap::new(),
        fallback: Some("x".to_string()),
        port: 0,
    };
    assert_invalid!(validate(&service, true), ErrorKind::NumberZero, "port");
}

#[test]
fn non_record_values_are_rejected() {
    assert_invalid!(validate("text", false), ErrorKind::NotARecord);
    assert_invalid!(validate(&3.5f64, true), ErrorKind::NotARecord);
    assert_invalid!(validate(&vec![1, 2], false), ErrorKind::NotARecord);
    assert_invalid!(validate(&None::<Person>, true), ErrorKind::NotARecord);
}

#[test]
fn hand_built_records_validate_like_derived_ones() {
    let name = String::from("Ann");
    let age = 0u8;
    let record = Record::new("Person")
        .field("Name", "", &name)
        .field("Age", "json:\"age\"", &age);

    assert_invalid!(Validator::new().validate(&record), ErrorKind::NumberZero, "Age");
}

struct Level3 {
    value: u8,
}

struct Level2 {
    label: String,
    level3: Level3,
}

struct Level1 {
    level2: Level2,
}

describe_record!(Level3 { value });
describe_record!(Level2 { label, level3 });
describe_record!(Level1 { level2 });

#[test]
fn deep_nesting_reports_full_path() {
    let value = Level1 {
        level2: Level2 {
            label: "l".to_string(),
            level3: Level3 { value: 0 },
        },
    };
    let err = validate(&value, false).unwrap_err();
    assert_eq!(err.field(), "value");
    assert_eq!(err.path(), &["level3", "level2"]);
    assert_eq!(err.dotted_path(), "level2.level3.value");
}

#[test]
fn depth_limit_applies_to_real_records() {
    let value = Level1 {
        level2: Level2 {
            label: "l".to_string(),
            level3: Level3 { value: 1 },
        },
    };
    assert_valid!(Validator::new().max_depth(2).validate(&value));

    let err = Validator::new().max_depth(1).validate(&value).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DepthExceeded);
    assert_eq!(err.dotted_path(), "level2.level3");
}

struct Batch {
    ratios: Vec<f32>,
    flags: Vec<bool>,
    people: Vec<Person>,
}

describe_record!(Batch {
    ratios,
    flags,
    people
});

#[test]
fn shallow_element_check_only_looks_at_strings_and_integers() {
    let batch = Batch {
        ratios: vec![0.0],
        flags: vec![false],
        people: vec![Person {
            name: String::new(),
            age: 0,
        }],
    };
    assert_valid!(validate(&batch, false));
}

#[test]
fn recursive_element_check_inspects_every_element() {
    let validator = Validator::new().element_check(ElementCheck::Recursive);

    let batch = Batch {
        ratios: vec![0.5, 0.0],
        flags: vec![false],
        people: vec![],
    };
    let err = validator.validate(&batch).unwrap_err();
    assert_eq!(err.field(), "ratios");
    assert_eq!(err.index(), Some(1));

    let batch = Batch {
        ratios: vec![0.5],
        flags: vec![false, true],
        people: vec![
            Person {
                name: "a".to_string(),
                age: 1,
            },
            Person {
                name: String::new(),
                age: 1,
            },
        ],
    };
    let err = validator.validate(&batch).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StringEmpty);
    assert_eq!(err.field(), "name");
    assert_eq!(err.dotted_path(), "people[1].name");
}

#[test]
fn validator_built_from_options() {
    let options = Options {
        ignore_unsupported_types: true,
        ..Options::default()
    };
    let service = Service {
        name: "api".to_string(),
        labels: BTreeMap::new(),
        fallback: None,
        port: 1,
    };
    assert_valid!(Validator::with_options(options).validate(&service));
    assert_valid!(Validator::with_options(Options::lenient()).validate(&service));
}
