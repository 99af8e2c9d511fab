//! End-to-end checks over a nested struct hierarchy.

mod common;

use common::{Education, at, bob, hera};
use pretty_assertions::assert_eq;
use rstest::rstest;
use validate::prelude::*;

// ============================================================================
// FAILURE
// ============================================================================

#[test]
fn every_failure_is_reported_in_declaration_order() {
    let employee = bob();
    let err = employee.validate().unwrap_err();

    insta::assert_snapshot!(
        err.render(),
        @"8 errors: [name(Bob) not in [Zeus, Hera]; age(101) not in [35, 55]; color wrong value(orange), expected([red, green, blue]); 1 errors: [(Berkeley) not in [KAIST, Stanford]]; salary(256.99) above maximum (123.456); birthday(1984-01-01 00:00:00 UTC) is not after (1984-01-01 00:00:00 UTC); vacation_start(2025-01-01 00:00:00 UTC) is not before (2024-01-01 00:00:00 UTC); 1 errors: [skills(0) length below minimum (1)]]"
    );
}

#[test]
fn failure_structure() {
    let employee = bob();
    let err = employee.validate().unwrap_err();
    let set = err.as_set().unwrap();

    let kinds: Vec<Option<ViolationKind>> = set.iter().map(ValidationError::kind).collect();
    assert_eq!(
        kinds,
        [
            Some(ViolationKind::NotInSet),
            Some(ViolationKind::NotInSet),
            None, // ad hoc color message
            None, // nested education set
            Some(ViolationKind::AboveMax),
            Some(ViolationKind::NotAfter),
            Some(ViolationKind::NotBefore),
            None, // skills min/max set
        ]
    );

    let education = &set.errors()[3];
    assert!(education.is_set());
    assert_eq!(education.as_set().unwrap().len(), 1);
    assert_eq!(err.count(), 8);
}

#[test]
fn age_minimum_contributes_nothing() {
    let employee = bob();
    let err = employee.validate().unwrap_err();
    let below_min = err
        .violations()
        .iter()
        .filter(|v| v.kind() == Some(ViolationKind::BelowMin))
        .count();
    assert_eq!(below_min, 0);
}

#[test]
fn minimal_scenario() {
    let mut employee = hera();
    employee.name = "Bob".into();
    employee.age = 101;
    employee.salary = 256.99;
    employee.education.school = "Berkeley".into();

    let err = employee.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "4 errors: [name(Bob) not in [Zeus, Hera]; age(101) not in [35, 55]; \
         1 errors: [(Berkeley) not in [KAIST, Stanford]]; salary(256.99) above maximum (123.456)]"
    );
}

#[test]
fn composite_may_return_a_single_ad_hoc_failure() {
    let education = Education {
        duration: 22,
        school: "Nowhere".into(),
    };
    let err = education.validate().unwrap_err();
    assert!(!err.is_set());
    assert_eq!(err.to_string(), "my special error");
}

#[test]
fn render_is_idempotent() {
    let employee = bob();
    let err = employee.validate().unwrap_err();
    assert_eq!(err.render(), err.render());
    assert_eq!(err.to_string(), err.render());
}

#[test]
fn validation_is_repeatable() {
    let employee = bob();
    let first = employee.validate().unwrap_err().render();
    let second = employee.validate().unwrap_err().render();
    assert_eq!(first, second);
}

// ============================================================================
// SUCCESS
// ============================================================================

#[test]
fn valid_employee_passes() {
    assert!(hera().validate().is_ok());
    assert!(hera().is_valid());
}

#[rstest]
#[case(2023, true)]
#[case(2024, false)]
fn vacation_boundary(#[case] year: i32, #[case] ok: bool) {
    let mut employee = hera();
    employee.vacation_start = at(year);
    assert_eq!(employee.is_valid(), ok);
}

#[rstest]
#[case(123.456, true)]
#[case(123.4561, false)]
fn salary_boundary(#[case] salary: f64, #[case] ok: bool) {
    let mut employee = hera();
    employee.salary = salary;
    assert_eq!(employee.is_valid(), ok);
}

// ============================================================================
// COLLECTIONS OF COMPOSITES
// ============================================================================

#[test]
fn teams_nest_one_level_per_composite() {
    let team = vec![hera(), bob(), hera()];
    let err = team.validate().unwrap_err();

    let set = err.as_set().unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.errors()[0].as_set().unwrap().len(), 8);
}

#[test]
fn each_over_references() {
    let team = [hera(), hera()];
    assert!(each(&team).is_ok());
}

// ============================================================================
// REPORT
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn json_report_of_nested_failure() {
    let employee = Education {
        duration: 3,
        school: "Berkeley".into(),
    };
    let json = employee.validate().unwrap_err().to_json_value().unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "code": "all",
            "message": "2 errors",
            "nested": [
                { "code": "below_min", "message": "(3) below minimum (10)" },
                { "code": "not_in_set", "message": "(Berkeley) not in [KAIST, Stanford]" },
            ],
        })
    );
}

#[test]
fn report_outlives_the_checked_value() {
    let report = {
        let employee = bob();
        employee.validate().unwrap_err().to_report()
    };
    assert_eq!(report.leaf_count(), 8);
    assert_eq!(report.nested[0].field.as_deref(), Some("name"));
}
