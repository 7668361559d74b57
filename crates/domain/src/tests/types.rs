// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::date;
use crate::{
    AttendanceEvent, DomainError, Entitlement, IssuancePolicy, OwnerId, Pass, PassId, PassStatus,
    PassType,
};

#[test]
fn test_pass_type_string_round_trip() {
    for pass_type in PassType::ALL {
        let parsed: PassType = pass_type.as_str().parse().unwrap();
        assert_eq!(parsed, pass_type);
        assert_eq!(pass_type.to_string(), pass_type.as_str());
    }
}

#[test]
fn test_pass_type_rejects_unknown_name() {
    let result: Result<PassType, DomainError> = "yearly".parse();
    assert_eq!(
        result,
        Err(DomainError::UnknownPassType(String::from("yearly")))
    );
}

#[test]
fn test_canonical_counts() {
    assert_eq!(PassType::SingleClass.canonical_total_classes(), Some(1));
    assert_eq!(PassType::Flexi4Classes.canonical_total_classes(), Some(4));
    assert_eq!(PassType::Flexi8Classes.canonical_total_classes(), Some(8));
    assert_eq!(PassType::Flexi8Classes.canonical_classes_per_week(), Some(2));
    assert_eq!(PassType::Monthly5Courses.canonical_total_classes(), Some(20));
    assert_eq!(PassType::FullPass.canonical_classes_per_week(), None);
    assert_eq!(PassType::FullPass.canonical_total_classes(), None);
}

#[test]
fn test_fixed_window_products() {
    assert!(!PassType::SingleClass.has_fixed_window());
    assert!(!PassType::FullPass.has_fixed_window());
    assert!(PassType::Flexi4Classes.has_fixed_window());
    assert!(PassType::Monthly1Course.has_fixed_window());
    assert!(PassType::Monthly1Course.is_tiered_monthly());
    assert!(!PassType::Flexi8Classes.is_tiered_monthly());
}

#[test]
fn test_from_purchase_fills_canonical_fields() {
    let pass: Pass = Pass::from_purchase(
        PassId::new("pass-2"),
        OwnerId::new("student-7"),
        PassType::Flexi8Classes,
        date(2025, 6, 16),
        &IssuancePolicy::default(),
    )
    .unwrap();

    assert_eq!(pass.end_date, date(2025, 7, 13));
    assert_eq!(pass.classes_per_week, 2);
    assert_eq!(pass.total_classes, 8);
    assert!(pass.is_active);
}

#[test]
fn test_weekly_cap_per_product() {
    let mut pass: Pass = Pass::new(
        PassId::new("pass-3"),
        OwnerId::new("student-1"),
        PassType::Flexi4Classes,
        date(2025, 6, 16),
        date(2025, 7, 13),
        3,
        4,
    );
    assert_eq!(pass.weekly_cap(), Some(1));

    pass.pass_type = PassType::Monthly4Courses;
    assert_eq!(pass.weekly_cap(), Some(3));

    pass.pass_type = PassType::FullPass;
    assert_eq!(pass.weekly_cap(), None);
}

#[test]
fn test_attendance_counts_only_when_present_for_pass() {
    let pass_id: PassId = PassId::new("pass-1");
    assert!(AttendanceEvent::present(pass_id.clone(), date(2025, 6, 16)).counts_against(&pass_id));
    assert!(
        !AttendanceEvent::new(Some(pass_id.clone()), date(2025, 6, 16), false)
            .counts_against(&pass_id)
    );
    assert!(!AttendanceEvent::new(None, date(2025, 6, 16), true).counts_against(&pass_id));
}

#[test]
fn test_serialized_forms() {
    let json: String = serde_json::to_string(&PassType::Monthly2Courses).unwrap();
    assert_eq!(json, "\"monthly_2_courses\"");

    let json: String = serde_json::to_string(&PassStatus::NotYetStarted).unwrap();
    assert_eq!(json, "\"not_yet_started\"");

    let json: String = serde_json::to_string(&Entitlement::Unbounded).unwrap();
    assert_eq!(json, "\"unbounded\"");

    let json: String = serde_json::to_string(&Entitlement::Count(3)).unwrap();
    assert_eq!(json, "{\"count\":3}");
}
