use proptest::prelude::*;
use proptest::test_runner::Config;

use super::*;
use crate::FACULTY_ROLE;

fn member(id: i64, year: i32, role: &str) -> Member {
    Member {
        id,
        name: format!("member {id}"),
        role: role.to_string(),
        batch_year: year,
        roll_no: None,
        branch: None,
        image_url: None,
        linkedin_url: None,
        order_index: id as i32,
    }
}

fn ids(members: &[&Member]) -> Vec<i64> {
    members.iter().map(|m| m.id).collect()
}

#[test]
fn years_are_descending_and_distinct() {
    let groups = BatchGroups::new(vec![
        member(1, 2023, "Secretary"),
        member(2, 2024, "President"),
        member(3, 2025, "Treasurer"),
        member(4, 2024, "Member"),
        member(5, 2023, "Member"),
    ]);
    assert_eq!(groups.years(), &[2025, 2024, 2023]);
    assert_eq!(groups.default_year(), Some(2025));
    assert!(groups.has_choice());
}

#[test]
fn selecting_a_year_filters_and_keeps_order() {
    let groups = BatchGroups::new(vec![
        member(1, 2024, "President"),
        member(2, 2023, "President"),
        member(3, 2024, "Secretary"),
        member(4, 2024, "Member"),
    ]);
    let view = groups.view(2024);
    assert_eq!(view.year, 2024);
    assert!(view.faculty.is_none());
    assert_eq!(ids(&view.students), vec![1, 3, 4]);

    let view = groups.view(2023);
    assert_eq!(ids(&view.students), vec![2]);
}

#[test]
fn faculty_takes_the_primary_slot() {
    let groups = BatchGroups::new(vec![
        member(1, 2025, "President"),
        member(2, 2025, FACULTY_ROLE),
        member(3, 2025, "Secretary"),
    ]);
    let view = groups.view(2025);
    assert_eq!(view.faculty.map(|m| m.id), Some(2));
    assert_eq!(ids(&view.students), vec![1, 3]);
}

#[test]
fn a_second_faculty_member_stays_in_the_grid() {
    let groups = BatchGroups::new(vec![
        member(1, 2025, FACULTY_ROLE),
        member(2, 2025, FACULTY_ROLE),
    ]);
    let view = groups.view(2025);
    assert_eq!(view.faculty.map(|m| m.id), Some(1));
    assert_eq!(ids(&view.students), vec![2]);
}

#[test]
fn no_members_no_years() {
    let groups = BatchGroups::new(vec![]);
    assert_eq!(groups.default_year(), None);
    assert!(!groups.has_choice());
    assert!(groups.view(2025).is_empty());
}

#[test]
fn single_year_has_no_choice() {
    let groups = BatchGroups::new(vec![member(1, 2024, "President")]);
    assert!(!groups.has_choice());
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn every_member_lands_in_exactly_one_view(
        years in prop::collection::vec(2015_i32..2030_i32, 0..30),
        faculty_at in prop::option::of(0_usize..30),
    ) {
        let members: Vec<_> = years
            .iter()
            .enumerate()
            .map(|(i, y)| {
                let role = if Some(i) == faculty_at { FACULTY_ROLE } else { "Member" };
                member(i as i64, *y, role)
            })
            .collect();
        let groups = BatchGroups::new(members.clone());
        prop_assert!(groups.years().windows(2).all(|w| w[0] > w[1]));

        let mut seen = Vec::new();
        for year in groups.years() {
            let view = groups.view(*year);
            seen.extend(view.faculty.map(|m| m.id));
            let student_ids = ids(&view.students);
            prop_assert!(student_ids.windows(2).all(|w| w[0] < w[1]));
            seen.extend(student_ids);
        }
        seen.sort_unstable();
        prop_assert_eq!(seen, members.iter().map(|m| m.id).collect::<Vec<_>>());
    }
}
