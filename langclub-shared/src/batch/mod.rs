//! Grouping committee members by their batch year

use crate::model::Member;

#[cfg(test)]
mod test;

/// All members of one committee, with the batch years they span
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchGroups {
    members: Vec<Member>,
    /// distinct, newest first
    years: Vec<i32>,
}

/// The members of a single batch year as they are laid out on the page
#[derive(Debug, Clone, PartialEq)]
pub struct BatchView<'a> {
    pub year: i32,
    /// The faculty in-charge, shown in the primary slot
    pub faculty: Option<&'a Member>,
    /// Everyone else, in their original order
    pub students: Vec<&'a Member>,
}
impl BatchView<'_> {
    pub fn is_empty(&self) -> bool {
        self.faculty.is_none() && self.students.is_empty()
    }
}

impl BatchGroups {
    pub fn new(members: Vec<Member>) -> Self {
        let mut years: Vec<i32> = members.iter().map(|m| m.batch_year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        Self { members, years }
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The year selected when the page opens: the most recent one
    pub fn default_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    /// Only show the year selector when there is something to choose from
    pub fn has_choice(&self) -> bool {
        self.years.len() > 1
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn members_of(&self, year: i32) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(move |m| m.batch_year == year)
    }

    pub fn view(&self, year: i32) -> BatchView<'_> {
        let in_year: Vec<&Member> = self.members_of(year).collect();
        let faculty_pos = in_year.iter().position(|m| m.is_faculty());
        let faculty = faculty_pos.map(|idx| in_year[idx]);
        let students = in_year
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != faculty_pos)
            .map(|(_, m)| *m)
            .collect();
        BatchView {
            year,
            faculty,
            students,
        }
    }
}
