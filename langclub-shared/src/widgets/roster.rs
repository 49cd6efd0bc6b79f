/// Number of rows the club roster shows at first and adds per "show more"
pub const ROSTER_PAGE_SIZE: usize = 10;

/// How many rows of a long table are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roster {
    total: usize,
    visible: usize,
    step: usize,
}
impl Roster {
    pub fn new(total: usize, step: usize) -> Self {
        let step = step.max(1);
        Self {
            total,
            visible: step.min(total),
            step,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn show_more(&mut self) {
        self.visible = (self.visible + self.step).min(self.total);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reveals_step_by_step_and_clamps() {
        let mut roster = Roster::new(25, 10);
        assert_eq!(roster.visible(), 10);
        roster.show_more();
        assert_eq!(roster.visible(), 20);
        assert!(roster.has_more());
        roster.show_more();
        assert_eq!(roster.visible(), 25);
        assert!(!roster.has_more());
        roster.show_more();
        assert_eq!(roster.visible(), 25);
    }

    #[test]
    fn short_tables_are_fully_visible() {
        let roster = Roster::new(3, ROSTER_PAGE_SIZE);
        assert_eq!(roster.visible(), 3);
        assert!(!roster.has_more());
        assert_eq!(Roster::new(0, ROSTER_PAGE_SIZE).visible(), 0);
    }

    #[test]
    fn zero_step_still_progresses() {
        let mut roster = Roster::new(2, 0);
        assert_eq!(roster.visible(), 1);
        roster.show_more();
        assert_eq!(roster.visible(), 2);
    }
}
