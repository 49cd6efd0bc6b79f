/// Selection state of the auto-scrolling member strip.
///
/// The strip renders its members twice so the CSS scroll can loop; the selection always refers to
/// the original index. A timer advances the selection; a click selects directly and holds the
/// auto-advance for `cooldown_ticks` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberCarousel {
    len: usize,
    selected: Option<usize>,
    cooldown_ticks: u32,
    paused_for: u32,
}
impl MemberCarousel {
    pub fn new(len: usize, cooldown_ticks: u32) -> Self {
        Self {
            len,
            selected: if len > 0 { Some(0) } else { None },
            cooldown_ticks,
            paused_for: 0,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_paused(&self) -> bool {
        self.paused_for > 0
    }

    /// Indices to render, end to end, for the infinite-scroll illusion
    pub fn looped_indices(&self) -> impl Iterator<Item = usize> {
        (0..self.len).chain(0..self.len)
    }

    /// A click on any copy of a member
    pub fn select(&mut self, idx: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(idx % self.len);
        self.paused_for = self.cooldown_ticks;
    }

    /// Timer tick: advance unless a recent click holds us
    pub fn tick(&mut self) {
        if self.paused_for > 0 {
            self.paused_for -= 1;
            return;
        }
        if let Some(current) = self.selected {
            self.selected = Some((current + 1) % self.len);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_has_no_selection() {
        let mut carousel = MemberCarousel::new(0, 2);
        carousel.tick();
        carousel.select(1);
        assert_eq!(carousel.selected(), None);
        assert_eq!(carousel.looped_indices().count(), 0);
    }

    #[test]
    fn first_member_selected_by_default() {
        assert_eq!(MemberCarousel::new(3, 2).selected(), Some(0));
    }

    #[test]
    fn renders_list_twice() {
        let carousel = MemberCarousel::new(3, 2);
        assert_eq!(
            carousel.looped_indices().collect::<Vec<_>>(),
            vec![0, 1, 2, 0, 1, 2]
        );
    }

    #[test]
    fn tick_advances_and_wraps() {
        let mut carousel = MemberCarousel::new(2, 2);
        carousel.tick();
        assert_eq!(carousel.selected(), Some(1));
        carousel.tick();
        assert_eq!(carousel.selected(), Some(0));
    }

    #[test]
    fn click_holds_for_exactly_the_cooldown() {
        let mut carousel = MemberCarousel::new(5, 2);
        // a click on the second copy of member 3
        carousel.select(8);
        assert_eq!(carousel.selected(), Some(3));
        assert!(carousel.is_paused());
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.selected(), Some(3));
        assert!(!carousel.is_paused());
        carousel.tick();
        assert_eq!(carousel.selected(), Some(4));
    }
}
