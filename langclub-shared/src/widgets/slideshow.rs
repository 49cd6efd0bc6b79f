/// Position in a cyclic sequence of `len` slides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slideshow {
    index: usize,
    len: usize,
}
impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Nothing to show; render a placeholder instead
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One slide or none: no timer, no arrows
    pub fn is_static(&self) -> bool {
        self.len <= 1
    }

    /// Timer tick
    pub fn tick(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot. Out-of-range targets are ignored.
    pub fn jump(&mut self, target: usize) {
        if target < self.len {
            self.index = target;
        }
    }

    pub fn is_active(&self, idx: usize) -> bool {
        !self.is_empty() && idx == self.index
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_never_moves() {
        let mut show = Slideshow::new(0);
        show.tick();
        show.prev();
        show.jump(3);
        assert!(show.is_empty());
        assert!(show.is_static());
        assert_eq!(show.index(), 0);
        assert!(!show.is_active(0));
    }

    #[test]
    fn only_an_empty_slideshow_is_empty() {
        assert!(Slideshow::new(0).is_empty());
        assert!(!Slideshow::new(1).is_empty());
        assert!(!Slideshow::new(4).is_empty());
    }

    #[test]
    fn single_slide_is_static() {
        let mut show = Slideshow::new(1);
        assert!(show.is_static());
        show.tick();
        assert_eq!(show.index(), 0);
        assert!(show.is_active(0));
    }

    #[test]
    fn tick_wraps_around() {
        let mut show = Slideshow::new(3);
        show.tick();
        show.tick();
        assert_eq!(show.index(), 2);
        show.tick();
        assert_eq!(show.index(), 0);
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        let mut show = Slideshow::new(4);
        show.prev();
        assert_eq!(show.index(), 3);
    }

    #[test]
    fn jump_is_immediate_and_bounded() {
        let mut show = Slideshow::new(4);
        show.jump(2);
        assert_eq!(show.index(), 2);
        show.jump(4);
        assert_eq!(show.index(), 2);
    }
}
