use std::time::Duration;

/// Shown when there are no titles to type
pub const DEFAULT_TYPEWRITER_TEXT: &str = "Welcome to LanguageClub";
/// How long a fully typed string stays on screen
pub const TYPEWRITER_HOLD: Duration = Duration::from_millis(2000);

/// Types a list of strings one character at a time, holds, deletes, moves on. Forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    texts: Vec<String>,
    text_idx: usize,
    /// in characters, not bytes
    cursor: usize,
    deleting: bool,
    type_delay: Duration,
}
impl Typewriter {
    pub fn new(texts: Vec<String>, type_delay: Duration) -> Self {
        let texts = if texts.is_empty() {
            vec![DEFAULT_TYPEWRITER_TEXT.to_string()]
        } else {
            texts
        };
        Self {
            texts,
            text_idx: 0,
            cursor: 0,
            deleting: false,
            type_delay,
        }
    }

    pub fn text_index(&self) -> usize {
        self.text_idx
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// What is on screen right now
    pub fn visible(&self) -> String {
        self.texts[self.text_idx].chars().take(self.cursor).collect()
    }

    /// Advance one character. Returns how long to wait before the next step.
    pub fn step(&mut self) -> Duration {
        let full_len = self.texts[self.text_idx].chars().count();
        if self.deleting {
            self.cursor = self.cursor.saturating_sub(1);
            if self.cursor == 0 {
                self.deleting = false;
                self.text_idx = (self.text_idx + 1) % self.texts.len();
                self.type_delay
            } else {
                self.type_delay / 2
            }
        } else {
            if self.cursor < full_len {
                self.cursor += 1;
            }
            if self.cursor >= full_len {
                self.deleting = true;
                TYPEWRITER_HOLD
            } else {
                self.type_delay
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DELAY: Duration = Duration::from_millis(150);

    fn typewriter(texts: &[&str]) -> Typewriter {
        Typewriter::new(texts.iter().map(|s| s.to_string()).collect(), DELAY)
    }

    #[test]
    fn empty_list_types_the_default() {
        let mut tw = Typewriter::new(vec![], DELAY);
        for _ in 0..DEFAULT_TYPEWRITER_TEXT.len() {
            tw.step();
        }
        assert_eq!(tw.visible(), DEFAULT_TYPEWRITER_TEXT);
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut tw = typewriter(&["ab", "xyz"]);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.step(), DELAY);
        assert_eq!(tw.visible(), "a");
        assert_eq!(tw.step(), TYPEWRITER_HOLD);
        assert_eq!(tw.visible(), "ab");
        assert!(tw.is_deleting());
        assert_eq!(tw.step(), DELAY / 2);
        assert_eq!(tw.visible(), "a");
        // last character gone: back to typing speed on the next string
        assert_eq!(tw.step(), DELAY);
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.text_index(), 1);
        assert!(!tw.is_deleting());
        tw.step();
        assert_eq!(tw.visible(), "x");
    }

    #[test]
    fn cycles_back_to_the_first_string() {
        let mut tw = typewriter(&["a", "b"]);
        // "a": type, delete; "b": type, delete
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.text_index(), 0);
        tw.step();
        assert_eq!(tw.visible(), "a");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut tw = typewriter(&["నమస్తే"]);
        tw.step();
        assert_eq!(tw.visible(), "న");
    }
}
