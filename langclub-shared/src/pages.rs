//! What each page receives from its server function
//!
//! Every result set gets its own named field.

use serde::{Deserialize, Serialize};

use crate::model::{
    AboutCard, ClubMember, EventRecord, HomeSlide, Member, SlideshowImage, Testimonial,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeContent {
    pub slides: Vec<HomeSlide>,
    pub about_cards: Vec<AboutCard>,
    pub events: Vec<EventRecord>,
    pub testimonials: Vec<Testimonial>,
    pub members: Vec<Member>,
}
impl HomeContent {
    /// The strings the hero typewriter cycles through
    pub fn hero_titles(&self) -> Vec<String> {
        self.slides
            .iter()
            .map(|s| s.title_h1.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub cards: Vec<AboutCard>,
    pub images: Vec<SlideshowImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelContent {
    pub members: Vec<Member>,
    pub testimonials: Vec<Testimonial>,
    pub roster: Vec<ClubMember>,
}

#[cfg(test)]
mod test {
    use super::*;

    fn slide(id: i64, title: &str) -> HomeSlide {
        HomeSlide {
            id,
            title_h1: title.to_string(),
            title_h2: None,
            description: None,
            video_url: None,
            button_text: None,
            order_index: id as i32,
        }
    }

    #[test]
    fn hero_titles_skip_blank_slides() {
        let content = HomeContent {
            slides: vec![slide(1, "Speak"), slide(2, "  "), slide(3, " Listen ")],
            ..Default::default()
        };
        assert_eq!(content.hero_titles(), vec!["Speak", "Listen"]);
    }
}
