//! What every page gets from the gateway
//!
//! Pages that need more than one table query them concurrently. The first failing query fails the
//! whole page.

use langclub_shared::{
    events::EventBoard,
    model::{
        AboutCard, ClubMember, EventRecord, HomeSlide, Member, SettingRow, SlideshowImage,
        Testimonial,
    },
    pages::{AboutContent, HomeContent, PanelContent},
    settings::SiteSettings,
};
use time::OffsetDateTime;

use crate::{
    config::Sources,
    gateway::{fetch, Direction, Gateway, GatewayError, Query},
};


/// The default query: everything, in display order
fn ordered(table: &str) -> Query {
    Query::from(table).order("order_index", Direction::Ascending)
}

/// Committee members, newest batch first, display order within a batch
fn members(table: &str) -> Query {
    Query::from(table)
        .order("batch_year", Direction::Descending)
        .order("order_index", Direction::Ascending)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn site_settings(
    gateway: &dyn Gateway,
    sources: &Sources,
) -> Result<SiteSettings, GatewayError> {
    let rows = fetch::<SettingRow>(gateway, &Query::from(&sources.site_settings)).await?;
    tracing::debug!("Loaded {} site settings.", rows.len());
    Ok(SiteSettings::from_rows(rows))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn about_page(
    gateway: &dyn Gateway,
    sources: &Sources,
) -> Result<AboutContent, GatewayError> {
    let cards_query = ordered(&sources.about_cards);
    let images_query = ordered(&sources.slideshow_images);
    let (cards, images) = tokio::try_join!(
        fetch::<AboutCard>(gateway, &cards_query),
        fetch::<SlideshowImage>(gateway, &images_query),
    )?;
    Ok(AboutContent { cards, images })
}

/// Events split around `now`, which the caller captures once per request
#[tracing::instrument(level = "debug", skip_all)]
pub async fn events_page(
    gateway: &dyn Gateway,
    sources: &Sources,
    now: OffsetDateTime,
) -> Result<EventBoard, GatewayError> {
    let events = fetch::<EventRecord>(gateway, &ordered(&sources.events)).await?;
    let board = EventBoard::partition(events, now);
    tracing::debug!(
        "{} upcoming and {} completed events.",
        board.upcoming.len(),
        board.completed.len()
    );
    Ok(board)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn execom_page(
    gateway: &dyn Gateway,
    sources: &Sources,
) -> Result<Vec<Member>, GatewayError> {
    fetch::<Member>(gateway, &members(&sources.execom)).await
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn panel_page(
    gateway: &dyn Gateway,
    sources: &Sources,
) -> Result<PanelContent, GatewayError> {
    let members_query = members(&sources.panel);
    let testimonials_query = ordered(&sources.testimonials);
    // the roster has no order_index; keep the gateway's order by name
    let roster_query = Query::from(&sources.club_members).order("name", Direction::Ascending);
    let (members, testimonials, roster) = tokio::try_join!(
        fetch::<Member>(gateway, &members_query),
        fetch::<Testimonial>(gateway, &testimonials_query),
        fetch::<ClubMember>(gateway, &roster_query),
    )?;
    Ok(PanelContent {
        members,
        testimonials,
        roster,
    })
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn home_page(
    gateway: &dyn Gateway,
    sources: &Sources,
) -> Result<HomeContent, GatewayError> {
    let slides_query = ordered(&sources.home_slides);
    let about_query = ordered(&sources.about_cards);
    let events_query = ordered(&sources.events);
    let testimonials_query = ordered(&sources.testimonials);
    let members_query = ordered(&sources.execom);
    let (slides, about_cards, events, testimonials, members) = tokio::try_join!(
        fetch::<HomeSlide>(gateway, &slides_query),
        fetch::<AboutCard>(gateway, &about_query),
        fetch::<EventRecord>(gateway, &events_query),
        fetch::<Testimonial>(gateway, &testimonials_query),
        fetch::<Member>(gateway, &members_query),
    )?;
    Ok(HomeContent {
        slides,
        about_cards,
        events,
        testimonials,
        members,
    })
}
