use yew::prelude::*;
use crate::models::Venue;

#[derive(Properties, PartialEq, Clone)]
pub struct VenueCardProps {
    pub venue: Venue,
}

#[function_component(VenueCard)]
pub fn venue_card(props: &VenueCardProps) -> Html {
    let v = &props.venue;

    html! {
        <article class={classes!("venue-card", v.coordinate.is_none().then_some("no-location"))}>
            <div class="venue-image">
                if let Some(src) = v.first_image() {
                    <img src={src.to_string()} alt={v.name.clone()} loading="lazy" />
                } else {
                    <div class="venue-image-placeholder">{"⚽"}</div>
                }
            </div>
            <div class="venue-body">
                <h3 class="venue-name">{v.name.clone()}</h3>
                <p class="venue-address">{"📍 "}{v.display_address().to_string()}</p>
                <div class="venue-meta">
                    if let Some(rating) = v.rating {
                        <span class="venue-rating">{format!("⭐ {:.1}", rating)}</span>
                    }
                    <span class="venue-price">{format!("${:.0}/hora", v.price_per_hour)}</span>
                </div>
                if let Some(slot) = v.first_time_slot() {
                    <p class="venue-slot">{format!("🕐 {} - {}", slot.start, slot.end)}</p>
                }
                <a class="btn-primary" href={v.detail_path()}>{"Ver detalles"}</a>
            </div>
        </article>
    }
}
