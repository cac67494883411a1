use yew::prelude::*;
use crate::models::Venue;
use super::venue_card::VenueCard;

const SKELETON_COUNT: usize = 6;

#[derive(Properties, PartialEq, Clone)]
pub struct VenueListProps {
    pub venues: Vec<Venue>,
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or(false)]
    pub has_filters: bool,
    pub on_reset: Callback<()>,
}

#[function_component(VenueList)]
pub fn venue_list(props: &VenueListProps) -> Html {
    // Primera carga: esqueletos en lugar de la lista vacía
    if props.loading && props.venues.is_empty() {
        return html! {
            <div class="venue-grid">
                { for (0..SKELETON_COUNT).map(|i| html! {
                    <div key={i} class="venue-card skeleton">
                        <div class="skeleton-image"></div>
                        <div class="skeleton-line"></div>
                        <div class="skeleton-line short"></div>
                    </div>
                })}
            </div>
        };
    }

    if props.venues.is_empty() {
        let on_reset = {
            let cb = props.on_reset.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        return html! {
            <div class="empty-state">
                <p class="empty-icon">{"🏟️"}</p>
                <h3>{"No encontramos canchas"}</h3>
                <p>{"Prueba con otros filtros o amplía la zona de búsqueda."}</p>
                if props.has_filters {
                    <button class="btn-secondary" onclick={on_reset}>{"Limpiar filtros"}</button>
                }
            </div>
        };
    }

    html! {
        <div class={classes!("venue-grid", props.loading.then_some("refreshing"))}>
            { for props.venues.iter().map(|venue| html! {
                <VenueCard key={venue.id.clone()} venue={venue.clone()} />
            })}
        </div>
    }
}
