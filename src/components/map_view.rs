use yew::prelude::*;
use crate::hooks::use_map;
use crate::models::{Coordinate, MapStatus, Venue};
use crate::utils::MAP_CONTAINER_ID;
use super::alert::{Alert, AlertKind};
use super::venue_info_panel::VenueInfoPanel;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub venues: Vec<Venue>,
    /// Ubicación resuelta por el proveedor de la página
    #[prop_or_default]
    pub user_location: Option<Coordinate>,
    #[prop_or(false)]
    pub locating: bool,
    #[prop_or_default]
    pub on_venue_select: Option<Callback<Venue>>,
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let map = use_map(&props.venues, props.user_location, props.on_venue_select.clone());

    let banner = match &*map.status {
        MapStatus::Loading => html! {
            <div class="map-overlay">{"Cargando mapa..."}</div>
        },
        MapStatus::Failed(e) if e.is_retryable() => {
            let retry = map.retry.clone();
            let onclick = Callback::from(move |_: MouseEvent| retry.emit(()));
            html! {
                <Alert kind={AlertKind::Warning} title="No se pudo cargar el mapa" message={e.to_string()}>
                    <button class="btn-secondary" {onclick}>{"Reintentar"}</button>
                </Alert>
            }
        }
        MapStatus::Failed(e) => html! {
            <Alert kind={AlertKind::Error} title="Mapa no disponible" message={e.to_string()} />
        },
        MapStatus::Ready if props.venues.is_empty() => html! {
            <div class="map-hint">{"No hay canchas para mostrar en el mapa"}</div>
        },
        MapStatus::Ready => html! {},
    };

    let failed = matches!(*map.status, MapStatus::Failed(_));

    html! {
        <div class="map-view">
            {banner}
            if props.locating {
                <div class="map-locating">{"📍 Obteniendo tu ubicación..."}</div>
            }
            <div
                id={MAP_CONTAINER_ID}
                ref={map.container.clone()}
                class={classes!("map-canvas", failed.then_some("hidden"))}
            />
            if let Some(venue) = map.selection.selected() {
                <VenueInfoPanel venue={venue.clone()} on_close={map.clear_selection.clone()} />
            }
        </div>
    }
}
