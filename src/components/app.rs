// ============================================================================
// APP - Página de búsqueda de canchas
// ============================================================================

use yew::prelude::*;
use crate::hooks::{use_geolocation, use_venue_search};
use crate::models::Venue;
use crate::viewmodels::search_viewmodel::{active_filters, has_active_filters};
use crate::viewmodels::LookupMode;
use super::{ActiveFilters, Alert, FilterPanel, MapView, SearchBar, VenueList};

#[derive(Clone, Copy, PartialEq)]
pub enum ViewMode {
    List,
    Map,
}

#[function_component(App)]
pub fn app() -> Html {
    let search = use_venue_search();
    // Único proveedor de ubicación: solo consulta al pedir "cerca de mí" o abrir el mapa
    let geo = use_geolocation(None, LookupMode::OnDemand);

    let view_mode = use_state(|| ViewMode::List);
    let show_filters = use_state(|| false);
    // "Cerca de mí" pulsado antes de tener ubicación
    let near_me_pending = use_state(|| false);

    // Cuando llega la ubicación pedida, se fija como origen del radio
    {
        let search = search.clone();
        let near_me_pending = near_me_pending.clone();
        use_effect_with(geo.coordinate(), move |coordinate| {
            if *near_me_pending {
                if let Some(origin) = *coordinate {
                    log::info!("📍 [APP] Buscando cerca de ({}, {})", origin.lat, origin.lng);
                    let mut next = (*search.filters).clone();
                    next.set_origin(Some(origin));
                    search.apply.emit(next);
                    near_me_pending.set(false);
                }
            }
            || ()
        });
    }

    let on_near_me = {
        let search = search.clone();
        let geo = geo.clone();
        let near_me_pending = near_me_pending.clone();
        Callback::from(move |_: MouseEvent| match geo.coordinate() {
            Some(origin) => {
                let mut next = (*search.filters).clone();
                next.set_origin(Some(origin));
                search.apply.emit(next);
            }
            None => {
                near_me_pending.set(true);
                geo.request.emit(());
            }
        })
    };

    let open_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(true))
    };
    let close_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_| show_filters.set(false))
    };

    let toggle_view = {
        let view_mode = view_mode.clone();
        let geo = geo.clone();
        Callback::from(move |_: MouseEvent| match *view_mode {
            ViewMode::List => {
                if geo.coordinate().is_none() {
                    geo.request.emit(());
                }
                view_mode.set(ViewMode::Map);
            }
            ViewMode::Map => view_mode.set(ViewMode::List),
        })
    };

    let on_venue_select = Callback::from(|venue: Venue| {
        log::info!("🏟️ [APP] Cancha seleccionada: {}", venue.name);
    });

    let filters = (*search.filters).clone();
    let venue_count = search.venues.len();
    let chip_count = active_filters(&filters).len();

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Encuentra tu cancha"}</h1>
                <p class="result-count">
                    { if *search.loading { "Buscando...".to_string() } else { format!("{} canchas encontradas", venue_count) } }
                </p>
            </header>

            <SearchBar
                value={(*search.query).clone()}
                on_change={search.set_query.clone()}
                on_open_filters={open_filters}
                active_count={chip_count}
            />

            <div class="toolbar">
                <button class="btn-secondary" onclick={on_near_me} disabled={geo.is_locating()}>
                    { if geo.is_locating() { "Obteniendo ubicación..." } else { "📍 Buscar cerca de mí" } }
                </button>
                <button class="btn-secondary" onclick={toggle_view}>
                    { match *view_mode { ViewMode::List => "🗺️ Ver mapa", ViewMode::Map => "📋 Ver lista" } }
                </button>
            </div>

            if let (Some(_), Some(radius)) = (filters.origin, filters.radius_km) {
                <p class="radius-notice">{format!("Mostrando canchas en un radio de {} km de tu ubicación", radius)}</p>
            }

            <ActiveFilters
                filters={filters.clone()}
                on_clear={search.clear_field.clone()}
                on_clear_all={search.reset.clone()}
            />

            if let Some(message) = (*search.error).clone() {
                <Alert
                    title="Error al cargar canchas"
                    message={message}
                    on_dismiss={search.dismiss_error.clone()}
                />
            }

            <main class="results">
                { match *view_mode {
                    ViewMode::List => html! {
                        <VenueList
                            venues={(*search.venues).clone()}
                            loading={*search.loading}
                            has_filters={has_active_filters(&filters)}
                            on_reset={search.reset.clone()}
                        />
                    },
                    ViewMode::Map => html! {
                        <MapView
                            venues={(*search.venues).clone()}
                            user_location={geo.coordinate()}
                            locating={geo.is_locating()}
                            on_venue_select={on_venue_select}
                        />
                    },
                }}
            </main>

            <FilterPanel
                open={*show_filters}
                filters={filters}
                on_apply={search.apply.clone()}
                on_reset={search.reset.clone()}
                on_close={close_filters}
            />
        </div>
    }
}
