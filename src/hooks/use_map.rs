// ============================================================================
// USE MAP HOOK - Gestión de estado del mapa
// ============================================================================
// Hook nativo de Yew - Delega cálculos al MapViewModel y el DOM al FFI
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::{Coordinate, MapLoadError, MapStatus, MarkerDescriptor, Venue};
use crate::services::{load_google_maps, on_auth_failure};
use crate::utils::google_maps_ffi::{self, GoogleMap, GoogleMarker};
use crate::viewmodels::{MapViewModel, SelectionState};

/// Marcador vivo en el mapa + su listener de click
type LiveMarker = (GoogleMarker, Option<Closure<dyn FnMut()>>);

/// Handle del hook
#[derive(Clone)]
pub struct UseMapHandle {
    pub status: UseStateHandle<MapStatus>,
    pub container: NodeRef,
    pub center: Coordinate,
    pub zoom: f64,
    pub markers: Rc<Vec<MarkerDescriptor>>,
    pub selection: UseStateHandle<SelectionState>,
    pub select: Callback<String>,
    pub clear_selection: Callback<()>,
    pub retry: Callback<()>,
}

impl UseMapHandle {
    pub fn is_ready(&self) -> bool {
        *self.status == MapStatus::Ready
    }
}

fn clear_markers(live: &mut Vec<LiveMarker>) {
    for (marker, _listener) in live.drain(..) {
        google_maps_ffi::remove_marker(&marker);
    }
}

#[hook]
pub fn use_map(
    venues: &[Venue],
    resolved: Option<Coordinate>,
    on_venue_select: Option<Callback<Venue>>,
) -> UseMapHandle {
    let status = use_state(|| MapStatus::Loading);
    let attempt = use_state(|| 0u32);
    let container = use_node_ref();
    let map = use_mut_ref(|| None::<GoogleMap>);
    let live_markers = use_mut_ref(Vec::<LiveMarker>::new);
    let selection = use_state(SelectionState::default);

    // Valores derivados: solo se recalculan si cambian sus entradas
    let view_model = use_memo((), |_| MapViewModel::from_app_config());
    let center = {
        let view_model = view_model.clone();
        *use_memo(resolved, move |r| view_model.compute_center(*r))
    };
    let zoom = view_model.zoom_for(resolved);
    let markers = use_memo((venues.to_vec(), resolved), |(venues, resolved)| {
        MapViewModel::build_markers(venues, *resolved)
    });

    // Últimas canchas, para resolver el id de un marcador clickeado
    let latest_venues = use_mut_ref(Vec::<Venue>::new);
    *latest_venues.borrow_mut() = venues.to_vec();

    let select = {
        let selection = selection.clone();
        let latest_venues = latest_venues.clone();
        Callback::from(move |venue_id: String| {
            let venue = latest_venues.borrow().iter().find(|v| v.id == venue_id).cloned();
            match venue {
                Some(venue) => {
                    let mut next = (*selection).clone();
                    next.select(venue, on_venue_select.as_ref());
                    selection.set(next);
                }
                None => log::warn!("⚠️ [MAP] Cancha {} ya no está en la lista", venue_id),
            }
        })
    };
    let latest_select = use_mut_ref(|| select.clone());
    *latest_select.borrow_mut() = select.clone();

    let clear_selection = {
        let selection = selection.clone();
        Callback::from(move |_| {
            let mut next = (*selection).clone();
            next.clear();
            selection.set(next);
        })
    };

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_| {
            log::info!("🔁 [MAP] Reintentando carga de Google Maps");
            attempt.set(*attempt + 1);
        })
    };

    // gm_authFailure: Google rechazó la API key
    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let result = on_auth_failure(move || {
                status.set(MapStatus::Failed(MapLoadError::Rejected(
                    "Verifica la API key y sus restricciones en Google Cloud".to_string(),
                )));
            });
            if let Err(e) = result {
                log::warn!("⚠️ [MAP] No se pudo registrar gm_authFailure: {:?}", e);
            }
            || ()
        });
    }

    // Cargar el script (y en cada reintento)
    {
        let status = status.clone();
        use_effect_with(*attempt, move |_| {
            match CONFIG.maps_api_key() {
                Err(e) => {
                    log::error!("❌ [MAP] {}", e);
                    status.set(MapStatus::Failed(e));
                }
                Ok(key) => {
                    let key = key.to_string();
                    status.set(MapStatus::Loading);
                    wasm_bindgen_futures::spawn_local(async move {
                        match load_google_maps(&key).await {
                            Ok(()) => status.set(MapStatus::Ready),
                            Err(e) => {
                                log::error!("❌ [MAP] {}", e);
                                status.set(MapStatus::Failed(e));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    // Crear el mapa cuando el script está listo
    {
        let map = map.clone();
        let container = container.clone();
        use_effect_with((*status).clone(), move |status| {
            if *status == MapStatus::Ready && map.borrow().is_none() {
                match container.cast::<web_sys::Element>() {
                    Some(element) => match google_maps_ffi::create_map(&element, center, zoom) {
                        Ok(instance) => {
                            log::info!("🗺️ [MAP] Mapa creado en ({}, {}) zoom {}", center.lat, center.lng, zoom);
                            *map.borrow_mut() = Some(instance);
                        }
                        Err(e) => log::error!("❌ [MAP] {}", e),
                    },
                    None => log::warn!("⚠️ [MAP] Contenedor del mapa no montado"),
                }
            }
            || ()
        });
    }

    let is_ready = *status == MapStatus::Ready;

    // Centro y zoom
    {
        let map = map.clone();
        use_effect_with((center, zoom, is_ready), move |(center, zoom, _)| {
            if let Some(instance) = map.borrow().as_ref() {
                match google_maps_ffi::coordinate_to_js(*center) {
                    Ok(js_center) => instance.set_center(&js_center),
                    Err(e) => log::error!("❌ [MAP] {}", e),
                }
                instance.set_zoom(*zoom);
            }
            || ()
        });
    }

    // Sincronizar marcadores
    {
        let map = map.clone();
        let live_markers = live_markers.clone();
        let latest_select = latest_select.clone();
        use_effect_with((markers.clone(), is_ready), move |(markers, _)| {
            if let Some(instance) = map.borrow().as_ref() {
                let mut live = live_markers.borrow_mut();
                clear_markers(&mut live);

                for descriptor in markers.iter() {
                    let marker = match google_maps_ffi::create_marker(instance, descriptor) {
                        Ok(marker) => marker,
                        Err(e) => {
                            // Un marcador defectuoso no rompe el resto
                            log::warn!("⚠️ [MAP] Marcador {} omitido: {}", descriptor.key, e);
                            continue;
                        }
                    };

                    let listener = descriptor.venue_id.clone().map(|venue_id| {
                        let latest_select = latest_select.clone();
                        let closure = Closure::wrap(Box::new(move || {
                            latest_select.borrow().emit(venue_id.clone());
                        }) as Box<dyn FnMut()>);
                        marker.add_listener("click", closure.as_ref().unchecked_ref());
                        closure
                    });

                    live.push((marker, listener));
                }
                log::info!("📍 [MAP] {} marcadores en el mapa", live.len());
            }
            || ()
        });
    }

    // La selección se descarta si la cancha ya no está en la lista
    {
        let selection = selection.clone();
        use_effect_with(venues.to_vec(), move |venues| {
            let mut next = (*selection).clone();
            next.reconcile(venues);
            if next != *selection {
                selection.set(next);
            }
            || ()
        });
    }

    // Limpiar marcadores al desmontar
    {
        let live_markers = live_markers.clone();
        use_effect_with((), move |_| {
            move || clear_markers(&mut live_markers.borrow_mut())
        });
    }

    UseMapHandle {
        status,
        container,
        center,
        zoom,
        markers,
        selection,
        select,
        clear_selection,
        retry,
    }
}
