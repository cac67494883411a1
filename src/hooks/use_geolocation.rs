// ============================================================================
// USE GEOLOCATION HOOK - Ubicación del usuario
// ============================================================================
// La coordenada externa (prop) tiene prioridad y se re-adopta en cada cambio.
// Sin ella: una consulta única al navegador, al montar o bajo demanda según
// LookupMode. Los fallos no se muestran.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use crate::models::{Coordinate, LocationState};
use crate::services::{current_position, GeolocationError, GeolocationOptions};
use crate::viewmodels::{LocationViewModel, LookupMode};

#[derive(Clone, PartialEq)]
pub struct LocationStore {
    pub state: LocationState,
    pub locating: bool,
}

pub enum LocationAction {
    External(Option<Coordinate>),
    Locating,
    Device(Result<Coordinate, GeolocationError>),
}

impl Reducible for LocationStore {
    type Action = LocationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LocationAction::External(external) => LocationStore {
                state: LocationViewModel::adopt_external(self.state, external),
                locating: self.locating,
            },
            LocationAction::Locating => LocationStore {
                state: self.state,
                locating: true,
            },
            LocationAction::Device(result) => LocationStore {
                state: LocationViewModel::apply_device_result(self.state, result),
                locating: false,
            },
        };
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct UseGeolocationHandle {
    pub store: UseReducerHandle<LocationStore>,
    /// Consulta manual (botón "cerca de mí")
    pub request: Callback<()>,
}

impl UseGeolocationHandle {
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.store.state.coordinate()
    }

    pub fn is_locating(&self) -> bool {
        self.store.locating
    }
}

/// Lanza la consulta si no hay otra en curso
fn spawn_device_lookup(store: UseReducerHandle<LocationStore>, in_flight: Rc<RefCell<bool>>) {
    if in_flight.replace(true) {
        log::debug!("📍 [GEO] Consulta ya en curso");
        return;
    }
    store.dispatch(LocationAction::Locating);

    wasm_bindgen_futures::spawn_local(async move {
        log::info!("📍 [GEO] Solicitando ubicación al navegador...");
        let result = current_position(GeolocationOptions::default()).await;
        *in_flight.borrow_mut() = false;
        store.dispatch(LocationAction::Device(result));
    });
}

#[hook]
pub fn use_geolocation(external: Option<Coordinate>, mode: LookupMode) -> UseGeolocationHandle {
    let store = use_reducer_eq(|| LocationStore {
        state: LocationState::Unresolved,
        locating: false,
    });
    let in_flight = use_mut_ref(|| false);

    {
        let store = store.clone();
        let in_flight = in_flight.clone();
        use_effect_with(external, move |external| {
            let external = *external;
            store.dispatch(LocationAction::External(external));
            if LocationViewModel::needs_device_lookup(store.state, external, mode) {
                spawn_device_lookup(store.clone(), in_flight);
            }
            || ()
        });
    }

    let request = {
        let store = store.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |_| {
            spawn_device_lookup(store.clone(), in_flight.clone());
        })
    };

    UseGeolocationHandle { store, request }
}
