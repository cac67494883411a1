// ============================================================================
// USE VENUE SEARCH HOOK - Filtros, resultados y errores de la búsqueda
// ============================================================================
// Hook nativo de Yew - Delega la lógica al SearchViewModel
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::{FilterState, Venue};
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_FILTERS};
use crate::viewmodels::search_viewmodel::FilterField;
use crate::viewmodels::{SearchFilterBuilder, SearchSequencer, SearchViewModel};

#[derive(Clone)]
pub struct UseVenueSearchHandle {
    pub filters: UseStateHandle<FilterState>,
    pub query: UseStateHandle<String>,
    pub venues: UseStateHandle<Vec<Venue>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,

    pub set_query: Callback<String>,
    pub update_filters: Callback<FilterState>,
    /// Fija los filtros y lanza la búsqueda
    pub apply: Callback<FilterState>,
    pub reset: Callback<()>,
    pub clear_field: Callback<FilterField>,
    pub dismiss_error: Callback<()>,
}

/// Handles que necesita una búsqueda en curso
#[derive(Clone)]
struct SearchHandles {
    venues: UseStateHandle<Vec<Venue>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    sequencer: Rc<RefCell<SearchSequencer>>,
}

impl SearchHandles {
    /// Cada envío es independiente; solo se aplica la respuesta del último ticket.
    /// Un error no borra los resultados anteriores.
    fn spawn(&self, filters: FilterState, query: String) {
        let ticket = self.sequencer.borrow_mut().issue();
        let handles = self.clone();
        handles.loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = SearchViewModel::new().search(&filters, &query).await;

            if !handles.sequencer.borrow().is_current(ticket) {
                log::debug!("⏭️ [SEARCH] Respuesta obsoleta descartada (ticket {})", ticket);
                return;
            }

            match result {
                Ok(venues) => {
                    handles.venues.set(venues);
                    handles.error.set(None);
                }
                Err(e) => handles.error.set(Some(SearchViewModel::failure_notice(&e))),
            }
            handles.loading.set(false);
        });
    }
}

/// Estado inicial: query string de la URL, o los últimos filtros aplicados
fn initial_search() -> (FilterState, String) {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();

    if !search.trim_start_matches('?').is_empty() {
        log::info!("🔗 [SEARCH] Filtros restaurados desde la URL");
        return SearchFilterBuilder::parse(&search);
    }

    let filters = load_from_storage::<FilterState>(STORAGE_KEY_FILTERS).unwrap_or_default();
    (filters, String::new())
}

#[hook]
pub fn use_venue_search() -> UseVenueSearchHandle {
    let initial = use_memo((), |_| initial_search());
    let filters = use_state(|| initial.0.clone());
    let query = use_state(|| initial.1.clone());
    let venues = use_state(Vec::<Venue>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let sequencer = use_mut_ref(SearchSequencer::default);
    let debounce = use_mut_ref(|| None::<Timeout>);

    let handles = SearchHandles {
        venues: venues.clone(),
        loading: loading.clone(),
        error: error.clone(),
        sequencer,
    };

    // Buscar al montar y cuando cambia el texto libre (con debounce)
    {
        let handles = handles.clone();
        let filters = filters.clone();
        let debounce = debounce.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            let filters = (*filters).clone();
            let timeout = Timeout::new(CONFIG.search_debounce_ms, move || {
                handles.spawn(filters, query);
            });
            // Reemplazar el timeout cancela el anterior
            *debounce.borrow_mut() = Some(timeout);
            || ()
        });
    }

    let set_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let update_filters = {
        let filters = filters.clone();
        Callback::from(move |next: FilterState| filters.set(next))
    };

    let apply = {
        let handles = handles.clone();
        let filters = filters.clone();
        let query = query.clone();
        let debounce = debounce.clone();
        Callback::from(move |next: FilterState| {
            debounce.borrow_mut().take();
            if let Err(e) = save_to_storage(STORAGE_KEY_FILTERS, &next) {
                log::warn!("⚠️ [SEARCH] {}", e);
            }
            filters.set(next.clone());
            handles.spawn(next, (*query).clone());
        })
    };

    let reset = {
        let handles = handles.clone();
        let filters = filters.clone();
        let query = query.clone();
        let debounce = debounce.clone();
        Callback::from(move |_| {
            log::info!("🧹 [SEARCH] Filtros restablecidos");
            debounce.borrow_mut().take();
            remove_from_storage(STORAGE_KEY_FILTERS);
            let defaults = SearchFilterBuilder::reset();
            filters.set(defaults.clone());
            handles.spawn(defaults, (*query).clone());
        })
    };

    // Quitar un chip es una actualización ordinaria: se aplica y se busca
    let clear_field = {
        let filters = filters.clone();
        let apply = apply.clone();
        Callback::from(move |field: FilterField| {
            let mut next = (*filters).clone();
            field.clear(&mut next);
            apply.emit(next);
        })
    };

    let dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };

    UseVenueSearchHandle {
        filters,
        query,
        venues,
        loading,
        error,
        set_query,
        update_filters,
        apply,
        reset,
        clear_field,
        dismiss_error,
    }
}
