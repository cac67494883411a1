use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use crate::models::{FilterState, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
use crate::utils::{FIELD_TYPES, RADIUS_OPTIONS_KM, SERVICE_OPTIONS, TIME_SLOT_OPTIONS};

const RATING_OPTIONS: &[f64] = &[0.0, 3.0, 3.5, 4.0, 4.5];

#[derive(Properties, PartialEq, Clone)]
pub struct FilterPanelProps {
    pub open: bool,
    pub filters: FilterState,
    pub on_apply: Callback<FilterState>,
    pub on_reset: Callback<()>,
    pub on_close: Callback<()>,
}

/// Callback que edita una copia del borrador
fn draft_callback<E: 'static>(
    draft: &UseStateHandle<FilterState>,
    edit: impl Fn(&mut FilterState, E) + 'static,
) -> Callback<E> {
    let draft = draft.clone();
    Callback::from(move |e: E| {
        let mut next = (*draft).clone();
        edit(&mut next, e);
        draft.set(next);
    })
}

/// Texto del input de precio: vacío cuando es el valor "sin filtro"
fn price_text(value: u32, unfiltered: u32) -> String {
    if value == unfiltered {
        String::new()
    } else {
        value.to_string()
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    // Borrador local: solo se publica al pulsar "Aplicar".
    // Los precios se guardan como texto y se normalizan al aplicar.
    let draft = use_state(|| props.filters.clone());
    let price_min_text = use_state(|| price_text(props.filters.price_min, PRICE_MIN_DEFAULT));
    let price_max_text = use_state(|| price_text(props.filters.price_max, PRICE_MAX_DEFAULT));
    {
        let draft = draft.clone();
        let price_min_text = price_min_text.clone();
        let price_max_text = price_max_text.clone();
        use_effect_with((props.filters.clone(), props.open), move |(filters, _)| {
            price_min_text.set(price_text(filters.price_min, PRICE_MIN_DEFAULT));
            price_max_text.set(price_text(filters.price_max, PRICE_MAX_DEFAULT));
            draft.set(filters.clone());
            || ()
        });
    }

    if !props.open {
        return html! {};
    }

    let on_location = draft_callback(&draft, |f, e: InputEvent| f.location_text = input_value(&e));
    let on_price_min = {
        let price_min_text = price_min_text.clone();
        Callback::from(move |e: InputEvent| price_min_text.set(input_value(&e)))
    };
    let on_price_max = {
        let price_max_text = price_max_text.clone();
        Callback::from(move |e: InputEvent| price_max_text.set(input_value(&e)))
    };
    let on_date = draft_callback(&draft, |f, e: InputEvent| f.date = input_value(&e));
    let on_rating = draft_callback(&draft, |f, e: Event| {
        f.set_min_rating(select_value(&e).parse().unwrap_or(0.0));
    });
    let on_radius = draft_callback(&draft, |f, e: Event| {
        if let Ok(radius) = select_value(&e).parse() {
            f.set_radius(radius);
        }
    });

    let checkbox_group = |options: &'static [(&'static str, &'static str)],
                          selected: &std::collections::BTreeSet<String>,
                          toggle: fn(&mut FilterState, &str)| {
        html! {
            <div class="checkbox-group">
                { for options.iter().map(|(value, label)| {
                    let onchange = draft_callback(&draft, move |f, _: Event| toggle(f, value));
                    html! {
                        <label class="checkbox">
                            <input type="checkbox" checked={selected.contains(*value)} {onchange} />
                            {*label}
                        </label>
                    }
                })}
            </div>
        }
    };

    let on_apply = {
        let draft = draft.clone();
        let price_min_text = price_min_text.clone();
        let price_max_text = price_max_text.clone();
        let cb = props.on_apply.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut filters = (*draft).clone();
            filters.set_price_text(&price_min_text, &price_max_text);
            cb.emit(filters);
            close.emit(());
        })
    };
    let on_reset = {
        let cb = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="filter-panel" onclick={stop}>
                <div class="filter-panel-header">
                    <h2>{"Filtros"}</h2>
                    <button class="panel-close" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
                </div>

                <section class="filter-section">
                    <h3>{"Ubicación"}</h3>
                    <input type="text" placeholder="Barrio o ciudad"
                        value={draft.location_text.clone()} oninput={on_location} />
                </section>

                <section class="filter-section">
                    <h3>{"Precio por hora"}</h3>
                    <div class="price-range">
                        <input type="number" min="0" placeholder="Mínimo"
                            value={(*price_min_text).clone()} oninput={on_price_min} />
                        <span>{"-"}</span>
                        <input type="number" min="0" placeholder="Máximo"
                            value={(*price_max_text).clone()} oninput={on_price_max} />
                    </div>
                </section>

                <section class="filter-section">
                    <h3>{"Tipo de cancha"}</h3>
                    {checkbox_group(FIELD_TYPES, &draft.categories, FilterState::toggle_category)}
                </section>

                <section class="filter-section">
                    <h3>{"Fecha"}</h3>
                    <input type="date" value={draft.date.clone()} oninput={on_date} />
                </section>

                <section class="filter-section">
                    <h3>{"Horario"}</h3>
                    {checkbox_group(TIME_SLOT_OPTIONS, &draft.time_slots, FilterState::toggle_time_slot)}
                </section>

                <section class="filter-section">
                    <h3>{"Servicios"}</h3>
                    {checkbox_group(SERVICE_OPTIONS, &draft.services, FilterState::toggle_service)}
                </section>

                <section class="filter-section">
                    <h3>{"Calificación mínima"}</h3>
                    <select onchange={on_rating}>
                        { for RATING_OPTIONS.iter().map(|rating| html! {
                            <option value={rating.to_string()} selected={draft.min_rating == *rating}>
                                { if *rating > 0.0 { format!("⭐ {}+", rating) } else { "Cualquiera".to_string() } }
                            </option>
                        })}
                    </select>
                </section>

                if draft.origin.is_some() {
                    <section class="filter-section">
                        <h3>{"Radio de búsqueda"}</h3>
                        <select onchange={on_radius}>
                            { for RADIUS_OPTIONS_KM.iter().map(|km| html! {
                                <option value={km.to_string()} selected={draft.radius_km == Some(*km)}>
                                    {format!("{} km", km)}
                                </option>
                            })}
                        </select>
                    </section>
                }

                <div class="filter-panel-actions">
                    <button class="btn-secondary" onclick={on_reset}>{"Limpiar"}</button>
                    <button class="btn-primary" onclick={on_apply}>{"Aplicar"}</button>
                </div>
            </div>
        </div>
    }
}
