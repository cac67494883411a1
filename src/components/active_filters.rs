use yew::prelude::*;
use crate::models::FilterState;
use crate::viewmodels::search_viewmodel::{active_filters, FilterField};

#[derive(Properties, PartialEq, Clone)]
pub struct ActiveFiltersProps {
    pub filters: FilterState,
    pub on_clear: Callback<FilterField>,
    pub on_clear_all: Callback<()>,
}

#[function_component(ActiveFilters)]
pub fn active_filters_bar(props: &ActiveFiltersProps) -> Html {
    let chips = active_filters(&props.filters);
    if chips.is_empty() {
        return html! {};
    }

    let on_clear_all = {
        let cb = props.on_clear_all.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="active-filters">
            { for chips.into_iter().map(|chip| {
                let onclick = {
                    let cb = props.on_clear.clone();
                    let field = chip.field.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(field.clone()))
                };
                html! {
                    <span class="filter-chip">
                        {chip.label}
                        <button class="chip-remove" aria-label="Quitar filtro" {onclick}>{"✕"}</button>
                    </span>
                }
            })}
            <button class="btn-link" onclick={on_clear_all}>{"Limpiar todos"}</button>
        </div>
    }
}
