use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_open_filters: Callback<()>,
    #[prop_or(0)]
    pub active_count: usize, // número de chips activos
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };

    let on_filters_click = {
        let cb = props.on_open_filters.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="search-bar">
            <span class="search-icon">{"🔍"}</span>
            <input
                type="search"
                class="search-input"
                placeholder="Busca canchas por nombre o zona..."
                value={props.value.clone()}
                {oninput}
            />
            <button class="btn-filters" onclick={on_filters_click}>
                {"Filtros"}
                if props.active_count > 0 {
                    <span class="badge">{props.active_count.to_string()}</span>
                }
            </button>
        </div>
    }
}
