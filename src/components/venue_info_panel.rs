use yew::prelude::*;
use crate::models::Venue;

#[derive(Properties, PartialEq, Clone)]
pub struct VenueInfoPanelProps {
    pub venue: Venue,
    pub on_close: Callback<()>,
}

/// Ficha de la cancha seleccionada en el mapa
#[function_component(VenueInfoPanel)]
pub fn venue_info_panel(props: &VenueInfoPanelProps) -> Html {
    let v = &props.venue;
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="venue-info-panel">
            <button class="panel-close" aria-label="Cerrar" onclick={on_close}>{"✕"}</button>
            if let Some(src) = v.first_image() {
                <img class="panel-image" src={src.to_string()} alt={v.name.clone()} />
            }
            <h3>{v.name.clone()}</h3>
            <p class="panel-address">{v.display_address().to_string()}</p>
            <div class="panel-meta">
                if let Some(rating) = v.rating {
                    <span>{format!("⭐ {:.1}", rating)}</span>
                }
                <span>{format!("${:.0}/hora", v.price_per_hour)}</span>
            </div>
            if let Some(slot) = v.first_time_slot() {
                <p class="panel-slot">{format!("Próximo horario: {} - {}", slot.start, slot.end)}</p>
            }
            <a class="btn-primary" href={v.detail_path()} target="_blank" rel="noopener noreferrer">
                {"Ver detalles"}
            </a>
        </div>
    }
}
