use chrono::NaiveDate;
use common::{PeriodMode, SelectionEvent, SelectionState};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selection: SelectionState,
    pub on_event: Callback<SelectionEvent>,
}

/// Period selector plus the custom date pickers.
///
/// The pickers are only rendered in custom mode, mirroring the
/// show/hide behavior of the selector.
#[function_component(PeriodControls)]
pub fn period_controls(props: &Props) -> Html {
    let on_mode_change = {
        let on_event = props.on_event.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<PeriodMode>() {
                Ok(mode) => on_event.emit(SelectionEvent::ModeChanged(mode)),
                Err(err) => log::warn!("Ignoring selector value: {}", err),
            }
        })
    };

    let on_start_change = date_callback(props.on_event.clone(), SelectionEvent::CustomStartChanged);
    let on_end_change = date_callback(props.on_event.clone(), SelectionEvent::CustomEndChanged);

    html! {
        <div class="period-controls">
            <select onchange={on_mode_change}>
                {
                    PeriodMode::ALL.iter().map(|mode| html! {
                        <option value={mode.as_str()} selected={*mode == props.selection.mode}>
                            { mode.label() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            if props.selection.mode.is_custom() {
                <>
                    <input type="date" onchange={on_start_change} />
                    <input type="date" onchange={on_end_change} />
                </>
            }
        </div>
    }
}

fn date_callback(
    on_event: Callback<SelectionEvent>,
    make_event: fn(Option<NaiveDate>) -> SelectionEvent,
) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let date = NaiveDate::parse_from_str(&input.value(), "%Y-%m-%d").ok();
        on_event.emit(make_event(date));
    })
}
