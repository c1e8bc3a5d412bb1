use std::rc::Rc;

use common::{ChartSpec, DashboardViewModel, Page, PageEvent, SelectionEvent, SelectionState};
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::PlotlyChart;
use super::controls::PeriodControls;
use super::stats::KpiStats;
use crate::api_client::dashboard::fetch_dashboard;
use crate::Route;

/// Wrapper giving the shared selection reducer a yew `Reducible` impl.
#[derive(Debug, Clone, PartialEq)]
struct SelectionStore(SelectionState);

impl Reducible for SelectionStore {
    type Action = SelectionEvent;

    fn reduce(self: Rc<Self>, action: SelectionEvent) -> Rc<Self> {
        Rc::new(SelectionStore(self.0.reduce(action)))
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let selection = use_reducer(|| SelectionStore(SelectionState::default()));
    let view_model = use_state(|| None::<DashboardViewModel>);

    // Every selection change triggers one full view-model fetch.
    // No debouncing: last write wins.
    {
        let view_model = view_model.clone();
        use_effect_with(selection.0, move |state| {
            let state = *state;
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_dashboard(&state).await {
                    Ok(vm) => view_model.set(Some(vm)),
                    Err(err) => log::error!("Failed to fetch dashboard: {}", err),
                }
            });
            || ()
        });
    }

    let navigator = use_navigator().expect("Dashboard is rendered inside the router");
    let on_back = Callback::from(move |_| {
        let next = Page::Dashboard.transition(PageEvent::ReturnHome);
        navigator.push(&Route::from(next));
    });

    let on_event = {
        let selection = selection.clone();
        Callback::from(move |event: SelectionEvent| selection.dispatch(event))
    };

    html! {
        <div class="dashboard">
            <div class="toolbar">
                <button class="back-button" onclick={on_back}>{"Back to Home"}</button>
            </div>
            <PeriodControls selection={selection.0} {on_event} />
            {
                match &*view_model {
                    Some(vm) if !vm.is_valid() => html! {
                        <div class="validation-message">
                            { vm.validation_message.clone().unwrap_or_default() }
                        </div>
                    },
                    Some(vm) => html! {
                        <>
                            <KpiStats view_model={vm.clone()} />
                            <div class="charts-row">
                                { chart_card("chart-regional", vm.regional_chart.clone()) }
                                { chart_card("chart-forecast", vm.forecast_chart.clone()) }
                            </div>
                            <div class="charts-row">
                                { chart_card("chart-sector", vm.sector_chart.clone()) }
                                { chart_card("chart-comparison", vm.comparison_chart.clone()) }
                            </div>
                        </>
                    },
                    None => html! { <div class="loading">{"Loading dashboard…"}</div> },
                }
            }
        </div>
    }
}

fn chart_card(id: &str, spec: Option<ChartSpec>) -> Html {
    match spec {
        Some(spec) => html! { <PlotlyChart id={id.to_string()} {spec} /> },
        None => Html::default(),
    }
}
