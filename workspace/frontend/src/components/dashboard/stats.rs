use common::DashboardViewModel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view_model: DashboardViewModel,
}

/// The period label and the three KPI text blocks.
#[function_component(KpiStats)]
pub fn kpi_stats(props: &Props) -> Html {
    let vm = &props.view_model;

    html! {
        <div class="kpi-row">
            <div class="kpi-block period-label">
                { vm.period_label.clone().unwrap_or_default() }
            </div>
            <div class="kpi-block">
                { format!("Total Cost: {} €", vm.total_cost.clone().unwrap_or_default()) }
            </div>
            <div class="kpi-block">
                { format!("CO₂ Emissions: {} t", vm.total_co2.clone().unwrap_or_default()) }
            </div>
            <div class="kpi-block">
                { format!("Alerts: {}", vm.alert_count.unwrap_or_default()) }
            </div>
        </div>
    }
}
