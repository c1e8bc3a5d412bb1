use common::{Page, PageEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator().expect("Home is rendered inside the router");

    let onclick = Callback::from(move |_| {
        let next = Page::Home.transition(PageEvent::OpenDashboard);
        navigator.push(&Route::from(next));
    });

    html! {
        <div class="home">
            <header class="home-header">
                <h1>{"Energy Consumption Dashboard"}</h1>
                <p>{"With analyses and forecasts"}</p>
            </header>
            <main class="home-body">
                <img src="/assets/energie.svg" alt="Energy illustration" class="home-illustration" />
                <h2>{"Track energy consumption"}</h2>
                <p>{"Explore regional data, forecasts and key indicators interactively."}</p>
                <button class="dashboard-button" {onclick}>{"Open the Dashboard"}</button>
            </main>
        </div>
    }
}
