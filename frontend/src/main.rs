use shared::ProgressSpec;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::circular_progress::CircularProgress;
use components::nav_bar::NavBar;
use hooks::use_hash_route::use_hash_route;
use services::config::AppConfig;
use services::logging::Logger;

fn percent_label(value: f64) -> String {
    format!("{:.0}%", value)
}

#[derive(Properties, PartialEq)]
struct PageProps {
    route: AttrValue,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let progress = use_state(|| 40.0f64);

    // The ring never clamps, so the shell does it before rendering
    let step = |delta: f64| {
        let progress = progress.clone();
        Callback::from(move |_: MouseEvent| {
            progress.set(ProgressSpec::new(*progress + delta).clamped().value);
        })
    };

    match props.route.as_str() {
        "/" => html! {
            <section class="page page-home">
                <CircularProgress value={*progress}>
                    <span class="progress-percent">{percent_label(*progress)}</span>
                </CircularProgress>
                <div class="progress-controls">
                    <button type="button" class="btn" onclick={step(-10.0)}>{"−10"}</button>
                    <button type="button" class="btn" onclick={step(10.0)}>{"+10"}</button>
                </div>
            </section>
        },
        "/progress" => html! {
            <section class="page page-progress">
                <CircularProgress value={0.0} size={64.0} stroke_width={6.0} />
                <CircularProgress value={25.0} size={100.0} stroke_width={10.0}>
                    <span>{percent_label(25.0)}</span>
                </CircularProgress>
                <CircularProgress value={*progress} indicator_color="#667eea">
                    <span>{percent_label(*progress)}</span>
                </CircularProgress>
                <CircularProgress value={100.0} size={80.0} stroke_width={4.0} />
            </section>
        },
        "/about" => html! {
            <section class="page page-about">
                <h2>{"About"}</h2>
                <p>{"A bottom navigation bar and an SVG progress ring."}</p>
            </section>
        },
        other => html! {
            <section class="page page-missing">
                <p>{format!("Nothing lives at {}", other)}</p>
            </section>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| {
        let config = AppConfig::load_or_default();
        Logger::set_level(config.log_level);
        config
    });
    let router = use_hash_route();

    use_effect_with((), |_| {
        Logger::info_with_component("app", "App shell mounted");
        || ()
    });

    html! {
        <div class="app-shell">
            <main class="app-content">
                <Page route={router.route.clone()} />
            </main>
            <NavBar
                destinations={config.navigation.destinations.clone()}
                current_route={router.route.clone()}
                on_navigate={router.navigate.clone()}
                policy={config.navigation.policy}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
