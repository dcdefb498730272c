use gloo::events::EventListener;
use gloo::utils::window;
use yew::prelude::*;

use crate::services::logging::Logger;

/// Current route plus the capability to change it
#[derive(Clone, PartialEq)]
pub struct UseHashRouteHandle {
    pub route: String,
    pub navigate: Callback<String>,
}

/// Map a location hash (`#/progress`) to a route (`/progress`). An empty hash is `/`.
pub fn route_from_hash(hash: &str) -> String {
    let path = hash.strip_prefix('#').unwrap_or(hash);
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

fn current_route() -> String {
    let hash = window().location().hash().unwrap_or_default();
    route_from_hash(&hash)
}

/// Routes driven by `window.location.hash`.
///
/// The route only changes when the browser reports a `hashchange`, so callers
/// never see an optimistic update from `navigate`.
#[hook]
pub fn use_hash_route() -> UseHashRouteHandle {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "hashchange", move |_| {
                let next = current_route();
                Logger::debug_with_component("hash-route", &format!("Route changed to {}", next));
                route.set(next);
            });

            move || drop(listener)
        });
    }

    let navigate = use_callback((), |target: String, _| {
        if let Err(e) = window().location().set_hash(&target) {
            Logger::error_with_component(
                "hash-route",
                &format!("Failed to navigate to {}: {:?}", target, e),
            );
        }
    });

    UseHashRouteHandle {
        route: (*route).clone(),
        navigate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash_is_root() {
        assert_eq!(route_from_hash(""), "/");
        assert_eq!(route_from_hash("#"), "/");
    }

    #[test]
    fn test_hash_prefix_is_stripped() {
        assert_eq!(route_from_hash("#/progress"), "/progress");
        assert_eq!(route_from_hash("#/about/"), "/about/");
    }

    #[test]
    fn test_route_is_not_normalized() {
        assert_eq!(route_from_hash("/raw"), "/raw");
        assert_eq!(route_from_hash("##/x"), "#/x");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    type NavigateSlot = Rc<RefCell<Option<Callback<String>>>>;

    #[derive(Properties, PartialEq)]
    struct RouteViewProps {
        slot: NavigateSlot,
    }

    /// Renders the current route and hands its navigate callback to the test
    #[function_component(RouteView)]
    fn route_view(props: &RouteViewProps) -> Html {
        let router = use_hash_route();
        *props.slot.borrow_mut() = Some(router.navigate.clone());

        html! { <span class="current-route">{router.route}</span> }
    }

    async fn reset_hash() {
        window().location().set_hash("/").unwrap();
        TimeoutFuture::new(20).await;
    }

    async fn mount(slot: NavigateSlot) -> Element {
        let root = gloo::utils::document().create_element("div").unwrap();
        gloo::utils::body().append_child(&root).unwrap();
        yew::Renderer::<RouteView>::with_root_and_props(root.clone(), RouteViewProps { slot })
            .render();
        TimeoutFuture::new(10).await;
        root
    }

    fn rendered_route(root: &Element) -> String {
        root.query_selector(".current-route")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_navigate_writes_hash_and_waits_for_hashchange() {
        reset_hash().await;
        let slot = NavigateSlot::default();
        let root = mount(slot.clone()).await;
        assert_eq!(rendered_route(&root), "/");

        let navigate = slot.borrow().clone().unwrap();
        navigate.emit("/progress".to_string());

        // The hash is written at once, the rendered route follows the event
        assert_eq!(window().location().hash().unwrap(), "#/progress");
        assert_eq!(rendered_route(&root), "/");

        TimeoutFuture::new(50).await;
        assert_eq!(rendered_route(&root), "/progress");
    }

    #[wasm_bindgen_test]
    async fn test_external_hash_change_is_picked_up() {
        reset_hash().await;
        let root = mount(NavigateSlot::default()).await;

        window().location().set_hash("/about").unwrap();
        TimeoutFuture::new(50).await;

        assert_eq!(rendered_route(&root), "/about");
    }
}
