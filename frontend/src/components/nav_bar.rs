use shared::{nav_items, MatchPolicy, NavDestination};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    /// Ordered destinations, rendered left to right. Labels are the list keys
    /// and must be unique (`NavConfig::validate` enforces this).
    pub destinations: Vec<NavDestination>,
    pub current_route: AttrValue,
    /// Receives the destination route on every click
    pub on_navigate: Callback<String>,
    #[prop_or_default]
    pub policy: MatchPolicy,
    #[prop_or_default]
    pub class: Classes,
}

/// Bottom navigation strip.
///
/// Holds no state: the active marker follows `current_route`, which only
/// changes once the navigation has gone through the router.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let items = nav_items(&props.destinations, &props.current_route, props.policy);

    html! {
        <nav class={classes!("nav-bar", props.class.clone())}>
            {for items.into_iter().map(|item| {
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    let route = item.route.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_navigate.emit(route.clone());
                    })
                };

                html! {
                    <button
                        key={item.label.clone()}
                        type="button"
                        class={classes!("nav-item", item.active.then_some("active"))}
                        data-route={item.route.clone()}
                        {onclick}
                    >
                        <span class="nav-glyph">{item.glyph.clone()}</span>
                        <span class="nav-label">{item.label.clone()}</span>
                        if item.active {
                            <span class="nav-indicator"></span>
                        }
                    </button>
                }
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_bar_props_creation() {
        let props = NavBarProps {
            destinations: vec![NavDestination::new("Home", "/", "🏠")],
            current_route: "/".into(),
            on_navigate: Callback::noop(),
            policy: MatchPolicy::default(),
            class: Classes::new(),
        };
        assert_eq!(props.destinations.len(), 1);
        assert_eq!(props.policy, MatchPolicy::AllMatches);
    }
}
