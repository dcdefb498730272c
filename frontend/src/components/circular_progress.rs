use shared::{ProgressSpec, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use yew::prelude::*;

use crate::services::logging::Logger;

pub const TRACK_COLOR: &str = "#f0f0f0";
pub const INDICATOR_COLOR: &str = "#c878c8";
const CONTENT_STYLE: &str =
    "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;";

#[derive(Properties, PartialEq)]
pub struct CircularProgressProps {
    /// Percentage in [0, 100]; passed through unclamped
    pub value: f64,
    #[prop_or(DEFAULT_SIZE)]
    pub size: f64,
    #[prop_or(DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub track_class: Classes,
    #[prop_or_default]
    pub indicator_class: Classes,
    #[prop_or(AttrValue::Static(TRACK_COLOR))]
    pub track_color: AttrValue,
    #[prop_or(AttrValue::Static(INDICATOR_COLOR))]
    pub indicator_color: AttrValue,
    /// Overlay centered on the ring
    #[prop_or_default]
    pub children: Children,
}

/// Warning logged when the spec is outside the rendering contract.
/// The ring is still drawn.
fn degenerate_warning(spec: &ProgressSpec) -> Option<String> {
    spec.validate()
        .err()
        .map(|e| format!("Rendering degenerate ring: {}", e))
}

/// Ring whose filled arc is `value / 100` of the circumference, starting at
/// 12 o'clock and sweeping clockwise.
#[function_component(CircularProgress)]
pub fn circular_progress(props: &CircularProgressProps) -> Html {
    let spec = ProgressSpec::new(props.value)
        .with_size(props.size)
        .with_stroke_width(props.stroke_width);

    use_effect_with(spec, |spec| {
        if let Some(warning) = degenerate_warning(spec) {
            Logger::warn_with_component("circular-progress", &warning);
        }
        || ()
    });

    let geometry = spec.geometry();
    let size = props.size.to_string();
    let center = geometry.center.to_string();
    let radius = geometry.radius.to_string();
    let stroke_width = props.stroke_width.to_string();
    let container_style = format!(
        "position: relative; display: inline-flex; width: {0}px; height: {0}px;",
        size
    );
    let track_class = classes!("circular-progress-track", props.track_class.clone());
    let indicator_class = classes!("circular-progress-indicator", props.indicator_class.clone());

    html! {
        <div
            class={classes!("circular-progress", props.class.clone())}
            style={container_style}
        >
            <svg width={size.clone()} height={size.clone()} viewBox={geometry.view_box()}>
                <g transform={geometry.rotation()}>
                    <circle
                        class={track_class}
                        cx={center.clone()}
                        cy={center.clone()}
                        r={radius.clone()}
                        fill="none"
                        stroke={props.track_color.clone()}
                        stroke-width={stroke_width.clone()}
                    />
                    <circle
                        class={indicator_class}
                        cx={center.clone()}
                        cy={center}
                        r={radius}
                        fill="none"
                        stroke={props.indicator_color.clone()}
                        stroke-width={stroke_width}
                        stroke-dasharray={geometry.circumference.to_string()}
                        stroke-dashoffset={geometry.dash_offset.to_string()}
                        stroke-linecap="round"
                        style="transition: stroke-dashoffset 0.35s ease;"
                    />
                </g>
            </svg>
            if !props.children.is_empty() {
                <div
                    class="circular-progress-content"
                    style={CONTENT_STYLE}
                >
                    {for props.children.iter()}
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_progress_props_creation() {
        let props = CircularProgressProps {
            value: 50.0,
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            class: Classes::new(),
            track_class: Classes::new(),
            indicator_class: Classes::new(),
            track_color: AttrValue::Static(TRACK_COLOR),
            indicator_color: AttrValue::Static(INDICATOR_COLOR),
            children: Children::default(),
        };
        assert_eq!(props.size, 120.0);
        assert_eq!(props.stroke_width, 8.0);
        assert!(props.children.is_empty());
    }

    #[test]
    fn test_no_warning_for_valid_spec() {
        assert_eq!(degenerate_warning(&ProgressSpec::new(0.0)), None);
        assert_eq!(degenerate_warning(&ProgressSpec::new(100.0)), None);
    }

    #[test]
    fn test_warning_for_out_of_range_value() {
        let warning = degenerate_warning(&ProgressSpec::new(140.0)).unwrap();
        assert_eq!(warning, "Rendering degenerate ring: Progress value 140 is outside 0..=100");
    }

    #[test]
    fn test_warning_for_stroke_wider_than_ring() {
        let spec = ProgressSpec::new(50.0).with_size(10.0).with_stroke_width(12.0);
        let warning = degenerate_warning(&spec).unwrap();
        assert!(warning.contains("Stroke width 12 must be positive and smaller than size 10"));
    }
}
