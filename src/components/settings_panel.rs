use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{RawSwipeConfig, REFERENCE_TICK_MS};

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: RawSwipeConfig,
    pub on_change: Callback<RawSwipeConfig>,
    pub on_reset: Callback<()>,
}

/// Empty input means "unset", which the swipe surface rejects.
pub fn parse_threshold(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn display_value(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn field_cb(
    settings: RawSwipeConfig,
    on_change: &Callback<RawSwipeConfig>,
    apply: fn(&mut RawSwipeConfig, Option<f64>),
) -> Callback<Event> {
    let cb = on_change.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = settings;
        apply(&mut next, parse_threshold(&input.value()));
        cb.emit(next);
    })
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let s = props.settings;
    let time_cb = field_cb(s, &props.on_change, |c, v| c.time_threshold = v);
    let x_cb = field_cb(s, &props.on_change, |c, v| c.threshold_x = v);
    let y_cb = field_cb(s, &props.on_change, |c, v| c.threshold_y = v);
    let tick_cb = {
        let cb = props.on_change.clone();
        Callback::from(move |_| {
            let mut next = s;
            next.tick_ms = match s.tick_ms {
                Some(_) => None,
                None => Some(REFERENCE_TICK_MS),
            };
            cb.emit(next);
        })
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let input_style = "width:80px; text-align:right;";
    html! {<div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:280px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
        <h3 style="margin:0; font-size:18px;">{"Thresholds"}</h3>
        <label style={row_style}>
            <span style={label_style}>{"Time (ms)"}</span>
            <input type="number" style={input_style} value={display_value(s.time_threshold)} onchange={time_cb} />
        </label>
        <label style={row_style}>
            <span style={label_style}>{"Distance X (px)"}</span>
            <input type="number" style={input_style} value={display_value(s.threshold_x)} onchange={x_cb} />
        </label>
        <label style={row_style}>
            <span style={label_style}>{"Distance Y (px)"}</span>
            <input type="number" style={input_style} value={display_value(s.threshold_y)} onchange={y_cb} />
        </label>
        <label style={format!("{} cursor:pointer;", row_style)}>
            <input type="checkbox" checked={s.tick_ms.is_some()} onclick={tick_cb} />
            <span>{ format!("Measure in {REFERENCE_TICK_MS} ms ticks") }</span>
        </label>
        <button onclick={reset_cb} style="align-self:flex-start;">{"Reset to defaults"}</button>
        <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"Clearing a field leaves the last valid value in force; see the console for details."}</div>
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_threshold_handles_blank_and_garbage() {
        assert_eq!(parse_threshold(" 45 "), Some(45.0));
        assert_eq!(parse_threshold("0"), Some(0.0));
        assert_eq!(parse_threshold("-3.5"), Some(-3.5));
        assert_eq!(parse_threshold(""), None);
        assert_eq!(parse_threshold("abc"), None);
        assert_eq!(parse_threshold("inf"), None);
    }
}
