use yew::prelude::*;

use crate::model::{Direction, SwipeResult};

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeReadoutProps {
    pub last: Option<SwipeResult>,
    pub count: u32,
}

#[function_component]
pub fn SwipeReadout(props: &SwipeReadoutProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // arrow | label | state
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style = "min-width:40px; text-align:right; font-weight:600;";
    let last = props.last.unwrap_or_default();
    let payload = props
        .last
        .and_then(|r| serde_json::to_string(&r).ok())
        .unwrap_or_else(|| "-".to_string());
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            { for Direction::ALL.into_iter().map(|d| {
                let (color, state) = if last.contains(d) { ("#3fb950", "yes") } else { ("#8b949e", "no") };
                html! {
                    <div style={row_style}>
                        <span style={format!("{} color:{};", icon_style, color)}>{ d.arrow() }</span>
                        <span style={format!("{} color:{};", label_style, color)}>{ d.label() }</span>
                        <span style={format!("{} color:{};", value_style, color)}>{ state }</span>
                    </div>
                }
            }) }
            <div style={row_style}>
                <span style={label_style}>{"Swipes"}</span>
                <span style={value_style}>{ props.count }</span>
            </div>
            <code style="font-size:11px; opacity:0.8; word-break:break-all;">{ payload }</code>
        </div>
    }
}
