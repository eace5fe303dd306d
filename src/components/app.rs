use super::{settings_panel::SettingsPanel, swipe::Swipe, swipe_readout::SwipeReadout};
use crate::config::RawSwipeConfig;
use crate::model::SwipeResult;
use yew::prelude::*;

const SETTINGS_KEY: &str = "swipe_settings";

fn load_settings() -> RawSwipeConfig {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(Some(raw)) = store.get_item(SETTINGS_KEY) {
                match serde_json::from_str(&raw) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("ignoring stored swipe settings: {e}"),
                }
            }
        }
    }
    RawSwipeConfig::default()
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(load_settings);
    let last = use_state(|| None::<SwipeResult>);
    let count = use_state(|| 0_u32);

    // Persist settings changes
    {
        let settings = settings.clone();
        use_effect_with(*settings, move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(&*settings) {
                        let _ = store.set_item(SETTINGS_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    let on_change = {
        let settings = settings.clone();
        Callback::from(move |next: RawSwipeConfig| settings.set(next))
    };
    let on_reset = {
        let settings = settings.clone();
        Callback::from(move |_| settings.set(RawSwipeConfig::default()))
    };
    let on_swipe = {
        let last = last.clone();
        let count = count.clone();
        Callback::from(move |res: SwipeResult| {
            last.set(Some(res));
            count.set(*count + 1);
        })
    };

    let s = *settings;
    html! {
        <div style="display:flex; flex-wrap:wrap; gap:16px; padding:16px; color:#c9d1d9; background:#0d1117; min-height:100vh; box-sizing:border-box; font-family:sans-serif;">
            <div style="display:flex; flex-direction:column; gap:16px;">
                <SettingsPanel settings={s} {on_change} {on_reset} />
                <SwipeReadout last={*last} count={*count} />
            </div>
            <Swipe
                time_threshold={s.time_threshold}
                threshold_x={s.threshold_x}
                threshold_y={s.threshold_y}
                tick_ms={s.tick_ms}
                {on_swipe}
            >
                <div style="width:min(90vw, 480px); height:60vh; border:2px dashed #30363d; border-radius:12px; display:flex; align-items:center; justify-content:center; touch-action:none; user-select:none;">
                    {"Swipe here"}
                </div>
            </Swipe>
        </div>
    }
}
