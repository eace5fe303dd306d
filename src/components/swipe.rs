use web_sys::{TouchEvent, TouchList};
use yew::prelude::*;

use crate::config::{DEFAULT_THRESHOLD_X, DEFAULT_THRESHOLD_Y, DEFAULT_TIME_THRESHOLD_MS, RawSwipeConfig};
use crate::model::{Point, SwipeResult};
use crate::state::SwipeDetector;

fn default_class() -> Classes {
    classes!("height")
}

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeProps {
    #[prop_or_default]
    pub children: Html,
    #[prop_or_else(default_class)]
    pub class: Classes,
    /// Minimum touch duration in ms. `None` is rejected and the previous value kept.
    #[prop_or(Some(DEFAULT_TIME_THRESHOLD_MS))]
    pub time_threshold: Option<f64>,
    #[prop_or(Some(DEFAULT_THRESHOLD_X))]
    pub threshold_x: Option<f64>,
    #[prop_or(Some(DEFAULT_THRESHOLD_Y))]
    pub threshold_y: Option<f64>,
    #[prop_or_default]
    pub tick_ms: Option<f64>,
    #[prop_or_default]
    pub on_swipe: Callback<SwipeResult>,
}

impl SwipeProps {
    fn raw_config(&self) -> RawSwipeConfig {
        RawSwipeConfig {
            time_threshold: self.time_threshold,
            threshold_x: self.threshold_x,
            threshold_y: self.threshold_y,
            tick_ms: self.tick_ms,
        }
    }
}

// Needs a live DOM `TouchList`, so only the helpers below are covered by native tests.
fn first_point(list: &TouchList) -> Option<Point> {
    list.item(0)
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
}

/// Push a props update into the detector field by field. Returns false if any field
/// was rejected; those keep their previous value.
fn sync_config(detector: &mut SwipeDetector, raw: RawSwipeConfig) -> bool {
    detector.reconfigure(raw).is_ok()
}

fn handle_touch_start(detector: &mut SwipeDetector, point: Option<Point>, at_ms: f64) {
    match point {
        Some(p) => detector.touch_start(p, at_ms),
        None => log::debug!("touchstart without a contact point; ignored"),
    }
}

fn handle_touch_end(detector: &mut SwipeDetector, point: Option<Point>, at_ms: f64) -> Option<SwipeResult> {
    match point {
        Some(p) => detector.touch_end(p, at_ms),
        None => {
            log::debug!("touchend without a contact point; dropping gesture");
            detector.cancel();
            None
        }
    }
}

/// Shared by touchcancel and unmount.
fn discard_gesture(detector: &mut SwipeDetector) {
    detector.cancel();
}

/// Wraps its children and reports swipes performed on them.
#[function_component]
pub fn Swipe(props: &SwipeProps) -> Html {
    let detector = use_mut_ref(SwipeDetector::default);

    // Re-validate whenever thresholds change
    {
        let detector = detector.clone();
        use_effect_with(props.raw_config(), move |raw| {
            if !sync_config(&mut detector.borrow_mut(), *raw) {
                log::error!("swipe props partially rejected; see previous errors");
            }
            || ()
        });
    }
    // Teardown: an unmounted surface must not keep a half-finished gesture
    {
        let detector = detector.clone();
        use_effect_with((), move |_| {
            move || discard_gesture(&mut detector.borrow_mut())
        });
    }

    let ontouchstart = {
        let detector = detector.clone();
        Callback::from(move |e: TouchEvent| {
            handle_touch_start(&mut detector.borrow_mut(), first_point(&e.touches()), e.time_stamp());
        })
    };
    let ontouchend = {
        let detector = detector.clone();
        let on_swipe = props.on_swipe.clone();
        Callback::from(move |e: TouchEvent| {
            let point = first_point(&e.changed_touches());
            let res = handle_touch_end(&mut detector.borrow_mut(), point, e.time_stamp());
            if let Some(res) = res {
                on_swipe.emit(res);
            }
        })
    };
    let ontouchcancel = {
        let detector = detector.clone();
        Callback::from(move |_: TouchEvent| discard_gesture(&mut detector.borrow_mut()))
    };

    html! {
        <div class={props.class.clone()} {ontouchstart} {ontouchend} {ontouchcancel}>
            { props.children.clone() }
        </div>
    }
}
