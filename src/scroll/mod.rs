//! Smooth in-page scrolling to named page sections.
//!
//! Each navigation request resolves its target element at invocation time
//! and runs a self-contained animation driven by requestAnimationFrame
//! timestamps. Elapsed wall-clock time, not tick count, drives progress.

mod easing;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

use self::easing::ease_in_out_cubic;

/// Vertical clearance for the sticky header, so a section heading is not
/// hidden behind it after scrolling.
pub const HEADER_OFFSET: f64 = 80.0;

/// Animation duration in milliseconds.
pub const SCROLL_DURATION_MS: f64 = 600.0;

/// Scrolls the viewport to the section with the given element id.
///
/// Unknown ids are ignored. A request started while another animation is
/// still running does not cancel it; both runs keep writing the scroll
/// position until they finish.
pub fn navigate_to(section_id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(section_id) else {
        return;
    };

    let start_y = window.scroll_y().unwrap_or(0.0);
    let target_y = target_offset(start_y, element.get_bounding_client_rect().top());
    animate(window, start_y, target_y - start_y);
}

/// Absolute target position for an element whose top edge currently sits at
/// `rect_top` relative to the viewport.
fn target_offset(scroll_y: f64, rect_top: f64) -> f64 {
    scroll_y + rect_top - HEADER_OFFSET
}

/// Activation record for one animation run. The frame handle has to stay
/// alive between ticks or the scheduled callback is dropped.
struct ScrollRun {
    frame: RefCell<Option<AnimationFrame>>,
    started: Cell<Option<f64>>,
}

fn animate(window: web_sys::Window, start_y: f64, diff: f64) {
    let run = Rc::new(ScrollRun {
        frame: RefCell::new(None),
        started: Cell::new(None),
    });
    schedule_tick(window, run, start_y, diff);
}

fn schedule_tick(window: web_sys::Window, run: Rc<ScrollRun>, start_y: f64, diff: f64) {
    let handle = request_animation_frame({
        let run = run.clone();
        let window = window.clone();
        move |timestamp| {
            run.frame.borrow_mut().take();
            let started = match run.started.get() {
                Some(started) => started,
                None => {
                    run.started.set(Some(timestamp));
                    timestamp
                }
            };
            let elapsed = timestamp - started;
            let progress = (elapsed / SCROLL_DURATION_MS).min(1.0);
            let eased = ease_in_out_cubic(progress);
            window.scroll_to_with_x_and_y(0.0, (start_y + diff * eased).round());
            if elapsed < SCROLL_DURATION_MS {
                schedule_tick(window.clone(), run, start_y, diff);
            }
        }
    });
    *run.frame.borrow_mut() = Some(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_offset_applies_header_clearance() {
        assert_eq!(target_offset(0.0, 500.0), 420.0);
        assert_eq!(target_offset(300.0, 120.0), 340.0);
    }

    #[test]
    fn test_target_offset_scrolling_up() {
        // Element above the viewport reports a negative top.
        assert_eq!(target_offset(1000.0, -600.0), 320.0);
    }
}
