// src/ui/interactions.rs

use crate::state::AppState;
use crate::ui::chart_tab::ChartTab;
use crate::ui::detail_dlg;
use gtk4::gdk;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{EventControllerMotion, EventControllerScroll, EventControllerScrollFlags, GestureDrag};
use std::cell::RefCell;
use std::rc::Rc;

/// Mouse handling of the nuclear chart: click to select, Shift+drag to pan,
/// wheel to zoom, hover for the nucleus name.
pub fn setup_interactions(state: Rc<RefCell<AppState>>, tab: &Rc<ChartTab>) {
  let drawing_area = &tab.drawing_area;

  // 1. PRESS / DRAG / RELEASE
  // GestureDrag reports offsets from the press point, which we turn back
  // into absolute positions for the session.
  let drag = GestureDrag::new();
  let s = state.clone();
  drag.connect_drag_begin(move |g, x, y| {
    let shift = g.current_event_state().contains(gdk::ModifierType::SHIFT_MASK);
    s.borrow_mut().chart.pointer_down(x, y, shift);
  });

  let s = state.clone();
  let da = drawing_area.clone();
  drag.connect_drag_update(move |g, dx, dy| {
    if let Some((x0, y0)) = g.start_point() {
      if s.borrow_mut().chart.pointer_move(x0 + dx, y0 + dy) {
        da.queue_draw();
      }
    }
  });

  let s = state.clone();
  let t = Rc::downgrade(tab);
  drag.connect_drag_end(move |g, dx, dy| {
    let Some((x0, y0)) = g.start_point() else { return };
    let selected = s.borrow_mut().chart.pointer_up(x0 + dx, y0 + dy);
    let Some(tab) = t.upgrade() else { return };
    tab.drawing_area.queue_draw();
    if selected.is_some() {
      detail_dlg::show(s.clone(), &tab);
    }
  });
  drawing_area.add_controller(drag);

  // 2. SCROLL (ZOOM about the pointer)
  let pointer = Rc::new(RefCell::new((0.0, 0.0)));
  let scroll = EventControllerScroll::new(EventControllerScrollFlags::VERTICAL);
  let s = state.clone();
  let da = drawing_area.clone();
  let p = pointer.clone();
  scroll.connect_scroll(move |_, _, dy| {
    let (x, y) = *p.borrow();
    if s.borrow_mut().chart.scroll(x, y, dy) {
      da.queue_draw();
    }
    glib::Propagation::Stop
  });
  drawing_area.add_controller(scroll);

  // 3. HOVER
  let motion = EventControllerMotion::new();
  let s = state.clone();
  let da = drawing_area.clone();
  motion.connect_motion(move |_, x, y| {
    *pointer.borrow_mut() = (x, y);
    let label = s.borrow().chart.hover(x, y);
    da.set_tooltip_text(label.as_deref());
  });
  drawing_area.add_controller(motion);
}
