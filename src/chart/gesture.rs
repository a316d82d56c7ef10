// src/chart/gesture.rs

/// Pointer travel below which a press-release counts as a click.
pub const CLICK_THRESHOLD_PX: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
  #[default]
  Idle,
  Pressed {
    origin: (f64, f64),
    last: (f64, f64),
    shift: bool,
  },
}

/// What a completed press-release turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEnd {
  /// Short travel: try to select at this position.
  Click { x: f64, y: f64 },
  Drag,
  /// Release without a preceding press.
  None,
}

/// Tells clicks from drags. Shift-drags additionally report pan deltas.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
  state: GestureState,
}

impl GestureTracker {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> GestureState {
    self.state
  }

  pub fn pointer_down(&mut self, x: f64, y: f64, shift: bool) {
    self.state = GestureState::Pressed {
      origin: (x, y),
      last: (x, y),
      shift,
    };
  }

  /// Returns the pixel delta to pan by when a shift-drag is active.
  pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
    match &mut self.state {
      GestureState::Pressed { last, shift, .. } => {
        let delta = (x - last.0, y - last.1);
        *last = (x, y);
        if *shift {
          Some(delta)
        } else {
          None
        }
      }
      GestureState::Idle => None,
    }
  }

  pub fn pointer_up(&mut self, x: f64, y: f64) -> GestureEnd {
    let end = match self.state {
      GestureState::Pressed { origin, .. } => {
        let dist = (x - origin.0).hypot(y - origin.1);
        if dist < CLICK_THRESHOLD_PX {
          GestureEnd::Click { x, y }
        } else {
          GestureEnd::Drag
        }
      }
      GestureState::Idle => GestureEnd::None,
    };
    self.state = GestureState::Idle;
    end
  }
}
