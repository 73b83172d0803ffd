use glam::Vec2;
use smallvec::SmallVec;

/// Latest pointer coordinate in CSS client pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for PointerState {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// A raw input event reduced to the coordinates we care about.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// pointermove / mousemove
    Mouse(Vec2),
    /// touchmove; contacts in event order
    Touch(SmallVec<[Vec2; 2]>),
}

impl PointerInput {
    /// The single coordinate this input stands for, if it has a usable one.
    pub fn coordinate(&self) -> Option<Vec2> {
        let p = match self {
            PointerInput::Mouse(p) => *p,
            PointerInput::Touch(contacts) => *contacts.first()?,
        };
        p.is_finite().then_some(p)
    }
}

/// Owns the process-wide pointer coordinate. Handlers write into it; frame
/// ticks read a copy via [`PointerSource::current`].
#[derive(Clone, Debug, Default)]
pub struct PointerSource {
    state: PointerState,
}

impl PointerSource {
    pub fn new(initial: PointerState) -> Self {
        Self { state: initial }
    }

    /// Start at the middle of the viewport.
    pub fn centered(viewport_width: f32, viewport_height: f32) -> Self {
        Self::new(PointerState::new(viewport_width / 2.0, viewport_height / 2.0))
    }

    #[inline]
    pub fn current(&self) -> PointerState {
        self.state
    }

    /// Overwrite the state with the input's coordinate. Inputs without a
    /// usable coordinate leave the state untouched and return `false`.
    pub fn observe(&mut self, input: &PointerInput) -> bool {
        match input.coordinate() {
            Some(p) => {
                self.state = p.into();
                true
            }
            None => {
                log::trace!("[pointer] ignoring input without coordinates");
                false
            }
        }
    }

    /// Keep the coordinate inside a shrunken viewport.
    pub fn clamp_to_viewport(&mut self, width: f32, height: f32, margin: f32) {
        self.state.x = self.state.x.min(width - margin);
        self.state.y = self.state.y.min(height - margin);
    }
}
