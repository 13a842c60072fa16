/// On/off opacity toggle, independent of the tracking state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityController {
    opacity: f32,
}

impl VisibilityController {
    pub fn new(visible: bool) -> VisibilityController {
        VisibilityController {
            opacity: if visible { 1.0 } else { 0.0 },
        }
    }

    pub fn show(&mut self) -> f32 {
        self.opacity = 1.0;
        self.opacity
    }

    pub fn hide(&mut self) -> f32 {
        self.opacity = 0.0;
        self.opacity
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        VisibilityController::new(false)
    }
}
