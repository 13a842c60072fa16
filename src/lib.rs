pub mod config;
pub mod error;
pub mod frame;
pub mod indicator;
pub mod io;
pub mod node;
pub mod smoother;
pub mod types;
pub mod util;
pub mod visibility;
pub mod visited;
pub mod visualization;

pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use indicator::FocusIndicator;
pub use node::{DetachedNode, IndicatorNode};
pub use types::{CameraPose, DisplayTransform, SurfaceAnchorId, TrackingState};
