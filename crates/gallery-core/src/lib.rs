//! Platform-independent core of the 3D photo gallery: formation layouts,
//! tween scheduling, trackball camera and the viewport session state machine.

pub mod camera;
pub mod config;
pub mod constants;
pub mod controls;
pub mod css3d;
pub mod easing;
pub mod error;
pub mod formation;
pub mod host;
pub mod photo;
pub mod scene;
pub mod session;
pub mod transition;
pub mod tween;
pub mod viewport;

pub use camera::{Camera, CameraConfig};
pub use config::{RedrawPolicy, SessionConfig};
pub use error::{PhotoError, SessionError, TransitionError};
pub use formation::{generate, Formation, FormationKind, Formations, TargetTransform};
pub use host::{
    drive_frame, FrameHandle, FrameScheduler, LightboxPresenter, LightboxState, SceneRenderer,
};
pub use photo::Item;
pub use scene::{PanelObject, SceneRegistry};
pub use session::{Command, SessionPhase, ViewportSession};
pub use transition::{AnimationSet, AnimationStep, TweenSubject};
pub use viewport::{ViewportController, ViewportSize};
