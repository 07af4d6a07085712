pub mod animation;
pub mod component;
pub mod context;
pub mod runtime;
pub mod scheduler;
pub mod state;
pub mod validation;
pub mod widgets;

pub use component::{Component, ComponentId};
pub use context::Context;
pub use runtime::Runtime;

pub mod prelude {
    pub use crate::animation::{Easing, Tween};
    pub use crate::component::{Component, ComponentId};
    pub use crate::context::Context;
    pub use crate::runtime::Runtime;
    pub use crate::scheduler::{FrameHandle, Scheduler, TimerHandle};
    pub use crate::state::State;
    pub use crate::validation::{FieldError, Validatable, ValidationResult, Validator};
    pub use crate::widgets::Input;

    pub use pagedom::{Document, Element, Event, Viewport};
}
