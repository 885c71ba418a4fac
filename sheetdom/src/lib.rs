pub mod animation;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod transitions;
pub mod types;

pub use animation::{collect_element_ids, AnimationState, PropertyValue, TransitionProperty};
pub use element::{find_element, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use hit::{hit_test, hit_test_any, hit_test_draggable};
pub use layout::{measure_text_height, LayoutResult, Rect};
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
