pub mod anchor;
pub mod counter;
pub mod filter;
pub mod parallax;
pub mod reveal;
pub mod scrollspy;
pub mod tilt;

pub use anchor::AnchorController;
pub use counter::CounterController;
pub use filter::FilterController;
pub use parallax::ParallaxController;
pub use reveal::{RevealController, StaggerController};
pub use scrollspy::ScrollspyController;
pub use tilt::TiltController;
