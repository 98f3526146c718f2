pub mod profile;
pub mod session;
pub mod style;

pub use profile::{BaselineProfile, DeltaSet, Dimension, RhetoricalProfile};
pub use session::{EngineState, Session, StyledOutput};
pub use style::{output_style_menu, select_output_style, OutputStyle, CUSTOM_MENU_NUMBER};
