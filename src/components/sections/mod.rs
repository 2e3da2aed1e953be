//! Showcase sections, one per component family.

mod buttons;
mod cards;
mod charts;
mod forms;
mod images;
mod inputs;
mod popups;
mod typography;

pub use buttons::Buttons;
pub use cards::Cards;
pub use charts::Charts;
pub use forms::Forms;
pub use images::Images;
pub use inputs::Inputs;
pub use popups::Popups;
pub use typography::Typography;
