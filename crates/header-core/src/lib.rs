pub mod constants;
pub mod error;
pub mod state;
pub mod style;
pub mod styler;

pub use error::StylerError;
pub use state::*;
pub use style::HeaderStyle;
pub use styler::*;
