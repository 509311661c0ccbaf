pub mod constants;
pub mod drag;
pub mod error;
pub mod export;
pub mod intake;
pub mod mapping;
pub mod readout;
pub mod state;

pub use constants::*;
pub use drag::*;
pub use error::CustomizerError;
pub use intake::*;
pub use mapping::*;
pub use readout::*;
pub use state::*;
