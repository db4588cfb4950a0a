mod flags;
mod identifier;
mod states;
mod wifi;

pub use flags::*;
pub use identifier::*;
pub use states::*;
pub use wifi::*;
