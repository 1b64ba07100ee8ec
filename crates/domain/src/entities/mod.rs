//! Domain entities - Objects with identity and lifecycle

mod favorites;
mod result_item;
mod stop;

pub use favorites::FavoritesList;
pub use result_item::{ItemAction, RenderInstruction, ResultItem};
pub use stop::{Departure, Stop};
