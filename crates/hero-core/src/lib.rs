pub mod clock;
pub mod color;
pub mod composer;
pub mod config;
pub mod constants;
pub mod entrance;
pub mod error;
pub mod float;
pub mod geometry;
pub mod particles;
pub mod pose;
pub mod pulse;
pub mod scene;
pub mod starfield;
pub mod state;
pub mod viewport;

pub use clock::*;
pub use composer::*;
pub use config::*;
pub use entrance::*;
pub use error::*;
pub use float::*;
pub use geometry::*;
pub use particles::*;
pub use pose::*;
pub use pulse::*;
pub use scene::*;
pub use starfield::*;
pub use state::*;
pub use viewport::*;
