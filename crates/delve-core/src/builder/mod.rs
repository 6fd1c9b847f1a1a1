//! Generation passes
//!
//! Each builder owns one step of stage generation and works on a grid it is
//! lent. [`StageBuilder`] chains them in order.

mod connector;
mod door;
mod passage;
mod room;
mod stage;
mod trim;
mod wall;

pub use connector::{Connector, ConnectorBuilder, ConnectorMap};
pub use door::{DoorBuilder, group_cells};
pub use passage::PassageBuilder;
pub use room::RoomBuilder;
pub use stage::StageBuilder;
pub use trim::{PassageTrimmer, TrimReport, is_cul_de_sac};
pub use wall::{WallBuilder, wall_sites};
