//! Album tree synthesis and aggregation.
//!
//! [`builder`] turns a flat file list into one album per distinct
//! directory; [`aggregate`] then fills every album's deep aggregate
//! fields. Both run inside a rebuild and never touch a live snapshot.

pub mod aggregate;
pub mod builder;

pub use aggregate::aggregate_albums;
pub use builder::build_album_map;
