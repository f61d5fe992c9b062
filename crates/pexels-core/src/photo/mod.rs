//! Photo data as returned by the Pexels API.
//!
//! These types are the raw material of the asset source. Host-facing views
//! are built over them in `pexels-asset-source`.

mod paged;
mod record;
mod size;

pub use paged::{PagedResult, QueryType, RequestSignature};
pub use record::RawPhotoRecord;
pub use size::ImageSize;
