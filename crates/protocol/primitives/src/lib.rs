//! Block, header and signature types shared by the rollnode storage, pending-header
//! tracking and submission components.
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod header;
pub use header::{Header, SignedHeader};

mod data;
pub use data::BlockData;

mod signature;
pub use signature::Signature;

mod identity;
pub use identity::{HEADER_ID_DOMAIN, header_id};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
