//! `topas` is a small set of fast and reliable readers for the result files
//! written by the TOPAS Monte Carlo toolkit
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of the reader crates.
#[doc(inline)]
pub use topas_utils as utils;

#[cfg(feature = "binned")]
#[cfg_attr(docsrs, doc(cfg(feature = "binned")))]
#[doc(inline)]
pub use topas_binned as binned;

#[cfg(feature = "ntuple")]
#[cfg_attr(docsrs, doc(cfg(feature = "ntuple")))]
#[doc(inline)]
pub use topas_ntuple as ntuple;
