//! Domain model of the export: hub wire types, SPDX 2.2 document
//! shapes, identifier hygiene, purl construction and the enrichment
//! outcomes that connect them.

pub mod component;
pub mod document;
pub mod enrichment;
pub mod identifier;
pub mod purl;
