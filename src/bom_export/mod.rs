//! BOM export domain: everything needed to turn a project version's
//! BOM into an SPDX 2.2 document, independent of transport and output
//! concerns.

pub mod domain;
pub mod services;
