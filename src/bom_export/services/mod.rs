//! Domain services: pure policy that combines wire data into SPDX
//! values (license expressions, relationship verbs, supplier cascade).

pub mod license;
pub mod relationship;
