//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads its route params and query string once, derives its data
//! from the catalog through `flows`, and hands plain values to `components`.

pub mod compare;
pub mod countries;
pub mod country_detail;
pub mod game;
pub mod home;
pub mod legal;
pub mod material_detail;
pub mod materials;
pub mod methodology;
pub mod not_found;
