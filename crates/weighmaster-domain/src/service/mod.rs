//! Domain services
//!
//! Pure functions used by the form, the store and the views.

pub mod display;
pub mod net_weight;
pub mod price;
pub mod search;

pub use display::group_thousands;
pub use net_weight::{calculate_net_weight, net_weight_of, parse_number};
pub use price::{price_hint, PriceHint};
pub use search::{entry_matches, normalize_term};
