pub mod bikram_sambat;
pub mod config;
pub mod date;
pub mod display;
pub mod i18n;
pub mod numerals;
pub mod slug;
pub mod tags;

pub use bikram_sambat::{BsDate, CalendarError};
pub use config::{load_site_config, read_site_config, site_config};
pub use date::*;
pub use display::*;
pub use i18n::{Catalog, TermDictionary};
pub use numerals::{localize_digits, to_nepali_numerals};
pub use slug::*;
pub use tags::tag_description;
