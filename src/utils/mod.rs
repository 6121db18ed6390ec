pub mod collation;

pub use collation::locale_compare;
