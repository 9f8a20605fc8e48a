/// Record identifiers are collision-resistant ids (`c` + 24 lowercase
/// alphanumerics), issued by the persistence layer.
pub type Cuid = String;

/// Categories a package or portfolio event can be filed under.
pub const CATEGORIES: &[&str] = &[
    "WEDDING",
    "PORTRAIT",
    "EVENT",
    "COMMERCIAL",
    "FAMILY",
    "PRODUCT",
];

/// Lifecycle states of a booking.
pub const BOOKING_STATUSES: &[&str] = &["PENDING", "CONFIRMED", "COMPLETED", "CANCELLED"];

/// Status assigned to a booking when it is first submitted.
pub const INITIAL_BOOKING_STATUS: &str = "PENDING";
