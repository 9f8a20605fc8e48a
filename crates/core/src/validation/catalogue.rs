//! Declared rule chains, one per endpoint.
//!
//! Chains are static data built once and shared by every request. Fragments
//! reused across endpoints (pagination, ids, identity fields) are `const`
//! rules composed into each chain.

use crate::types::{BOOKING_STATUSES, CATEGORIES};

use super::checks::Check;
use super::rules::{FieldRule, RuleChain};

// ---------------------------------------------------------------------------
// Shared fragments
// ---------------------------------------------------------------------------

/// Largest page size any list endpoint serves.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Highest page number a list endpoint accepts.
pub const MAX_PAGE: i64 = 10_000;

const PAGE: FieldRule = FieldRule::query(
    "page",
    Check::Integer {
        min: 1,
        max: MAX_PAGE,
    },
    "Page must be a positive integer",
)
.optional();

const LIMIT: FieldRule = FieldRule::query(
    "limit",
    Check::Integer {
        min: 1,
        max: MAX_PAGE_SIZE,
    },
    "Limit must be between 1 and 100",
)
.optional();

const ID: FieldRule = FieldRule::path("id", Check::Cuid, "Invalid ID format");

const NAME: Check = Check::Text { min: 2, max: 50 };
const NAME_MESSAGE: &str = "Name must be between 2 and 50 characters";

const EMAIL_MESSAGE: &str = "Please provide a valid email";

const PHONE_MESSAGE: &str = "Please provide a valid phone number";

const CATEGORY: Check = Check::OneOf(CATEGORIES);
const CATEGORY_MESSAGE: &str =
    "Category must be one of WEDDING, PORTRAIT, EVENT, COMMERCIAL, FAMILY, PRODUCT";

const STATUS: Check = Check::OneOf(BOOKING_STATUSES);
const STATUS_MESSAGE: &str = "Status must be one of PENDING, CONFIRMED, COMPLETED, CANCELLED";

const PACKAGE_NAME: Check = Check::Text { min: 2, max: 100 };
const PACKAGE_NAME_MESSAGE: &str = "Package name must be between 2 and 100 characters";

const DESCRIPTION: Check = Check::Text { min: 10, max: 2000 };
const DESCRIPTION_MESSAGE: &str = "Description must be between 10 and 2000 characters";

const PRICE: Check = Check::Number {
    min: 0.0,
    max: 1_000_000.0,
};
const PRICE_MESSAGE: &str = "Price must be a non-negative number";

const DURATION: Check = Check::Integer { min: 1, max: 24 };
const DURATION_MESSAGE: &str = "Duration must be between 1 and 24 hours";

const FEATURES: Check = Check::StringList {
    max_items: 20,
    max_len: 120,
};
const FEATURES_MESSAGE: &str = "Features must be a list of up to 20 short descriptions";

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// `POST /auth/register`
pub static REGISTER: RuleChain = RuleChain {
    name: "auth.register",
    rules: &[
        FieldRule::body("name", NAME, NAME_MESSAGE),
        FieldRule::body("email", Check::Email, EMAIL_MESSAGE),
        FieldRule::body(
            "password",
            Check::StrongPassword { min_len: 8 },
            "Password must be at least 8 characters and contain an uppercase letter, a lowercase letter and a number",
        ),
        FieldRule::body("phone", Check::Phone, PHONE_MESSAGE).optional(),
    ],
};

// ---------------------------------------------------------------------------
// Packages
// ---------------------------------------------------------------------------

/// `GET /packages`
pub static LIST_PACKAGES: RuleChain = RuleChain {
    name: "packages.list",
    rules: &[
        PAGE,
        LIMIT,
        FieldRule::query("category", CATEGORY, CATEGORY_MESSAGE).optional(),
        FieldRule::query("featured", Check::Boolean, "Featured must be true or false").optional(),
    ],
};

/// `GET /packages/{id}`
pub static GET_PACKAGE: RuleChain = RuleChain {
    name: "packages.get",
    rules: &[ID],
};

/// `POST /packages`
pub static CREATE_PACKAGE: RuleChain = RuleChain {
    name: "packages.create",
    rules: &[
        FieldRule::body("name", PACKAGE_NAME, PACKAGE_NAME_MESSAGE),
        FieldRule::body("description", DESCRIPTION, DESCRIPTION_MESSAGE),
        FieldRule::body("category", CATEGORY, CATEGORY_MESSAGE),
        FieldRule::body("price", PRICE, PRICE_MESSAGE),
        FieldRule::body("duration_hours", DURATION, DURATION_MESSAGE).optional(),
        FieldRule::body("features", FEATURES, FEATURES_MESSAGE).optional(),
    ],
};

/// `PUT /packages/{id}`: a partial update, every body field optional.
pub static UPDATE_PACKAGE: RuleChain = RuleChain {
    name: "packages.update",
    rules: &[
        ID,
        FieldRule::body("name", PACKAGE_NAME, PACKAGE_NAME_MESSAGE).optional(),
        FieldRule::body("description", DESCRIPTION, DESCRIPTION_MESSAGE).optional(),
        FieldRule::body("category", CATEGORY, CATEGORY_MESSAGE).optional(),
        FieldRule::body("price", PRICE, PRICE_MESSAGE).optional(),
        FieldRule::body("duration_hours", DURATION, DURATION_MESSAGE).optional(),
        FieldRule::body("features", FEATURES, FEATURES_MESSAGE).optional(),
    ],
};

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

/// `POST /bookings`
pub static CREATE_BOOKING: RuleChain = RuleChain {
    name: "bookings.create",
    rules: &[
        FieldRule::body("package_id", Check::Cuid, "Invalid package ID"),
        FieldRule::body("event_date", Check::Date, "Event date must be a valid date"),
        FieldRule::body(
            "event_location",
            Check::Text { min: 2, max: 200 },
            "Event location must be between 2 and 200 characters",
        ),
        FieldRule::body("customer_name", NAME, NAME_MESSAGE),
        FieldRule::body("customer_email", Check::Email, EMAIL_MESSAGE),
        FieldRule::body("customer_phone", Check::Phone, PHONE_MESSAGE).optional(),
        FieldRule::body(
            "notes",
            Check::Text { min: 0, max: 1000 },
            "Notes must be at most 1000 characters",
        )
        .optional(),
    ],
};

/// `GET /bookings`
pub static LIST_BOOKINGS: RuleChain = RuleChain {
    name: "bookings.list",
    rules: &[
        PAGE,
        LIMIT,
        FieldRule::query("status", STATUS, STATUS_MESSAGE).optional(),
    ],
};

/// `GET /bookings/{id}`
pub static GET_BOOKING: RuleChain = RuleChain {
    name: "bookings.get",
    rules: &[ID],
};

/// `PATCH /bookings/{id}/status`
pub static UPDATE_BOOKING_STATUS: RuleChain = RuleChain {
    name: "bookings.status",
    rules: &[ID, FieldRule::body("status", STATUS, STATUS_MESSAGE)],
};

// ---------------------------------------------------------------------------
// Portfolio events
// ---------------------------------------------------------------------------

/// `POST /events`
pub static CREATE_EVENT: RuleChain = RuleChain {
    name: "events.create",
    rules: &[
        FieldRule::body(
            "title",
            Check::Text { min: 2, max: 100 },
            "Title must be between 2 and 100 characters",
        ),
        FieldRule::body("category", CATEGORY, CATEGORY_MESSAGE),
        FieldRule::body("event_date", Check::Date, "Event date must be a valid date"),
        FieldRule::body(
            "description",
            Check::Text { min: 0, max: 2000 },
            "Description must be at most 2000 characters",
        )
        .optional(),
    ],
};

/// `GET /events`
pub static LIST_EVENTS: RuleChain = RuleChain {
    name: "events.list",
    rules: &[
        PAGE,
        LIMIT,
        FieldRule::query("category", CATEGORY, CATEGORY_MESSAGE).optional(),
    ],
};

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

/// `POST /contact`
pub static CONTACT: RuleChain = RuleChain {
    name: "contact.submit",
    rules: &[
        FieldRule::body("name", NAME, NAME_MESSAGE),
        FieldRule::body("email", Check::Email, EMAIL_MESSAGE),
        FieldRule::body(
            "subject",
            Check::Text { min: 2, max: 120 },
            "Subject must be between 2 and 120 characters",
        )
        .optional(),
        FieldRule::body(
            "message",
            Check::Text { min: 10, max: 2000 },
            "Message must be between 10 and 2000 characters",
        ),
    ],
};

/// Every declared chain, for diagnostics and tests.
pub fn all() -> [&'static RuleChain; 12] {
    [
        &REGISTER,
        &LIST_PACKAGES,
        &GET_PACKAGE,
        &CREATE_PACKAGE,
        &UPDATE_PACKAGE,
        &CREATE_BOOKING,
        &LIST_BOOKINGS,
        &GET_BOOKING,
        &UPDATE_BOOKING_STATUS,
        &CREATE_EVENT,
        &LIST_EVENTS,
        &CONTACT,
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::validation::request::RequestData;
    use crate::validation::rules::FieldFailure;
    use serde_json::json;

    const PACKAGE_ID: &str = "ckx1a2b3c4d5e6f7g8h9i0j1k";

    #[test]
    fn chain_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|chain| chain.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn every_rule_has_a_message() {
        for chain in all() {
            for rule in chain.rules {
                assert!(
                    !rule.message.is_empty(),
                    "{} has a rule on {} without a message",
                    chain.name,
                    rule.field
                );
            }
        }
    }

    #[test]
    fn register_normalizes_identity_fields() {
        let mut request = RequestData::new().with_body(json!({
            "name": "  Ada Obi ",
            "email": "  Foo@Bar.COM ",
            "password": "Shutter123",
        }));
        assert!(REGISTER.run(&mut request).is_valid());
        assert_eq!(request.body["name"], json!("Ada Obi"));
        assert_eq!(request.body["email"], json!("foo@bar.com"));
    }

    #[test]
    fn register_reports_every_bad_field() {
        let mut request = RequestData::new().with_body(json!({
            "phone": "abc",
            "password": "abc",
            "email": "nope",
            "name": "A",
        }));
        let outcome = REGISTER.run(&mut request);
        let fields: Vec<_> = outcome.failures().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["body.name", "body.email", "body.password", "body.phone"]
        );
    }

    #[test]
    fn list_packages_rejects_out_of_range_pagination() {
        let mut request = RequestData::new().with_query([("page", "0"), ("limit", "500")]);
        let outcome = LIST_PACKAGES.run(&mut request);
        assert_eq!(
            outcome.failures(),
            &[
                FieldFailure::new("query.page", "Page must be a positive integer"),
                FieldFailure::new("query.limit", "Limit must be between 1 and 100"),
            ]
        );
    }

    #[test]
    fn list_packages_accepts_filters() {
        let mut request = RequestData::new().with_query([
            ("page", "2"),
            ("limit", "10"),
            ("category", "WEDDING"),
            ("featured", "true"),
        ]);
        assert!(LIST_PACKAGES.run(&mut request).is_valid());
        assert_eq!(request.query["page"], json!(2));
        assert_eq!(request.query["featured"], json!(true));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut request = RequestData::new().with_query([("category", "FUNERAL")]);
        let outcome = LIST_EVENTS.run(&mut request);
        assert_eq!(outcome.failures()[0].field, "query.category");
    }

    #[test]
    fn create_booking_accepts_complete_request() {
        let mut request = RequestData::new().with_body(json!({
            "package_id": PACKAGE_ID,
            "event_date": "2026-12-05",
            "event_location": " Eko Hotel, Lagos ",
            "customer_name": "Ada Obi",
            "customer_email": "ADA@example.com",
            "customer_phone": "+234 803 555 0199",
        }));
        assert!(CREATE_BOOKING.run(&mut request).is_valid());
        assert_eq!(request.body["event_location"], json!("Eko Hotel, Lagos"));
        assert_eq!(request.body["customer_email"], json!("ada@example.com"));
    }

    #[test]
    fn booking_status_checks_path_and_body() {
        let mut request = RequestData::new()
            .with_path([("id", "42")])
            .with_body(json!({"status": "DONE"}));
        let outcome = UPDATE_BOOKING_STATUS.run(&mut request);
        let fields: Vec<_> = outcome.failures().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["path.id", "body.status"]);
    }

    #[test]
    fn package_update_allows_empty_body() {
        let mut request = RequestData::new()
            .with_path([("id", PACKAGE_ID)])
            .with_body(json!({}));
        assert!(UPDATE_PACKAGE.run(&mut request).is_valid());
    }

    #[test]
    fn create_package_normalizes_price_and_features() {
        let mut request = RequestData::new().with_body(json!({
            "name": "Gold Wedding",
            "description": "Full-day coverage with two shooters.",
            "category": "WEDDING",
            "price": "2500",
            "features": [" Drone coverage ", "Printed album"],
        }));
        assert!(CREATE_PACKAGE.run(&mut request).is_valid());
        assert_eq!(request.body["price"], json!(2500.0));
        assert_eq!(
            request.body["features"],
            json!(["Drone coverage", "Printed album"])
        );
    }

    #[test]
    fn contact_message_needs_substance() {
        let mut request = RequestData::new().with_body(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "hi",
        }));
        let outcome = CONTACT.run(&mut request);
        assert_eq!(
            outcome.failures(),
            &[FieldFailure::new(
                "body.message",
                "Message must be between 10 and 2000 characters"
            )]
        );
    }
}
