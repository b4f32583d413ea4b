//! Cache Key Builders
//!
//! Canonical keys for cached entity reads, plus the prefixes used to
//! invalidate a whole entity family with `delete_pattern`.
//!
//! Ids are escaped before they are embedded, so an id containing `:` can
//! never produce another builder's key (`user("username:ada")` is
//! `user:username%3Aada`, not `user:username:ada`).

use std::borrow::Cow;

/// Percent-escapes the separator (and the escape character itself) in an id.
fn segment(id: &str) -> Cow<'_, str> {
    if id.contains([':', '%']) {
        Cow::Owned(id.replace('%', "%25").replace(':', "%3A"))
    } else {
        Cow::Borrowed(id)
    }
}

// == Cache Keys ==
/// Namespace for key builders. All builders are pure and injective.
pub struct CacheKeys;

impl CacheKeys {
    /// Prefix shared by all single-product keys
    pub const PRODUCTS_PREFIX: &'static str = "product";
    /// Prefix shared by all single-solution keys
    pub const SOLUTIONS_PREFIX: &'static str = "solution";
    /// Prefix shared by all single-customer keys
    pub const CUSTOMERS_PREFIX: &'static str = "customer";
    /// Prefix shared by all user keys
    pub const USERS_PREFIX: &'static str = "user";

    pub fn product(id: &str) -> String {
        format!("product:{}", segment(id))
    }

    pub fn products() -> String {
        "products:all".to_string()
    }

    /// Product together with its tasks, licenses and outcomes.
    pub fn product_with_relations(id: &str) -> String {
        format!("product:{}:full", segment(id))
    }

    pub fn solution(id: &str) -> String {
        format!("solution:{}", segment(id))
    }

    pub fn solutions() -> String {
        "solutions:all".to_string()
    }

    pub fn solution_with_relations(id: &str) -> String {
        format!("solution:{}:full", segment(id))
    }

    pub fn customer(id: &str) -> String {
        format!("customer:{}", segment(id))
    }

    pub fn customers() -> String {
        "customers:all".to_string()
    }

    pub fn user(id: &str) -> String {
        format!("user:{}", segment(id))
    }

    pub fn user_by_username(username: &str) -> String {
        format!("user:username:{}", segment(username))
    }

    pub fn tags() -> String {
        "tags:all".to_string()
    }
}
