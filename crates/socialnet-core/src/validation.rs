//! Field-rule validation for domain entities.
//!
//! Pure functions of entity state: no I/O, no side effects. Rules that need a
//! persistence lookup (username/email uniqueness) do not live here; they are
//! enforced by database constraints and surfaced as `RepoError::Constraint`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{GroupBlock, Like, Post, User};

/// Maximum allowed length for post content, in characters.
pub const MAX_CONTENT_LEN: usize = 1000;
/// Maximum allowed length for a username, in characters.
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum allowed length for an email address, in characters.
pub const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// Outcome of validating one entity: an ordered list of rule errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All errors joined with `"; "`, in rule order.
    pub fn joined(&self) -> String {
        self.errors.join("; ")
    }

    fn check(&mut self, ok: bool, message: &str) {
        if !ok {
            self.errors.push(message.to_string());
        }
    }
}

pub fn validate_post(post: &Post) -> ValidationReport {
    let mut report = ValidationReport::default();
    let content = post.content();

    report.check(!content.trim().is_empty(), "Content must not be empty");
    report.check(
        content.chars().count() <= MAX_CONTENT_LEN,
        &format!("Content must not exceed {MAX_CONTENT_LEN} characters"),
    );

    report
}

pub fn validate_user(user: &User) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.check(
        !user.username().trim().is_empty(),
        "Username must not be empty",
    );
    report.check(
        user.username().chars().count() <= MAX_USERNAME_LEN,
        &format!("Username must not exceed {MAX_USERNAME_LEN} characters"),
    );
    report.check(!user.email().is_empty(), "Email must not be empty");
    report.check(
        user.email().chars().count() <= MAX_EMAIL_LEN,
        &format!("Email must not exceed {MAX_EMAIL_LEN} characters"),
    );
    report.check(
        user.email().is_empty() || EMAIL_RE.is_match(user.email()),
        "Email is not a valid address",
    );
    report.check(
        !user.password_hash().is_empty(),
        "Password hash must not be empty",
    );

    report
}

pub fn validate_like(like: &Like) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.check(
        like.post_id().is_some() != like.comment_id().is_some(),
        "A like must reference exactly one of a post or a comment",
    );

    report
}

pub fn validate_group_block(block: &GroupBlock) -> ValidationReport {
    let mut report = ValidationReport::default();

    report.check(
        block.blocker_id() != block.blocked_id(),
        "A member cannot block themselves",
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;
    use chrono::Utc;
    use uuid::Uuid;

    fn post_with_content(content: &str) -> Post {
        let now = Utc::now();
        Post::rehydrate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            None,
            content.to_string(),
            now,
            now,
        )
    }

    #[test]
    fn test_empty_content_is_invalid() {
        let report = validate_post(&post_with_content(""));
        assert!(!report.is_valid());
        assert_eq!(report.errors(), &["Content must not be empty".to_string()]);
    }

    #[test]
    fn test_whitespace_content_is_invalid() {
        let report = validate_post(&post_with_content("   \n\t"));
        assert!(!report.is_valid());
    }

    #[test]
    fn test_content_at_limit_is_valid() {
        let report = validate_post(&post_with_content(&"x".repeat(MAX_CONTENT_LEN)));
        assert!(report.is_valid());
    }

    #[test]
    fn test_content_over_limit_is_invalid() {
        let report = validate_post(&post_with_content(&"x".repeat(MAX_CONTENT_LEN + 1)));
        assert!(!report.is_valid());
        assert!(report.joined().contains("must not exceed"));
    }

    #[test]
    fn test_errors_are_joined_in_rule_order() {
        // Empty content trips only the first rule; an over-long user trips
        // several and the joined message preserves validator ordering.
        let now = Utc::now();
        let user = User::rehydrate(
            Uuid::new_v4(),
            String::new(),
            "not-an-email".to_string(),
            String::new(),
            now,
            now,
        );
        let report = validate_user(&user);
        assert!(!report.is_valid());
        let joined = report.joined();
        let username_pos = joined.find("Username").unwrap();
        let email_pos = joined.find("Email is not").unwrap();
        assert!(username_pos < email_pos);
        assert!(joined.contains("; "));
    }

    #[test]
    fn test_email_pattern() {
        let now = Utc::now();
        let make = |email: &str| {
            User::rehydrate(
                Uuid::new_v4(),
                "alice".to_string(),
                email.to_string(),
                "hash".to_string(),
                now,
                now,
            )
        };
        assert!(validate_user(&make("alice@example.com")).is_valid());
        assert!(!validate_user(&make("alice@example")).is_valid());
        assert!(!validate_user(&make("alice example.com")).is_valid());
        assert!(!validate_user(&make("@example.com")).is_valid());
    }

    #[test]
    fn test_like_must_target_exactly_one() {
        let now = Utc::now();
        let target = Uuid::new_v4();
        let make = |post: Option<Uuid>, comment: Option<Uuid>| {
            Like::rehydrate(Uuid::new_v4(), Uuid::new_v4(), post, comment, now, now)
        };
        assert!(validate_like(&make(Some(target), None)).is_valid());
        assert!(validate_like(&make(None, Some(target))).is_valid());
        assert!(!validate_like(&make(None, None)).is_valid());
        assert!(!validate_like(&make(Some(target), Some(target))).is_valid());
    }

    #[test]
    fn test_group_block_rejects_self_block() {
        let now = Utc::now();
        let member = Uuid::new_v4();
        let make = |blocker: Uuid, blocked: Uuid| {
            GroupBlock::rehydrate(Uuid::new_v4(), Uuid::new_v4(), blocker, blocked, now, now)
        };
        assert!(validate_group_block(&make(member, Uuid::new_v4())).is_valid());
        let report = validate_group_block(&make(member, member));
        assert!(!report.is_valid());
        assert_eq!(report.joined(), "A member cannot block themselves");
    }
}
