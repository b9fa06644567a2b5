//! SQL statements and derived-relation builders.
//!
//! The two aggregations behind the profile query are kept as standalone
//! relation builders so they stay composable and independently testable:
//!
//! - [`total_friend_count_relation`] — `(user_id, friend_count)` per user,
//!   counting that user's `accepted` edges. Used as a LEFT JOIN target.
//! - [`mutual_friend_count_relation`] — a self-join of the friendship
//!   table on `friend_user_id`, one side filtered to the caller (`?1`)
//!   and the other to the friend (`?2`), both restricted to `accepted`,
//!   grouped by the caller side.
//!
//! Both joins are LEFT JOINs with `COALESCE(.., 0)` in the outer select,
//! so a user with no friends or no mutual friends yields `0`, never NULL.

/// Create the schema. `IF NOT EXISTS` makes bootstrap idempotent.
pub const SQL_CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id TEXT PRIMARY KEY,
  full_name TEXT NOT NULL,
  phone_number TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS friendships (
  id INTEGER PRIMARY KEY,
  user_id TEXT NOT NULL REFERENCES users (id),
  friend_user_id TEXT NOT NULL REFERENCES users (id),
  status TEXT NOT NULL,
  UNIQUE (user_id, friend_user_id)
);
CREATE INDEX IF NOT EXISTS idx_friendships_friend_user_id
  ON friendships (friend_user_id);
"#;

/// Insert a user row. Users are owned by the surrounding system; this
/// statement exists for provisioning and test fixtures.
pub const SQL_INSERT_USER: &str = r#"
INSERT INTO users (id, full_name, phone_number)
VALUES (?1, ?2, ?3)
"#;

/// Whether a user row exists.
pub const SQL_USER_EXISTS: &str = r#"
SELECT EXISTS (SELECT 1 FROM users WHERE id = ?1)
"#;

/// Status of one directed edge, if present.
pub const SQL_EDGE_STATUS: &str = r#"
SELECT status FROM friendships
WHERE user_id = ?1 AND friend_user_id = ?2
"#;

/// Whether a pending request `(requester, recipient)` exists.
pub const SQL_PENDING_REQUEST_EXISTS: &str = r#"
SELECT EXISTS (
  SELECT 1 FROM friendships
  WHERE user_id = ?1 AND friend_user_id = ?2 AND status = 'requested'
)
"#;

/// Create or overwrite the `(caller, target)` edge as `requested`.
///
/// The conflict target is the UNIQUE pair constraint, so a prior
/// declined (or accepted) edge is reused rather than duplicated, and
/// concurrent identical sends cannot insert twice.
pub const SQL_UPSERT_FRIEND_REQUEST: &str = r#"
INSERT INTO friendships (user_id, friend_user_id, status)
VALUES (?1, ?2, 'requested')
ON CONFLICT (user_id, friend_user_id) DO UPDATE SET status = 'requested'
"#;

/// Move a pending edge `(requester, recipient)` to `accepted`.
///
/// Filters on `status = 'requested'` so zero affected rows means the
/// pending request vanished between guard and transaction.
pub const SQL_ACCEPT_PENDING_EDGE: &str = r#"
UPDATE friendships SET status = 'accepted'
WHERE user_id = ?1 AND friend_user_id = ?2 AND status = 'requested'
"#;

/// Create or overwrite the reciprocal `(recipient, requester)` edge as
/// `accepted`, restoring the symmetry invariant.
pub const SQL_UPSERT_RECIPROCAL_ACCEPTED: &str = r#"
INSERT INTO friendships (user_id, friend_user_id, status)
VALUES (?1, ?2, 'accepted')
ON CONFLICT (user_id, friend_user_id) DO UPDATE SET status = 'accepted'
"#;

/// Move a pending edge `(requester, recipient)` to `declined` in place.
pub const SQL_DECLINE_PENDING_EDGE: &str = r#"
UPDATE friendships SET status = 'declined'
WHERE user_id = ?1 AND friend_user_id = ?2 AND status = 'requested'
"#;

/// Derived relation: accepted-friend count per user.
pub fn total_friend_count_relation() -> &'static str {
    r#"SELECT user_id, COUNT(*) AS friend_count
FROM friendships
WHERE status = 'accepted'
GROUP BY user_id"#
}

/// Derived relation: mutual accepted-friend count between the caller
/// (`?1`) and the friend (`?2`), keyed by the caller's user id.
pub fn mutual_friend_count_relation() -> &'static str {
    r#"SELECT mine.user_id AS user_id, COUNT(DISTINCT mine.friend_user_id) AS mutual_count
FROM friendships AS mine
JOIN friendships AS theirs ON theirs.friend_user_id = mine.friend_user_id
WHERE mine.user_id = ?1 AND mine.status = 'accepted'
  AND theirs.user_id = ?2 AND theirs.status = 'accepted'
GROUP BY mine.user_id"#
}

/// The single-round-trip profile query.
///
/// Binds: `?1` = caller id, `?2` = friend id. Selects the friend's
/// profile row joined to both derived relations; the total count is
/// keyed by the friend's id, the mutual count by the caller's.
pub fn friend_profile_query() -> String {
    format!(
        r#"SELECT u.id, u.full_name, u.phone_number,
       COALESCE(total.friend_count, 0) AS total_friend_count,
       COALESCE(mutual.mutual_count, 0) AS mutual_friend_count
FROM users AS u
LEFT JOIN ({total}) AS total ON total.user_id = u.id
LEFT JOIN ({mutual}) AS mutual ON mutual.user_id = ?1
WHERE u.id = ?2"#,
        total = total_friend_count_relation(),
        mutual = mutual_friend_count_relation(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_query_composes_both_relations() {
        let sql = friend_profile_query();
        assert!(sql.contains(total_friend_count_relation()));
        assert!(sql.contains(mutual_friend_count_relation()));
    }

    #[test]
    fn profile_query_coalesces_both_counts() {
        let sql = friend_profile_query();
        assert!(sql.contains("COALESCE(total.friend_count, 0)"));
        assert!(sql.contains("COALESCE(mutual.mutual_count, 0)"));
    }

    #[test]
    fn total_relation_is_restricted_to_accepted_edges() {
        let sql = total_friend_count_relation();
        assert!(sql.contains("status = 'accepted'"));
        assert!(sql.contains("GROUP BY user_id"));
    }

    #[test]
    fn mutual_relation_joins_both_sides_on_the_shared_friend() {
        let sql = mutual_friend_count_relation();
        assert!(sql.contains("theirs.friend_user_id = mine.friend_user_id"));
        assert!(sql.contains("mine.status = 'accepted'"));
        assert!(sql.contains("theirs.status = 'accepted'"));
    }

    #[test]
    fn transition_statements_filter_on_the_pending_state() {
        assert!(SQL_ACCEPT_PENDING_EDGE.contains("status = 'requested'"));
        assert!(SQL_DECLINE_PENDING_EDGE.contains("status = 'requested'"));
    }

    #[test]
    fn upserts_target_the_pair_constraint() {
        assert!(SQL_UPSERT_FRIEND_REQUEST.contains("ON CONFLICT (user_id, friend_user_id)"));
        assert!(SQL_UPSERT_RECIPROCAL_ACCEPTED.contains("ON CONFLICT (user_id, friend_user_id)"));
    }
}
