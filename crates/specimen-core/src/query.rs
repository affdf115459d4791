//! SQL query builder: the injection sample.
//!
//! The username is interpolated straight into the template. A value like
//! `' OR '1'='1` rewrites the WHERE clause, which is the point of the sample.

use anyhow::Result;
use serde_json::Value;

/// External query-execution collaborator. The fixture ships no
/// implementation; callers inject one.
pub trait QueryExecutor {
    fn execute_query(&self, query: &str) -> Result<Vec<Value>>;
}

/// Interpolate the username into the fixed template. No escaping, no
/// parameterization.
pub fn user_query(username: &str) -> String {
    format!("SELECT * FROM users WHERE name = '{username}'")
}

/// Build the lookup query for `username` and hand it to `exec` unchanged.
/// Executor failures propagate untouched.
pub fn get_user(exec: &impl QueryExecutor, username: &str) -> Result<Vec<Value>> {
    let query = user_query(username);
    tracing::debug!("executing user lookup: {}", query);
    exec.execute_query(&query)
}
