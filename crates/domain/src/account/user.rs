use common::UserId;
use serde::{Deserialize, Serialize};

/// A directory entry.
///
/// The password is an opaque string compared exactly; this is demo-grade
/// by design and explicitly out of the security scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
}
