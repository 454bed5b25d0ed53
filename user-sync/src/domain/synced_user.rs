//! The user-to-application relationship carried by a sync call.

/// One user's membership in a purchased application.
///
/// Every field is an opaque string forwarded to the remote service as-is.
/// The client performs no validation; an empty field is sent empty and the
/// remote decides whether that is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncedUser {
    /// Identifier of the application developer (ISV).
    pub developer_identifier: String,
    /// Marketplace account that owns the subscription.
    pub account_identifier: String,
    /// Marketplace user identifier.
    pub user_identifier: String,
    /// User email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login name.
    pub user_name: String,
}

/// Which membership change a sync call reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncIntent {
    /// The user gained access to the application.
    Assign,
    /// The user lost access to the application.
    Unassign,
}

impl SyncIntent {
    /// Wire value of the action discriminator.
    ///
    /// # Examples
    /// ```
    /// use user_sync::SyncIntent;
    ///
    /// assert_eq!(SyncIntent::Assign.action(), "ASSIGN");
    /// assert_eq!(SyncIntent::Unassign.action(), "UNASSIGN");
    /// ```
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Assign => "ASSIGN",
            Self::Unassign => "UNASSIGN",
        }
    }
}
