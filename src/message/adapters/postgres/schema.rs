//! Diesel schema for message persistence.

diesel::table! {
    /// Organization-scoped message records.
    messages (id) {
        /// Message identifier.
        id -> Uuid,
        /// Owning organization.
        organization_id -> Uuid,
        /// Title, unique per organization.
        #[max_length = 200]
        title -> Varchar,
        /// Message body.
        #[max_length = 1000]
        content -> Varchar,
        /// Whether the message may still be updated or deleted.
        is_active -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Nullable<Timestamptz>,
    }
}
