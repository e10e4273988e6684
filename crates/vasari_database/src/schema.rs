//! Diesel table definitions for the content store.

diesel::table! {
    content (id) {
        id -> BigInt,
        content_type -> Text,
        original_path -> Text,
        payload -> Binary,
        payload_is_text -> Bool,
        metadata -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

diesel::table! {
    interactions (id) {
        id -> BigInt,
        content_id -> BigInt,
        interaction_type -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(interactions -> content (content_id));

diesel::allow_tables_to_appear_in_same_query!(content, interactions);
