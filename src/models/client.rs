#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Partial update for a client. A `None` field keeps the stored value.
///
/// `phones` does not add numbers: when set, every phone row the client
/// already has is overwritten with this exact string, uninterpreted. Use
/// `Database::add_phone` to attach additional numbers.
#[derive(Debug, Default, Clone)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<String>,
}

/// Search filter for the directory. `None` fields are ignored; set fields
/// must match exactly, all of them together.
#[derive(Debug, Default, Clone)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
