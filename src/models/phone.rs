/// One row of `clients_phones`: a single number attached to a client.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Phone {
    pub id: i32,
    pub clients_id: i32,
    pub phone_number: Option<String>,
}
