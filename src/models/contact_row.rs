use std::fmt;

/// One line of a directory report: a client joined with one of its phone
/// numbers, or with no number at all when the client has none.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ContactRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl fmt::Display for ContactRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} <{}>", self.first_name, self.last_name, self.email)?;
        match &self.phone_number {
            Some(phone) => write!(f, " {}", phone),
            None => write!(f, " (no phone)"),
        }
    }
}
