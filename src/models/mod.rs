mod client;
mod contact_row;
mod phone;

pub use client::{Client, ClientFilter, ClientUpdate};
pub use contact_row::ContactRow;
pub use phone::Phone;
