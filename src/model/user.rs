//! Site users. Stored but not served by any route.

use serde::Deserialize;

use super::{Id, Insertable};

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsertUser {
    pub username: String,
    pub password: String,
}

impl Insertable for InsertUser {
    type Record = User;

    fn with_id(self, id: Id) -> User {
        User {
            id,
            username: self.username,
            password: self.password,
        }
    }
}
