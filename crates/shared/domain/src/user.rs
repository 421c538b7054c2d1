//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User domain entity
///
/// `id` is assigned by storage and never changes; `code` is the business key
/// every lookup goes through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Storage-assigned surrogate identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Unique business code
    #[cfg_attr(feature = "openapi", schema(example = "U001"))]
    pub code: String,
    /// Full name
    #[cfg_attr(feature = "openapi", schema(example = "Nguyen Van A"))]
    pub full_name: String,
    /// Date of birth
    #[cfg_attr(feature = "openapi", schema(example = "1990-05-17"))]
    pub date_of_birth: NaiveDate,
    /// Unique email address
    #[cfg_attr(feature = "openapi", schema(example = "a.nguyen@example.com"))]
    pub email: String,
    /// Phone number
    #[cfg_attr(feature = "openapi", schema(example = "+84 912 345 678"))]
    pub phone_number: String,
    /// Postal address
    #[cfg_attr(feature = "openapi", schema(example = "12 Ly Thai To, Hanoi"))]
    pub address: String,
}

impl User {
    /// Business fields of this user, without the surrogate id
    pub fn details(&self) -> UserDetails {
        UserDetails {
            code: self.code.clone(),
            full_name: self.full_name.clone(),
            date_of_birth: self.date_of_birth,
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }
}

/// User data accepted by the store when adding or updating.
///
/// Carries every business field; on update `code` selects the record and
/// the remaining fields overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub code: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl UserDetails {
    /// Attach a surrogate id, producing the stored entity
    pub fn with_id(self, id: i32) -> User {
        User {
            id,
            code: self.code,
            full_name: self.full_name,
            date_of_birth: self.date_of_birth,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
        }
    }
}
