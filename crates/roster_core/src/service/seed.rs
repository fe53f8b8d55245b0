//! Demo records shown on first load.

use crate::model::user::{UserFields, UserId, UserRecord};

/// Returns the three starter records in table order.
pub fn demo_records(photo: &str) -> Vec<UserRecord> {
    vec![
        demo("1", "Parviz", "parviz@gmail.com", "04040404", "USA", false, photo),
        demo("2", "Mia Khalifa", "elena@example.com", "09098976", "USA", true, photo),
        demo("3", "Shuhrat", "shuhrat@gmail.com", "9980898", "Pamir", false, photo),
    ]
}

fn demo(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    country: &str,
    completed: bool,
    photo: &str,
) -> UserRecord {
    UserRecord::from_fields(
        UserId::new(id),
        UserFields {
            completed,
            photo: photo.to_string(),
            ..UserFields::new(name, email, phone, country)
        },
    )
}
