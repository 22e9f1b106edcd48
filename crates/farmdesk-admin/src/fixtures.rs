//! Built-in sample data for the admin lists.
//!
//! These are the records the admin screens show before a backend exists.

use farmdesk_query::Timestamp;

use crate::records::{FarmRecord, Notification, NotificationKind, Role, Status, UserRecord};

fn user(
    id: u32,
    name: &str,
    email: &str,
    role: Role,
    farm: &str,
    joined: &str,
    status: Status,
) -> UserRecord {
    UserRecord {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        farm: farm.to_string(),
        joined: joined.to_string(),
        status,
    }
}

/// The ten sample platform users.
#[rustfmt::skip]
pub fn users() -> Vec<UserRecord> {
    use Role::{FarmOwner, Worker};
    use Status::{Active, Inactive};

    vec![
        user(1, "Ahmed Khalil", "ahmed@email.com", FarmOwner, "Green Valley Farm", "2025-01-15", Active),
        user(2, "Sara Mansouri", "sara@email.com", Worker, "Green Valley Farm", "2025-01-16", Active),
        user(3, "Ali Benali", "ali@email.com", FarmOwner, "Sunrise Farms", "2025-01-18", Active),
        user(4, "Fatima Zerrouk", "fatima@email.com", Worker, "Sunrise Farms", "2025-01-18", Active),
        user(5, "Mohamed Amrani", "mohamed@email.com", FarmOwner, "Golden Harvest", "2025-01-20", Active),
        user(6, "Karim Zidane", "karim@email.com", Worker, "Golden Harvest", "2025-01-20", Active),
        user(7, "Amina Bouaziz", "amina@email.com", Worker, "Green Valley Farm", "2025-01-17", Inactive),
        user(8, "Youssef Hamdi", "youssef@email.com", FarmOwner, "Fresh Fields", "2025-01-19", Active),
        user(9, "Nadia Slimani", "nadia@email.com", Worker, "Fresh Fields", "2025-01-19", Active),
        user(10, "Rachid Meziane", "rachid@email.com", Worker, "Organic Paradise", "2025-01-17", Active),
    ]
}

#[allow(clippy::too_many_arguments)]
fn farm(
    id: u32,
    name: &str,
    owner: &str,
    email: &str,
    location: &str,
    created: &str,
    (fields, tasks, workers): (u32, u32, u32),
    status: Status,
) -> FarmRecord {
    FarmRecord {
        id,
        name: name.to_string(),
        owner: owner.to_string(),
        email: email.to_string(),
        location: location.to_string(),
        created: created.to_string(),
        fields,
        tasks,
        workers,
        status,
    }
}

/// The six sample farms.
#[rustfmt::skip]
pub fn farms() -> Vec<FarmRecord> {
    use Status::{Active, Inactive};

    vec![
        farm(1, "Green Valley Farm", "Ahmed Khalil", "ahmed@email.com", "Algiers, Algeria", "Jan 15, 2025", (12, 45, 8), Active),
        farm(2, "Sunrise Farms", "Sara Mansouri", "sara@email.com", "Oran, Algeria", "Jan 18, 2025", (8, 32, 5), Active),
        farm(3, "Golden Harvest", "Ali Benali", "ali@email.com", "Blida, Algeria", "Jan 20, 2025", (15, 67, 12), Active),
        farm(4, "Fresh Fields", "Fatima Zerrouk", "fatima@email.com", "Tizi Ouzou, Algeria", "Jan 19, 2025", (6, 28, 4), Inactive),
        farm(5, "Organic Paradise", "Mohamed Amrani", "mohamed@email.com", "Constantine, Algeria", "Jan 17, 2025", (10, 52, 7), Active),
        farm(6, "Nature's Bounty", "Karim Zidane", "karim@email.com", "Annaba, Algeria", "Jan 16, 2025", (9, 41, 6), Active),
    ]
}

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// The five sample notifications, timestamped relative to `now`.
pub fn notifications_at(now: Timestamp) -> Vec<Notification> {
    let entry = |id: &str,
                 kind: NotificationKind,
                 title: &str,
                 message: &str,
                 age_ms: i64,
                 is_read: bool| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: Timestamp(now.as_millis() - age_ms),
        is_read,
    };

    vec![
        entry(
            "1",
            NotificationKind::Farm,
            "New Farm Created",
            "A new farm 'Sunset Valley' has been registered by ahmed@email.com",
            5 * MINUTE_MS,
            false,
        ),
        entry(
            "2",
            NotificationKind::User,
            "User Milestone Reached",
            "Platform reached 1,000 registered users! Congratulations on this achievement.",
            HOUR_MS,
            false,
        ),
        entry(
            "3",
            NotificationKind::Farm,
            "Farm Updated",
            "Green Valley Farm updated their field information and added 2 new workers.",
            3 * HOUR_MS,
            true,
        ),
        entry(
            "4",
            NotificationKind::User,
            "New Admin Action Required",
            "5 new farm applications are pending approval in the review queue.",
            5 * HOUR_MS,
            true,
        ),
        entry(
            "5",
            NotificationKind::Farm,
            "Task Completion Alert",
            "Riverside Farm completed all scheduled tasks for this week ahead of schedule.",
            24 * HOUR_MS,
            true,
        ),
    ]
}
