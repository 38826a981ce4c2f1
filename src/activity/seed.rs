use indexmap::IndexMap;

use super::models::ActivityModel;

/// Roster keyed by activity name, in seed order
pub type Roster = IndexMap<String, ActivityModel>;

/// Builds the roster every fresh process starts with
pub fn seed_roster() -> Roster {
    let seed = [
        (
            "Basketball",
            ActivityModel::new(
                "Team basketball practice and games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            ActivityModel::new(
                "Tennis lessons and competitive matches",
                "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
                10,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            ActivityModel::new(
                "Painting, drawing, and sculpture classes",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["isabella@mergington.edu"],
            ),
        ),
        (
            "Music Band",
            ActivityModel::new(
                "Learn and perform music with other students",
                "Fridays, 3:30 PM - 4:30 PM",
                25,
                &["noah@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            ActivityModel::new(
                "Develop public speaking and argumentation skills",
                "Mondays, 3:30 PM - 4:30 PM",
                20,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            ActivityModel::new(
                "Explore scientific experiments and discoveries",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
                &["mia@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            ActivityModel::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            ActivityModel::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            ActivityModel::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
