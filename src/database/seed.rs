use indexmap::IndexMap;

use crate::models::Activity;

/// Activities offered at process start. Order here is the listing order.
pub fn seed_activities() -> IndexMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in interschool basketball games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            )
            .with_participants(&["james@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Improve your serve and play singles and doubles matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                10,
            )
            .with_participants(&["ava@mergington.edu"]),
        ),
        (
            "Painting Club",
            Activity::new(
                "Explore watercolor, acrylic and oil painting techniques",
                "Mondays, 3:30 PM - 5:00 PM",
                16,
            )
            .with_participants(&["mia@mergington.edu"]),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform in the school plays",
                "Thursdays, 4:00 PM - 6:00 PM",
                25,
            )
            .with_participants(&["lucas@mergington.edu", "ella@mergington.edu"]),
        ),
        (
            "Debate Club",
            Activity::new(
                "Build argumentation skills and compete in debate tournaments",
                "Wednesdays, 4:00 PM - 5:30 PM",
                14,
            )
            .with_participants(&["liam@mergington.edu"]),
        ),
        (
            "Science Olympiad",
            Activity::new(
                "Prepare for regional science competitions across disciplines",
                "Saturdays, 10:00 AM - 12:00 PM",
                18,
            )
            .with_participants(&["noah@mergington.edu", "amelia@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}
