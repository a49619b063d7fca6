use crate::models::Activity;

// Fixed sample roster loaded at startup.
pub fn seed_activities() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Competitive basketball training and games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            Activity::new(
                "Tennis instruction and friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Art Studio".to_string(),
            Activity::new(
                "Painting, drawing, and mixed media techniques",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["sarah@mergington.edu", "maya@mergington.edu"],
            ),
        ),
        (
            "Music Ensemble".to_string(),
            Activity::new(
                "Orchestra and band performance group",
                "Mondays and Thursdays, 4:30 PM - 5:30 PM",
                25,
                &["lucas@mergington.edu"],
            ),
        ),
        (
            "Debate Club".to_string(),
            Activity::new(
                "Competitive debate and public speaking skills",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
                &["henry@mergington.edu", "grace@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad".to_string(),
            Activity::new(
                "STEM competition and scientific exploration",
                "Tuesdays, 4:00 PM - 5:30 PM",
                14,
                &["ryan@mergington.edu"],
            ),
        ),
    ]
}
