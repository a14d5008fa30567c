use super::*;

#[test]
fn section_below_threshold_stays_hidden() {
    let mut tracker = RevealTracker::default();

    assert!(!tracker.record_intersection(Section::Problem, 0.1));
    assert!(!tracker.is_revealed(Section::Problem));
}

#[test]
fn section_reveals_once_at_threshold_and_stays_revealed() {
    let mut tracker = RevealTracker::default();

    assert!(tracker.record_intersection(Section::Team, REVEAL_THRESHOLD));
    assert!(tracker.is_revealed(Section::Team));

    // Later observations, including scrolling fully away, change nothing.
    assert!(!tracker.record_intersection(Section::Team, 1.0));
    assert!(!tracker.record_intersection(Section::Team, 0.0));
    assert!(tracker.is_revealed(Section::Team));
}

#[test]
fn sections_reveal_independently() {
    let mut tracker = RevealTracker::default();

    assert!(tracker.record_intersection(Section::Brands, 0.9));
    assert!(tracker.is_revealed(Section::Brands));
    for section in Section::ALL {
        if section != Section::Brands {
            assert!(!tracker.is_revealed(section));
        }
    }
}

#[test]
fn anchors_match_the_fixed_navigation_targets() {
    let anchors: Vec<&str> = Section::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(
        anchors,
        ["problem", "solution", "service-model", "brands", "team", "contact"]
    );
    assert_eq!(Section::Brands.nav_label(), "Trusted By");
}
