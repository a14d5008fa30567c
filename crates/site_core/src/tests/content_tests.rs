use super::*;

#[test]
fn team_record_carries_exact_name_role_and_linkedin_url() {
    let ceo = TEAM
        .iter()
        .find(|member| member.name == "Juan Ignacio Castore")
        .expect("CEO record present");

    assert_eq!(ceo.role, "CEO");
    assert_eq!(
        ceo.linkedin,
        "https://www.linkedin.com/in/juan-ignacio-castore/"
    );
    assert_eq!(ceo.photo, "/juani.jpg");
}

#[test]
fn every_workflow_step_has_a_lowercased_icon_pair() {
    for step in &WORKFLOW_STEPS {
        let blue = step.icon_path(IconVariant::Blue);
        let white = step.icon_path(IconVariant::White);

        assert_eq!(blue, format!("/{}_blue.png", step.name.to_lowercase()));
        assert_eq!(white, format!("/{}_white.png", step.name.to_lowercase()));
    }

    assert_eq!(
        WORKFLOW_STEPS[0].icon_path(IconVariant::Blue),
        "/observe_blue.png"
    );
    assert_eq!(
        WORKFLOW_STEPS[3].icon_path(IconVariant::White),
        "/coach_white.png"
    );
}

#[test]
fn partner_strip_repeats_the_base_set_in_order() {
    let strip = partner_logo_strip();

    assert_eq!(strip.len(), PARTNER_LOGOS.len() * (1 + LOGO_LOOP_REPEATS));
    assert_eq!(strip.len(), 8);
    for (index, logo) in strip.iter().enumerate() {
        assert_eq!(*logo, PARTNER_LOGOS[index % PARTNER_LOGOS.len()]);
    }
}

#[test]
fn pricing_tiers_format_amounts_with_dollar_sign() {
    let labels: Vec<String> = PRICING_TIERS.iter().map(PricingTier::price_label).collect();
    assert_eq!(labels, ["$5", "$10", "$15"]);
}

#[test]
fn problem_stats_keep_display_order() {
    let percents: Vec<u8> = PROBLEM_STATS.iter().map(|stat| stat.percent).collect();
    assert_eq!(percents, [45, 60, 5]);
}
