//! Static display content. Every record here is fixed at build time,
//! never mutated, and rendered in declaration order.

/// One team bio card. `photo` is an asset path; `linkedin` is rendered
/// as-is as an outbound link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub linkedin: &'static str,
}

pub const TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Juan Ignacio Castore",
        role: "CEO",
        photo: "/juani.jpg",
        linkedin: "https://www.linkedin.com/in/juan-ignacio-castore/",
    },
    TeamMember {
        name: "Camila Cauzzo",
        role: "COO & CTO",
        photo: "/cami.jpg",
        linkedin: "https://www.linkedin.com/in/camila-cauzzo-a44936203/",
    },
    TeamMember {
        name: "Joaquín Schanz",
        role: "CPO",
        photo: "/joaco.jpg",
        linkedin: "https://www.linkedin.com/in/joaquin-schanz/",
    },
    TeamMember {
        name: "Damasia Bonadeo",
        role: "Marketing & Brand Designer",
        photo: "/dama.jpg",
        linkedin: "https://www.linkedin.com/in/damasia-bonadeo-6a6629238/",
    },
    TeamMember {
        name: "Magdalena Rotondaro",
        role: "Full-Stack Engineer",
        photo: "/magui.jpg",
        linkedin: "https://www.linkedin.com/in/magdalena-rotondaro-3574622b2/",
    },
    TeamMember {
        name: "Felicitas Ofarrell",
        role: "AI Specialist",
        photo: "/feli.jpg",
        linkedin: "https://www.linkedin.com/in/felicitas-ofarrell/",
    },
];

/// Color variants of a workflow step icon. `Blue` is the resting icon,
/// `White` the hover swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Blue,
    White,
}

impl IconVariant {
    fn suffix(self) -> &'static str {
        match self {
            IconVariant::Blue => "blue",
            IconVariant::White => "white",
        }
    }
}

/// One step of the product workflow shown in the solution section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub name: &'static str,
    pub summary: &'static str,
}

impl WorkflowStep {
    /// Icon asset path for one color variant: the lower-cased step name
    /// plus the `_blue.png` / `_white.png` suffix.
    pub fn icon_path(&self, variant: IconVariant) -> String {
        format!("/{}_{}.png", self.name.to_lowercase(), variant.suffix())
    }
}

pub const WORKFLOW_STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        name: "Observe",
        summary: "Captures real workflows securely and automatically.",
    },
    WorkflowStep {
        name: "Analyze",
        summary: "AI identifies key knowledge, processes and best practices.",
    },
    WorkflowStep {
        name: "Document",
        summary: "Builds a living, searchable knowledge base.",
    },
    WorkflowStep {
        name: "Coach",
        summary: "Provides real-time pop-ups and contextual guidance.",
    },
];

/// One subscription tier card. `band` is the display class that sizes and
/// colors the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
    pub band: &'static str,
    pub monthly_price_usd: u32,
}

impl PricingTier {
    /// Price amount as displayed, e.g. `$5`.
    pub fn price_label(&self) -> String {
        format!("${}", self.monthly_price_usd)
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        title: "Small Teams",
        summary: "Simple setup, fast onboarding.",
        icon: "/small.png",
        band: "small",
        monthly_price_usd: 5,
    },
    PricingTier {
        title: "Growing Teams",
        summary: "Guided knowledge capture & insights.",
        icon: "/medium.png",
        band: "medium",
        monthly_price_usd: 10,
    },
    PricingTier {
        title: "Large Organizations",
        summary: "Advanced automation & analytics.",
        icon: "/large.png",
        band: "large",
        monthly_price_usd: 15,
    },
];

/// One statistic card in the problem section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemStat {
    pub percent: u8,
    pub summary: &'static str,
}

pub const PROBLEM_STATS: [ProblemStat; 3] = [
    ProblemStat {
        percent: 45,
        summary: "of company knowledge isn’t documented — it leaves when employees do.",
    },
    ProblemStat {
        percent: 60,
        summary: "of employees find onboarding confusing, incomplete, or disorganized.",
    },
    ProblemStat {
        percent: 5,
        summary: "of revenue is spent on training — not counting lost productivity.",
    },
];

/// Base partner logo set, in display order.
pub const PARTNER_LOGOS: [&str; 2] = ["nubceo.png", "olympia.png"];

/// Extra copies of the base set appended after it. The strip scrolls
/// horizontally in a loop; the repetition count is fixed, there is no
/// dynamic resizing.
pub const LOGO_LOOP_REPEATS: usize = 3;

/// Full render list for the partner strip: the base set followed by
/// [`LOGO_LOOP_REPEATS`] copies, order preserved within each repetition.
pub fn partner_logo_strip() -> Vec<&'static str> {
    let mut strip = Vec::with_capacity(PARTNER_LOGOS.len() * (1 + LOGO_LOOP_REPEATS));
    for _ in 0..=LOGO_LOOP_REPEATS {
        strip.extend_from_slice(&PARTNER_LOGOS);
    }
    strip
}

// External profiles and the mail-compose link, rendered as-is and never
// validated at runtime.
pub const COMPANY_LINKEDIN_URL: &str =
    "https://www.linkedin.com/company/kora-onboarding/?viewAsMember=true";
pub const COMPANY_INSTAGRAM_URL: &str = "https://www.instagram.com/koraonboarding/";
pub const CONTACT_MAIL_URL: &str =
    "https://mail.google.com/mail/?view=cm&to=koraonboarding@gmail.com";

pub const KORA_LOGO: &str = "/Logos-Kora-color.png";

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
