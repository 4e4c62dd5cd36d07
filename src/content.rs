//! Site Content
//!
//! Static copy and data tables for the page sections. The page is a CSR
//! bundle with no backend, so content lives here rather than in a CMS.

/// In-page navigation links (fragment href, label)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#features", "Why GreenLoop"),
    ("#waste-guide", "Sorting Guide"),
    ("#how-it-works", "How It Works"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

/// One animated statistic in the impact band
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub label: &'static str,
    pub target: u64,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Tons diverted from landfill", target: 12_480 },
    Stat { label: "Households on weekly routes", target: 8_500 },
    Stat { label: "Neighborhood drop-off points", target: 96 },
    Stat { label: "Local processing partners", target: 27 },
];

/// Filter keys for the waste guide (key, button label).
/// "all" must stay first; the other keys match `WasteCategory::kind`.
pub const WASTE_FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("organic", "Organic"),
    ("recyclable", "Recyclable"),
    ("hazardous", "Hazardous"),
    ("residual", "Residual"),
];

/// One card in the waste sorting guide
#[derive(Clone, Copy, Debug)]
pub struct WasteCategory {
    pub kind: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub examples: &'static str,
}

pub const WASTE_CATEGORIES: &[WasteCategory] = &[
    WasteCategory {
        kind: "organic",
        icon: "🍂",
        title: "Food scraps",
        blurb: "Collected twice a week and turned into compost at the depot. Keep them loose or in a paper bag, never in plastic.",
        examples: "Vegetable peels, coffee grounds, eggshells",
    },
    WasteCategory {
        kind: "organic",
        icon: "🌿",
        title: "Garden waste",
        blurb: "Bundle branches under a metre; leaves and grass go in the green crate. Soil and stones stay home.",
        examples: "Pruned leaves, grass clippings, small branches",
    },
    WasteCategory {
        kind: "recyclable",
        icon: "🧴",
        title: "Plastics",
        blurb: "Rinse, squash and leave the caps on. Film and bags belong at the drop-off point, not the curbside crate.",
        examples: "Bottles, jugs, rigid food containers",
    },
    WasteCategory {
        kind: "recyclable",
        icon: "📦",
        title: "Paper & cardboard",
        blurb: "Flatten boxes so the crew can stack them. Wet or greasy fiber is residual waste, not recycling.",
        examples: "Newsprint, office paper, shipping boxes",
    },
    WasteCategory {
        kind: "hazardous",
        icon: "🔋",
        title: "Batteries & e-waste",
        blurb: "Never in a household bin. Hand them to the crew separately or drop them at any collection point.",
        examples: "Phones, cables, power banks, bulbs",
    },
    WasteCategory {
        kind: "hazardous",
        icon: "🎨",
        title: "Paints & chemicals",
        blurb: "Keep them sealed in their original containers. We log every item for licensed treatment.",
        examples: "Solvents, pesticides, motor oil",
    },
    WasteCategory {
        kind: "residual",
        icon: "🧻",
        title: "Soiled packaging",
        blurb: "Food-soaked fiber ruins a whole recycling bale. When in doubt and dirty, it goes here.",
        examples: "Greasy pizza boxes, used tissues, waxed cups",
    },
    WasteCategory {
        kind: "residual",
        icon: "🪞",
        title: "Ceramics & flat glass",
        blurb: "Mirrors and window glass melt differently from bottles and cannot join the glass stream.",
        examples: "Mirrors, window panes, chipped crockery",
    },
];

/// One feature card on the landing section
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🚚",
        title: "Doorstep pickup",
        text: "Weekly curbside collection on a route you can check from your phone, rain or shine.",
    },
    Feature {
        icon: "🧭",
        title: "Clear sorting rules",
        text: "One guide, four streams. No guessing which bin a yogurt cup belongs in.",
    },
    Feature {
        icon: "📊",
        title: "Impact you can see",
        text: "A monthly note tells your street how much it diverted and where the material went.",
    },
    Feature {
        icon: "🤝",
        title: "Local partners",
        text: "Everything we collect is processed within the region, so the value stays in the community.",
    },
];

/// One numbered step in the how-it-works section
#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub title: &'static str,
    pub text: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        title: "Book a slot",
        text: "Pick a weekday for your street. One booking covers the whole household.",
    },
    Step {
        title: "Sort at home",
        text: "Split your waste into the four streams using the guide above.",
    },
    Step {
        title: "We collect",
        text: "The crew weighs each stream at your door and scans your crate.",
    },
    Step {
        title: "Track your impact",
        text: "Your monthly summary shows kilograms diverted and the facilities that took them.",
    },
];

/// One FAQ entry
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Which neighborhoods do you cover?",
        answer: "All districts inside the ring road, plus the riverside villages on Saturdays. Enter your postcode when booking and the form will tell you your collection day.",
    },
    FaqEntry {
        question: "What happens if I miss my pickup?",
        answer: "Leave the crate out and the crew will catch it on the return leg the same day. Missed twice in a row? Message us and we will reschedule at no charge.",
    },
    FaqEntry {
        question: "How do you handle hazardous waste?",
        answer: "Batteries, paints and chemicals are logged item by item and travel in a separate sealed compartment to a licensed treatment facility. They are never mixed with other streams.",
    },
    FaqEntry {
        question: "Does the service cost anything?",
        answer: "Curbside pickup is free for households; the program is funded by the municipality and by material sales. Businesses pay per collection by weight.",
    },
    FaqEntry {
        question: "Do containers need to be spotless?",
        answer: "A quick rinse is enough. Remove food residue so it does not spoil the bale, but nobody expects dishwasher-clean jars.",
    },
];

/// One contact detail shown beside the form
#[derive(Clone, Copy, Debug)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        icon: "📍",
        label: "Depot",
        value: "14 Harbour Road, Riverside District",
    },
    ContactDetail {
        icon: "✉️",
        label: "Email",
        value: "hello@greenloop.example",
    },
    ContactDetail {
        icon: "☎️",
        label: "Hotline",
        value: "0800 555 0199 (Mon-Sat, 07:00-17:00)",
    },
];

/// Subject options for the contact form select (value, label)
pub const SUBJECTS: &[(&str, &str)] = &[
    ("general", "General inquiry"),
    ("pickup", "Pickup request"),
    ("partnership", "Partnership"),
    ("other", "Something else"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_kind_has_a_filter() {
        for category in WASTE_CATEGORIES {
            assert!(
                WASTE_FILTERS.iter().any(|(key, _)| *key == category.kind),
                "category '{}' has kind '{}' with no matching filter",
                category.title,
                category.kind,
            );
        }
    }

    #[test]
    fn test_all_filter_is_first() {
        assert_eq!(WASTE_FILTERS[0].0, "all");
        // "all" is a virtual key; no card may claim it as a kind
        assert!(WASTE_CATEGORIES.iter().all(|c| c.kind != "all"));
    }

    #[test]
    fn test_subject_values_are_unique_and_non_empty() {
        for (i, (value, _)) in SUBJECTS.iter().enumerate() {
            assert!(!value.is_empty());
            assert!(SUBJECTS.iter().skip(i + 1).all(|(other, _)| other != value));
        }
    }
}
