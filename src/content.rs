//! Authored page copy. Everything here is display-only: the lists are baked in
//! at build time and rendered in declaration order.

#[derive(Clone, PartialEq)]
pub struct Problem {
    /// Font Awesome glyph class.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, PartialEq)]
pub struct PlatformLayer {
    pub layer: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const BRANDS: [&str; 5] = [
    "Simbisa Brands",
    "Chandaria Industries",
    "Naivas",
    "Tuskys",
    "Carrefour East Africa",
];

pub const INVESTORS: [&str; 4] = [
    "Google for Startups Africa",
    "TLcom Capital",
    "Savannah Fund",
    "Acumen Fund",
];

pub const PROBLEMS: [Problem; 4] = [
    Problem {
        icon: "fas fa-truck",
        title: "Soaring Fuel Costs",
        description: "Your drivers are taking long, overlapping routes.",
    },
    Problem {
        icon: "fas fa-shield-halved",
        title: "Theft & Shrinkage",
        description: "You don't know where your assets are or if goods are being siphoned off.",
    },
    Problem {
        icon: "fas fa-phone",
        title: "Inefficient Dispatch",
        description: "Your logistics team is drowning in WhatsApp messages and phone calls.",
    },
    Problem {
        icon: "fas fa-chart-column",
        title: "Poor Asset Use",
        description: "You own 10 trucks, but you could probably do the job with 7.",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: "1",
        title: "Digitize & Track",
        description: "Onboard your fleet and orders in minutes. Get a live dashboard showing the real-time location of every vehicle and the status of every delivery. No more flying blind.",
    },
    Step {
        number: "2",
        title: "Optimize & Orchestrate",
        description: "Our AI analyzes your orders, traffic, and unique 'last-100-meter' data to create the most efficient routes possible. Reduce fuel consumption, shorten delivery times, and increase the number of deliveries per truck.",
    },
    Step {
        number: "3",
        title: "Analyze & Improve",
        description: "Avara turns your movement data into business intelligence. Identify theft, understand true service times, and make data-driven decisions on how many vehicles you actually need.",
    },
];

pub const PLATFORM_LAYERS: [PlatformLayer; 3] = [
    PlatformLayer {
        layer: "Layer 1",
        title: "Logistics OS",
        description: "What we do today",
    },
    PlatformLayer {
        layer: "Layer 2",
        title: "Fintech Enablement",
        description: "Use verified delivery data to facilitate access to financing for your drivers and partners.",
    },
    PlatformLayer {
        layer: "Layer 3",
        title: "Market Intelligence",
        description: "Sell anonymized, predictive data on goods movement to the world's largest consumer brands.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_are_nonempty_and_sized() {
        assert_eq!(BRANDS.len(), 5);
        assert_eq!(INVESTORS.len(), 4);
        assert_eq!(PROBLEMS.len(), 4);
        assert_eq!(STEPS.len(), 3);
        assert_eq!(PLATFORM_LAYERS.len(), 3);
    }

    #[test]
    fn lists_keep_authored_order() {
        assert_eq!(BRANDS[0], "Simbisa Brands");
        assert_eq!(BRANDS[4], "Carrefour East Africa");
        assert_eq!(INVESTORS[0], "Google for Startups Africa");
        assert_eq!(INVESTORS[3], "Acumen Fund");
        assert_eq!(
            STEPS.map(|s| s.number),
            ["1", "2", "3"],
            "step cards must render in numbered order"
        );
        assert_eq!(
            PLATFORM_LAYERS.map(|l| l.layer),
            ["Layer 1", "Layer 2", "Layer 3"]
        );
    }

    #[test]
    fn lists_have_no_duplicates() {
        let brands: HashSet<_> = BRANDS.iter().collect();
        assert_eq!(brands.len(), BRANDS.len());
        let investors: HashSet<_> = INVESTORS.iter().collect();
        assert_eq!(investors.len(), INVESTORS.len());
        let titles: HashSet<_> = PROBLEMS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROBLEMS.len());
    }

    #[test]
    fn every_problem_has_a_glyph() {
        for problem in &PROBLEMS {
            assert!(problem.icon.starts_with("fas fa-"), "{}", problem.title);
        }
    }
}
