//! Fixed advisory templates.

use carbon_core::constants::{
    SOURCE_BUS_DIESEL, SOURCE_CANTEEN_LPG, SOURCE_ELECTRICITY, SOURCE_WASTE_LANDFILL,
};

use super::{CostTier, Priority, Recommendation};

/// Aggregate reduction estimate quoted in every summary.
pub const ESTIMATED_TOTAL_REDUCTION: &str = "25-40% over 3-5 years";

fn actions(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Template for a recognized source type. `None` for anything else.
pub fn source_template(source_type: &str, tonnes: f64, share: f64) -> Option<Recommendation> {
    let magnitude = format!("{tonnes:.2} tonnes CO2e ({share:.1}% of activity emissions)");
    let rec = match source_type {
        SOURCE_ELECTRICITY => Recommendation {
            category: "Energy".into(),
            title: "Focus on Energy Efficiency".into(),
            description: format!(
                "Electricity is the largest emission source at {magnitude}. \
                 Cut grid demand and shift to on-site renewables."
            ),
            priority: Priority::High,
            actions: actions(&[
                "Replace remaining fluorescent fittings with LED lighting",
                "Install rooftop solar on large flat roofs",
                "Add occupancy sensors to classrooms and corridors",
                "Set HVAC schedules to match the academic timetable",
            ]),
            expected_reduction: "20-30% of electricity emissions".into(),
            cost: CostTier::High,
            timeframe: "1-3 years".into(),
            source: Some(source_type.to_string()),
        },
        SOURCE_BUS_DIESEL => Recommendation {
            category: "Transport".into(),
            title: "Promote Green Transportation".into(),
            description: format!(
                "Diesel bus fuel is the largest emission source at {magnitude}. \
                 Reduce fleet mileage and move to cleaner vehicles."
            ),
            priority: Priority::High,
            actions: actions(&[
                "Optimize bus routes and remove low-occupancy trips",
                "Run a carpooling and cycling incentive scheme",
                "Pilot electric buses on the busiest route",
                "Train drivers in fuel-efficient driving",
            ]),
            expected_reduction: "15-25% of transport emissions".into(),
            cost: CostTier::High,
            timeframe: "1-2 years".into(),
            source: Some(source_type.to_string()),
        },
        SOURCE_CANTEEN_LPG => Recommendation {
            category: "Canteen".into(),
            title: "Optimize Canteen Operations".into(),
            description: format!(
                "Canteen LPG is the largest emission source at {magnitude}. \
                 Move cooking away from bottled gas."
            ),
            priority: Priority::Medium,
            actions: actions(&[
                "Switch high-use burners to induction cooking",
                "Trial solar cookers for bulk boiling",
                "Batch-cook to reduce burner idle time",
            ]),
            expected_reduction: "10-20% of canteen emissions".into(),
            cost: CostTier::Medium,
            timeframe: "6-12 months".into(),
            source: Some(source_type.to_string()),
        },
        SOURCE_WASTE_LANDFILL => Recommendation {
            category: "Waste".into(),
            title: "Improve Waste Management".into(),
            description: format!(
                "Landfilled waste is the largest emission source at {magnitude}. \
                 Divert organic and recyclable waste from landfill."
            ),
            priority: Priority::High,
            actions: actions(&[
                "Start composting canteen and garden waste",
                "Place segregated recycling bins in every building",
                "Audit waste streams each semester",
            ]),
            expected_reduction: "30-50% of waste emissions".into(),
            cost: CostTier::Low,
            timeframe: "3-6 months".into(),
            source: Some(source_type.to_string()),
        },
        _ => return None,
    };
    Some(rec)
}

/// Advisory for population emissions, which are not a reduction target.
pub fn human_advisory(total_tonnes: f64, average_population: u64) -> Recommendation {
    Recommendation {
        category: "Population".into(),
        title: "Understand Human Emissions".into(),
        description: format!(
            "An average campus population of {average_population} people accounts for \
             {total_tonnes:.2} tonnes CO2e from respiration. This is a natural biological \
             process, not fossil combustion, and is not a target for direct reduction."
        ),
        priority: Priority::Low,
        actions: actions(&[
            "Report population emissions separately from operational emissions",
            "Use per-capita figures to normalize year-on-year comparisons",
        ]),
        expected_reduction: "Not applicable".into(),
        cost: CostTier::Low,
        timeframe: "Ongoing".into(),
        source: None,
    }
}

/// The four recommendations included with every report, in order.
pub fn general() -> Vec<Recommendation> {
    vec![
        Recommendation {
            category: "Monitoring".into(),
            title: "Data-Driven Monitoring".into(),
            description: "Continue tracking emissions monthly to identify trends and \
                          measure improvement."
                .into(),
            priority: Priority::Medium,
            actions: actions(&[
                "Record activity data every month",
                "Install sub-meters on the largest buildings",
                "Review the dashboard at each facilities meeting",
            ]),
            expected_reduction: "5-10% through early detection".into(),
            cost: CostTier::Low,
            timeframe: "Ongoing".into(),
            source: None,
        },
        Recommendation {
            category: "Culture".into(),
            title: "Campus Awareness Campaign".into(),
            description: "Educate students and staff about sustainable practices and \
                          carbon footprint reduction."
                .into(),
            priority: Priority::Medium,
            actions: actions(&[
                "Run an annual sustainability week",
                "Appoint green champions in each department",
                "Publish monthly emissions figures to the campus",
            ]),
            expected_reduction: "5-15% through behavior change".into(),
            cost: CostTier::Low,
            timeframe: "6-12 months".into(),
            source: None,
        },
        Recommendation {
            category: "Infrastructure".into(),
            title: "Infrastructure Investment".into(),
            description: "Plan capital upgrades that lock in long-term reductions.".into(),
            priority: Priority::High,
            actions: actions(&[
                "Retrofit building insulation and glazing",
                "Replace end-of-life equipment with efficient models",
                "Evaluate a campus renewable power purchase agreement",
            ]),
            expected_reduction: "20-35% over the asset lifetime".into(),
            cost: CostTier::High,
            timeframe: "3-5 years".into(),
            source: None,
        },
        Recommendation {
            category: "Quick Wins".into(),
            title: "Quick Wins".into(),
            description: "Low-cost changes that can start this month.".into(),
            priority: Priority::Low,
            actions: actions(&[
                "Switch off lights and equipment after hours",
                "Set default printer duplexing",
                "Fix compressed-air and water leaks",
            ]),
            expected_reduction: "2-5%".into(),
            cost: CostTier::Low,
            timeframe: "1-3 months".into(),
            source: None,
        },
    ]
}
