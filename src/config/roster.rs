use crate::domain::{Competitor, Placement, PlayInRouting, SeedPool};

/// 2025 world championship field.
///
/// Odds ranges are outright-winner decimal odds collected across bookmakers
/// before the event. Seed pools follow the official Swiss draw seeding; the
/// pools of TES, KT, T1 and iG are overridden by the play-in routing.
pub fn get_competitors() -> Vec<Competitor> {
    vec![
        Competitor::new("GEN", "Gen.G", "LCK", (2.10, 2.40), SeedPool::One),
        Competitor::new("HLE", "Hanwha Life", "LCK", (2.80, 3.25), SeedPool::Two),
        Competitor::new("BLG", "Bilibili Gaming", "LPL", (4.80, 5.75), SeedPool::One),
        Competitor::new("T1", "T1", "LCK", (5.30, 6.50), SeedPool::Three),
        Competitor::new("AL", "Anyone's Legend", "LPL", (8.00, 9.50), SeedPool::Two),
        Competitor::new("TES", "Top Esports", "LPL", (6.30, 11.00), SeedPool::Two),
        Competitor::new("KT", "KT Rolster", "LCK", (12.00, 21.00), SeedPool::Two),
        Competitor::new("iG", "Invictus Gaming", "LPL", (15.00, 23.00), SeedPool::Three),
        Competitor::new("G2", "G2 Esports", "LEC", (25.00, 51.00), SeedPool::One),
        Competitor::new("FLY", "FlyQuest", "LTA", (30.00, 67.00), SeedPool::One),
        Competitor::new("MKOI", "Movistar KOI", "LEC", (30.00, 71.00), SeedPool::Two),
        Competitor::new("FNC", "Fnatic", "LEC", (35.00, 81.00), SeedPool::Three),
        Competitor::new("CFO", "CTBC Flying Oyster", "LCP", (35.00, 81.00), SeedPool::One),
        Competitor::new("PSG", "PSG Talon", "LCP", (45.00, 101.00), SeedPool::Three),
        Competitor::new("100T", "100 Thieves", "LTA", (50.00, 151.00), SeedPool::Three),
        Competitor::new("TSW", "Team Secret Whales", "LCP", (75.00, 151.00), SeedPool::Two),
        Competitor::new("VKS", "Vivo Keyd Stars", "LTA", (75.00, 251.00), SeedPool::Two),
    ]
}

/// Play-in between the fourth seeds of LPL (iG) and LCK (T1).
///
/// The winning region sends its third seed to pool 2; the other region's
/// third seed and the play-in winner go to pool 3.
pub fn get_play_in_routing() -> PlayInRouting {
    PlayInRouting {
        side_a: "iG".to_string(),
        side_b: "T1".to_string(),
        on_side_a_win: vec![
            Placement::new("TES", SeedPool::Two),
            Placement::new("KT", SeedPool::Three),
            Placement::new("iG", SeedPool::Three),
        ],
        on_side_b_win: vec![
            Placement::new("KT", SeedPool::Two),
            Placement::new("TES", SeedPool::Three),
            Placement::new("T1", SeedPool::Three),
        ],
    }
}
