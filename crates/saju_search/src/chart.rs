//! Full chart orchestration: birth input → every analysis section.
//!
//! Provides two entry points:
//! - `analyze_pillars`: analyzers that need only the four pillars
//! - `analyze_chart`: resolves the birth, derives pillars, then adds luck
//!   and annual sections on top of `analyze_pillars`

use saju_base::{
    ElementTally, FourPillars, PatternInputs, TenGodCounts, chart_hidden_stems, chart_stages,
    chart_ten_gods, detect, detect_sinsal, match_patterns, strength, transform_report,
};
use saju_time::SolarTermIndex;

use crate::chart_types::{ChartAnalysis, ChartConfig, LuckInteractions, NatalAnalysis};
use crate::error::SearchError;
use crate::input::{BirthInput, LunarConverter};
use crate::interactions::period_interactions;
use crate::luck::{annual_pillars, luck_pillars};
use crate::pillars::four_pillars;

/// Run the pillar-only analyzers over a chart.
pub fn analyze_pillars(pillars: FourPillars, config: &ChartConfig) -> NatalAnalysis {
    let tally = ElementTally::of(&pillars);
    let harmony = detect(&pillars, config.harmony_priority);
    let transformation = transform_report(tally, &harmony);
    let strength = strength(&pillars);
    let ten_god_counts = TenGodCounts::of(&pillars);

    // Patterns read the star report even when it is not returned.
    let sinsal = (config.include_sinsal || config.include_patterns).then(|| detect_sinsal(&pillars));
    let patterns = match (&sinsal, config.include_patterns) {
        (Some(sinsal), true) => Some(match_patterns(PatternInputs {
            strength: &strength,
            ten_gods: &ten_god_counts,
            harmony: &harmony,
            sinsal,
        })),
        _ => None,
    };

    NatalAnalysis {
        pillars,
        tally,
        transformation,
        ten_gods: chart_ten_gods(&pillars),
        ten_god_counts,
        strength,
        harmony,
        sinsal: sinsal.filter(|_| config.include_sinsal),
        hidden_stems: config
            .include_hidden_stems
            .then(|| chart_hidden_stems(&pillars)),
        twelve_stages: config.include_twelve_stages.then(|| chart_stages(&pillars)),
        patterns,
    }
}

/// One-shot chart for a birth input.
///
/// Lunar input is resolved through `converter` first. Fails with
/// `ReferenceDataMissing` when the index does not cover the birth (or, with
/// luck enabled, the adjacent month-opening term).
pub fn analyze_chart(
    input: &BirthInput,
    index: &SolarTermIndex,
    converter: &dyn LunarConverter,
    config: &ChartConfig,
) -> Result<ChartAnalysis, SearchError> {
    let birth = input.resolve(converter)?;
    let pillars = four_pillars(index, birth)?;
    let natal = analyze_pillars(pillars, config);

    let luck = if config.include_luck {
        Some(luck_pillars(
            index,
            birth,
            &pillars,
            input.gender,
            config.luck_pillar_count,
        )?)
    } else {
        None
    };

    let luck_interactions = match (&luck, config.include_period_interactions) {
        (Some(luck), true) => Some(
            luck.pillars
                .iter()
                .map(|&entry| LuckInteractions {
                    luck: entry,
                    interactions: period_interactions(&pillars, entry.pillar),
                })
                .collect(),
        ),
        _ => None,
    };

    let annual = config
        .annual_years
        .clone()
        .map(|years| annual_pillars(years, pillars.day_stem()))
        .transpose()?;

    tracing::debug!(
        %birth,
        chart = %pillars,
        score = natal.strength.score,
        "chart analysis complete"
    );

    Ok(ChartAnalysis {
        birth,
        gender: input.gender,
        calendar: input.calendar,
        natal,
        luck,
        luck_interactions,
        annual,
    })
}
