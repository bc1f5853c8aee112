use std::ops::RangeInclusive;

use saju_base::{FourPillars, Stem};
use saju_search::{
    AnnualPillar, BirthInput, ChartAnalysis, ChartConfig, Gender, LuckPillars, LunarConverter,
    NatalAnalysis, SolarOnly, analyze_chart, analyze_pillars, annual_pillars, four_pillars,
    luck_pillars,
};
use saju_time::{BirthInstant, TermBoundary};
use serde::Serialize;

use crate::config::SajuConfig;
use crate::error::SajuError;
use crate::global::{chart_defaults, index, init, set_defaults};

/// Load configuration from the environment, validate it, and initialize the
/// global index from `SAJU__SOLAR_TERMS_PATH`.
pub fn init_from_env() -> Result<SajuConfig, SajuError> {
    let config = SajuConfig::load()?;
    config.validate()?;
    let path = config.require_solar_terms_path()?;
    init(path)?;
    set_defaults(config.chart_config());
    tracing::info!(path = %path.display(), "initialized from environment");
    Ok(config)
}

/// Four pillars for a solar-calendar birth instant.
pub fn pillars(birth: BirthInstant) -> Result<FourPillars, SajuError> {
    Ok(four_pillars(index()?, birth)?)
}

/// Full chart for a solar-calendar input with the configured defaults.
pub fn chart(input: &BirthInput) -> Result<ChartAnalysis, SajuError> {
    chart_with(input, &SolarOnly, &chart_defaults())
}

/// Full chart with an explicit lunar converter and configuration.
pub fn chart_with(
    input: &BirthInput,
    converter: &dyn LunarConverter,
    config: &ChartConfig,
) -> Result<ChartAnalysis, SajuError> {
    Ok(analyze_chart(input, index()?, converter, config)?)
}

/// Luck pillars for a solar-calendar birth, using the configured count.
pub fn luck(birth: BirthInstant, gender: Gender) -> Result<LuckPillars, SajuError> {
    luck_with(birth, gender, chart_defaults().luck_pillar_count)
}

/// Luck pillars with an explicit count (1..=12).
pub fn luck_with(
    birth: BirthInstant,
    gender: Gender,
    count: u8,
) -> Result<LuckPillars, SajuError> {
    let idx = index()?;
    let natal = four_pillars(idx, birth)?;
    Ok(luck_pillars(idx, birth, &natal, gender, count)?)
}

/// Pillar-only analysis of a chart string such as `庚辰 乙酉 癸未 庚申`.
///
/// Needs no index.
pub fn analyze(chart: &str) -> Result<NatalAnalysis, SajuError> {
    analyze_with(chart, &chart_defaults())
}

/// [`analyze`] with an explicit configuration.
pub fn analyze_with(chart: &str, config: &ChartConfig) -> Result<NatalAnalysis, SajuError> {
    let pillars: FourPillars = chart.parse()?;
    Ok(analyze_pillars(pillars, config))
}

/// Annual pillars for `years` against a day stem. Needs no index.
pub fn annual(
    years: RangeInclusive<i32>,
    day_stem: Stem,
) -> Result<Vec<AnnualPillar>, SajuError> {
    Ok(annual_pillars(years, day_stem)?)
}

/// Month-opening terms on either side of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurroundingTerms {
    pub instant: BirthInstant,
    /// Latest at or before `instant`.
    pub latest: Option<TermBoundary>,
    /// First strictly after `instant`.
    pub next: Option<TermBoundary>,
}

/// Month-opening terms around `instant` in the global index.
pub fn surrounding_terms(instant: BirthInstant) -> Result<SurroundingTerms, SajuError> {
    let idx = index()?;
    Ok(SurroundingTerms {
        instant,
        latest: idx.latest_primary(instant),
        next: idx.next_primary(instant),
    })
}
