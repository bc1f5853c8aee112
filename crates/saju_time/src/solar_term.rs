//! The 24 solar terms (절기/중기) of the East-Asian solar calendar.
//!
//! Terms are ordered from 입춘 (start of spring). Even indices are the 12
//! primary terms that open a solar month; odd indices are the mid-month
//! terms that never move a month boundary.

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SolarTerm {
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
    SpringEquinox,
    PureBrightness,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
}

/// All 24 solar terms in order (index 0 = 입춘).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
    SolarTerm::SpringEquinox,
    SolarTerm::PureBrightness,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
];

const KOREAN_NAMES: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지", "소한", "대한",
];

const HANJA_NAMES: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "淸明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const ENGLISH_NAMES: [&str; 24] = [
    "start_of_spring",
    "rain_water",
    "awakening_of_insects",
    "spring_equinox",
    "pure_brightness",
    "grain_rain",
    "start_of_summer",
    "grain_buds",
    "grain_in_ear",
    "summer_solstice",
    "minor_heat",
    "major_heat",
    "start_of_autumn",
    "end_of_heat",
    "white_dew",
    "autumn_equinox",
    "cold_dew",
    "frost_descent",
    "start_of_winter",
    "minor_snow",
    "major_snow",
    "winter_solstice",
    "minor_cold",
    "major_cold",
];

impl SolarTerm {
    /// 0-based index (입춘=0 .. 대한=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::StartOfSpring => 0,
            Self::RainWater => 1,
            Self::AwakeningOfInsects => 2,
            Self::SpringEquinox => 3,
            Self::PureBrightness => 4,
            Self::GrainRain => 5,
            Self::StartOfSummer => 6,
            Self::GrainBuds => 7,
            Self::GrainInEar => 8,
            Self::SummerSolstice => 9,
            Self::MinorHeat => 10,
            Self::MajorHeat => 11,
            Self::StartOfAutumn => 12,
            Self::EndOfHeat => 13,
            Self::WhiteDew => 14,
            Self::AutumnEquinox => 15,
            Self::ColdDew => 16,
            Self::FrostDescent => 17,
            Self::StartOfWinter => 18,
            Self::MinorSnow => 19,
            Self::MajorSnow => 20,
            Self::WinterSolstice => 21,
            Self::MinorCold => 22,
            Self::MajorCold => 23,
        }
    }

    /// Korean name, the canonical form used in index files.
    pub fn korean(self) -> &'static str {
        KOREAN_NAMES[self.index() as usize]
    }

    /// Traditional Hanja name.
    pub fn hanja(self) -> &'static str {
        HANJA_NAMES[self.index() as usize]
    }

    /// snake_case English name.
    pub fn name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }

    /// Whether this term opens a solar month (절기).
    pub const fn is_primary(self) -> bool {
        self.index() % 2 == 0
    }

    /// Position of a primary term in the 12-month cycle (입춘=0 .. 소한=11).
    ///
    /// Mid-month terms return `None`.
    pub const fn month_ordinal(self) -> Option<u8> {
        if self.is_primary() {
            Some(self.index() / 2)
        } else {
            None
        }
    }

    /// Resolve a term from its Korean, Hanja, or English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let lowered = name.to_ascii_lowercase().replace([' ', '-'], "_");
        ALL_SOLAR_TERMS.iter().copied().find(|t| {
            t.korean() == name
                || t.hanja() == name
                || (t.index() == 4 && name == "清明")
                || t.name() == lowered
        })
    }

    /// All 24 terms in order.
    pub const fn all() -> &'static [SolarTerm; 24] {
        &ALL_SOLAR_TERMS
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean())
    }
}

impl serde::Serialize for SolarTerm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.korean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_order() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
        }
    }

    #[test]
    fn twelve_primary_terms() {
        let primary: Vec<_> = ALL_SOLAR_TERMS.iter().filter(|t| t.is_primary()).collect();
        assert_eq!(primary.len(), 12);
        assert_eq!(primary[0].korean(), "입춘");
        assert_eq!(primary[1].korean(), "경칩");
        assert_eq!(primary[11].korean(), "소한");
    }

    #[test]
    fn month_ordinals() {
        assert_eq!(SolarTerm::StartOfSpring.month_ordinal(), Some(0));
        assert_eq!(SolarTerm::WhiteDew.month_ordinal(), Some(7));
        assert_eq!(SolarTerm::MinorCold.month_ordinal(), Some(11));
        assert_eq!(SolarTerm::RainWater.month_ordinal(), None);
    }

    #[test]
    fn names_resolve() {
        assert_eq!(SolarTerm::from_name("백로"), Some(SolarTerm::WhiteDew));
        assert_eq!(SolarTerm::from_name("白露"), Some(SolarTerm::WhiteDew));
        assert_eq!(SolarTerm::from_name("White Dew"), Some(SolarTerm::WhiteDew));
        assert_eq!(SolarTerm::from_name("清明"), Some(SolarTerm::PureBrightness));
        assert_eq!(SolarTerm::from_name("not a term"), None);
    }
}
