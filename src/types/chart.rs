use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub price: f64,
}

/// 图表窗口：short = 1h, medium = 24h, long = 7d
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Timeframe {
    #[serde(rename = "1h", alias = "short")]
    Short,
    #[default]
    #[serde(rename = "24h", alias = "medium")]
    Medium,
    #[serde(rename = "7d", alias = "long")]
    Long,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Short, Timeframe::Medium, Timeframe::Long];

    pub fn point_count(&self) -> usize {
        match self {
            Timeframe::Short => 12,
            Timeframe::Medium | Timeframe::Long => 7,
        }
    }

    /// 随机扰动的总幅度（相对基准价），实际偏移为 ±amplitude/2
    pub fn amplitude(&self) -> f64 {
        match self {
            Timeframe::Short => 0.02,
            Timeframe::Medium => 0.05,
            Timeframe::Long => 0.08,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Short => "1h",
            Timeframe::Medium => "24h",
            Timeframe::Long => "7d",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1h" | "short" => Ok(Timeframe::Short),
            "24h" | "medium" => Ok(Timeframe::Medium),
            "7d" | "long" => Ok(Timeframe::Long),
            other => Err(format!("unknown timeframe '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_parse_aliases() {
        assert_eq!("1h".parse::<Timeframe>(), Ok(Timeframe::Short));
        assert_eq!("MEDIUM".parse::<Timeframe>(), Ok(Timeframe::Medium));
        assert_eq!("7d".parse::<Timeframe>(), Ok(Timeframe::Long));
        assert!("30d".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_timeframe_serde_uses_window_labels() {
        assert_eq!(serde_json::to_string(&Timeframe::Long).unwrap(), "\"7d\"");
        let tf: Timeframe = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(tf, Timeframe::Short);
        assert_eq!(Timeframe::default(), Timeframe::Medium);
    }
}
