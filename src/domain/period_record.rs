/// One elapsed contribution period as read from the period data file.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRecord {
    pub period: u32,
    pub contribution: f64,
    /// Whole-number scaled percentage, `2.8` means 2.8 %.
    pub return_pct: f64,
    pub valuation: f64,
    pub gross_savings: Option<f64>,
    pub projected_total: Option<f64>,
}

impl PeriodRecord {
    pub fn new(period: u32, contribution: f64, return_pct: f64, valuation: f64) -> Self {
        Self {
            period,
            contribution,
            return_pct,
            valuation,
            gross_savings: None,
            projected_total: None,
        }
    }

    /// Portion of the valuation produced by returns, when gross savings are known.
    pub fn returns_generated(&self) -> Option<f64> {
        self.gross_savings.map(|gross| self.valuation - gross)
    }
}
