use chrono::NaiveDate;

// ============================================================================
// Dated series: the three shapes data takes on its way to the chart
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedValue {
    pub date: NaiveDate,
    pub value: f64,
}

impl DatedValue {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Daily closing prices, one per trading day, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    points: Vec<DatedValue>,
}

impl PriceSeries {
    /// Sorts by date; when a date repeats the later row wins.
    pub fn new(symbol: impl Into<String>, mut points: Vec<DatedValue>) -> Self {
        points.sort_by_key(|p| p.date);
        points.reverse();
        points.dedup_by_key(|p| p.date);
        points.reverse();
        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn points(&self) -> &[DatedValue] {
        &self.points
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}

/// One trends observation. `value` is None when the provider had no data for the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl InterestPoint {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }

    /// NaN counts as missing, same as None
    pub fn is_missing(&self) -> bool {
        self.value.is_none_or(f64::is_nan)
    }
}

/// Daily interest scores for one keyword, in provider order.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestSeries {
    pub keyword: String,
    points: Vec<InterestPoint>,
    /// The final point covers an incomplete day
    pub last_point_partial: bool,
}

impl InterestSeries {
    pub fn new(keyword: impl Into<String>, points: Vec<InterestPoint>) -> Self {
        Self {
            keyword: keyword.into(),
            points,
            last_point_partial: false,
        }
    }

    pub fn with_partial_tail(mut self, partial: bool) -> Self {
        self.last_point_partial = partial;
        self
    }

    pub fn points(&self) -> &[InterestPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_missing()).count()
    }

    /// Drops the first `n` points (everything when `n` exceeds the length).
    pub fn skip_leading(&self, n: usize) -> Self {
        Self {
            keyword: self.keyword.clone(),
            points: self.points.iter().skip(n).copied().collect(),
            last_point_partial: self.last_point_partial && n < self.points.len(),
        }
    }
}

/// Mentions re-indexed onto the price dates.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedSeries {
    pub label: String,
    pub points: Vec<DatedValue>,
}

impl AlignedSeries {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// What the aligner had to do to fit the mentions onto the price dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    pub price_points: usize,
    pub interest_points: usize,
    /// Price dates that found a mention value (missing values included)
    pub matched: usize,
    /// Mention values that were missing and became 0
    pub zero_filled: usize,
    /// Price dates with no mention row at all (also 0)
    pub unmatched_price_dates: Vec<NaiveDate>,
    /// Mention rows that fell on no price date
    pub dropped_interest_dates: Vec<NaiveDate>,
}

impl AlignmentReport {
    pub fn is_exact(&self) -> bool {
        self.unmatched_price_dates.is_empty() && self.dropped_interest_dates.is_empty()
    }
}

impl std::fmt::Display for AlignmentReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} price points, {} mention points: {} matched, {} zero-filled, {} price dates without mentions, {} mention dates dropped",
            self.price_points,
            self.interest_points,
            self.matched,
            self.zero_filled,
            self.unmatched_price_dates.len(),
            self.dropped_interest_dates.len(),
        )
    }
}
