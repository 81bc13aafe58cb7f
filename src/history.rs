// Price history series shown in the product detail view.
use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceTrend {
    pub direction: Direction,
    /// Difference between the last two points.
    pub delta: f64,
    /// Absolute change relative to the second to last point, one decimal.
    pub percent: f64,
}

impl PriceTrend {
    /// Compares the last two points. Needs two points and a non-zero previous price.
    pub fn from_history(history: &[PricePoint]) -> Option<Self> {
        let [.., previous, last] = history else {
            return None;
        };
        if previous.price == 0.0 {
            return None;
        }

        let delta = last.price - previous.price;
        let percent = ((delta / previous.price) * 1000.0).round().abs() / 10.0;
        let direction = if delta >= 0.0 { Direction::Up } else { Direction::Down };
        Some(Self { direction, delta, percent })
    }

    pub fn label(&self) -> String {
        let word = match self.direction {
            Direction::Up => "Trending up",
            Direction::Down => "Trending down",
        };
        format!("{} by {}% this month", word, self.percent)
    }
}

/// Six monthly points starting 2023-01-01 with prices in `0..100`.
pub fn dummy_history<R: Rng>(rng: &mut R) -> Vec<PricePoint> {
    (1..=6)
        .filter_map(|month| NaiveDate::from_ymd_opt(2023, month, 1))
        .map(|date| PricePoint {
            date,
            price: f64::from(rng.random_range(0..100_u32)),
        })
        .collect()
}
