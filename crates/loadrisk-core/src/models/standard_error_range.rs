// ABOUTME: Uncertainty-carrying quantity with optional lower, observed, and upper components
// ABOUTME: Component-wise arithmetic and list statistics that propagate the bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Every load and statistic in the engine is a [`StandardErrorRange`].
//!
//! Addition is component-wise. Subtraction, products and quotients take the
//! extremes over every combination of the operands' lowest, observed and
//! highest values, so the lower bound never exceeds the upper bound. A missing
//! bound falls back to the observed value. When neither operand carries an
//! explicit bound the result has none, so a plain observed value never grows
//! fabricated bounds.

#![allow(clippy::cast_precision_loss)]

use serde::{Deserialize, Serialize};

/// Measured-or-estimated quantity with asymmetric confidence bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardErrorRange {
    /// Lower confidence bound
    pub lower_bound: Option<f64>,
    /// Observed (central) value
    pub observed_value: Option<f64>,
    /// Upper confidence bound
    pub upper_bound: Option<f64>,
}

impl StandardErrorRange {
    /// Range holding only an observed value
    #[must_use]
    pub const fn observed(value: f64) -> Self {
        Self {
            lower_bound: None,
            observed_value: Some(value),
            upper_bound: None,
        }
    }

    /// Range with all three components present
    #[must_use]
    pub const fn with_bounds(lower: f64, observed: f64, upper: f64) -> Self {
        Self {
            lower_bound: Some(lower),
            observed_value: Some(observed),
            upper_bound: Some(upper),
        }
    }

    /// Whether no component is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lower_bound.is_none() && self.observed_value.is_none() && self.upper_bound.is_none()
    }

    /// Lower bound if present, else the observed value
    #[must_use]
    pub fn lowest_value(&self) -> Option<f64> {
        self.lower_bound.or(self.observed_value)
    }

    /// Upper bound if present, else the observed value
    #[must_use]
    pub fn highest_value(&self) -> Option<f64> {
        self.upper_bound.or(self.observed_value)
    }

    /// Observed value, treating absence as zero
    #[must_use]
    pub fn observed_or_zero(&self) -> f64 {
        self.observed_value.unwrap_or(0.0)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(f64, f64) -> Option<f64>) -> Self {
        let pair = |a: Option<f64>, b: Option<f64>| match (a, b) {
            (Some(a), Some(b)) => op(a, b),
            _ => None,
        };
        let lower_bound = if self.lower_bound.is_some() || other.lower_bound.is_some() {
            pair(self.lowest_value(), other.lowest_value())
        } else {
            None
        };
        let upper_bound = if self.upper_bound.is_some() || other.upper_bound.is_some() {
            pair(self.highest_value(), other.highest_value())
        } else {
            None
        };
        Self {
            lower_bound,
            observed_value: pair(self.observed_value, other.observed_value),
            upper_bound,
        }
    }

    fn has_bounds(&self) -> bool {
        self.lower_bound.is_some() || self.upper_bound.is_some()
    }

    fn candidates(&self) -> impl Iterator<Item = f64> {
        [self.lowest_value(), self.observed_value, self.highest_value()]
            .into_iter()
            .flatten()
    }

    fn cross_with(&self, other: &Self, op: impl Fn(f64, f64) -> Option<f64>) -> Self {
        let observed_value = match (self.observed_value, other.observed_value) {
            (Some(a), Some(b)) => op(a, b),
            _ => None,
        };
        if !self.has_bounds() && !other.has_bounds() {
            return Self {
                observed_value,
                ..Self::default()
            };
        }
        let op = &op;
        let results: Vec<f64> = self
            .candidates()
            .flat_map(|a| other.candidates().filter_map(move |b| op(a, b)))
            .filter(|value| value.is_finite())
            .collect();
        Self {
            lower_bound: results.iter().copied().reduce(f64::min),
            observed_value,
            upper_bound: results.iter().copied().reduce(f64::max),
        }
    }

    // monotonic ops only; a decreasing op swaps the bounds back into order
    fn map(&self, op: impl Fn(f64) -> Option<f64>) -> Self {
        let mut mapped = Self {
            lower_bound: self.lower_bound.and_then(&op),
            observed_value: self.observed_value.and_then(&op),
            upper_bound: self.upper_bound.and_then(&op),
        };
        if let (Some(lower), Some(upper)) = (mapped.lower_bound, mapped.upper_bound) {
            if lower > upper {
                mapped.lower_bound = Some(upper);
                mapped.upper_bound = Some(lower);
            }
        }
        mapped
    }

    /// Accumulate another range into this one; adding an empty range is a no-op
    pub fn add(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        // a side lacking an observed value contributes nothing to that component
        let observed = match (self.observed_value, other.observed_value) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
        let mut sum = self.zip_with(other, |a, b| Some(a + b));
        sum.observed_value = observed;
        *self = sum;
    }

    /// Difference; the lower bound is this range's lowest minus `other`'s highest
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.cross_with(other, |a, b| Some(a - b))
    }

    /// Scale every component by a factor
    #[must_use]
    pub fn multiply(&self, factor: f64) -> Self {
        self.map(|value| Some(value * factor))
    }

    /// Product, bounded by the extreme products of the operands
    #[must_use]
    pub fn multiply_range(&self, other: &Self) -> Self {
        self.cross_with(other, |a, b| Some(a * b))
    }

    /// Divide every component by a scalar; division by zero empties the range
    #[must_use]
    pub fn divide(&self, divisor: f64) -> Self {
        self.map(|value| checked_div(value, divisor))
    }

    /// Quotient, bounded by the extreme quotients of the operands
    ///
    /// A zero observed divisor leaves the observed value absent; zero divisor
    /// bounds are skipped when the bounds are formed.
    #[must_use]
    pub fn divide_range(&self, other: &Self) -> Self {
        self.cross_with(other, checked_div)
    }

    /// Sum of the non-empty ranges, or `None` when there are none
    #[must_use]
    pub fn sum(values: &[Self]) -> Option<Self> {
        let mut non_empty = values.iter().filter(|value| !value.is_empty()).peekable();
        non_empty.peek()?;
        let mut total = Self::default();
        for value in non_empty {
            total.add(value);
        }
        Some(total)
    }

    /// Mean of the non-empty ranges, or `None` when there are none
    #[must_use]
    pub fn average(values: &[Self]) -> Option<Self> {
        let count = non_empty_count(values);
        Self::sum(values).map(|total| total.divide(count as f64))
    }

    /// Component-wise sample standard deviation; needs at least two non-empty ranges
    #[must_use]
    pub fn stddev(values: &[Self]) -> Option<Self> {
        let present: Vec<&Self> = values.iter().filter(|value| !value.is_empty()).collect();
        if present.len() < 2 {
            return None;
        }
        let any_lower = present.iter().any(|value| value.lower_bound.is_some());
        let any_upper = present.iter().any(|value| value.upper_bound.is_some());

        let lower = any_lower
            .then(|| sample_stddev(present.iter().map(|value| value.lowest_value())))
            .flatten();
        let upper = any_upper
            .then(|| sample_stddev(present.iter().map(|value| value.highest_value())))
            .flatten();
        let observed = sample_stddev(present.iter().map(|value| value.observed_value));

        Some(Self {
            lower_bound: lower,
            observed_value: observed,
            upper_bound: upper,
        })
    }
}

fn checked_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator.abs() < f64::EPSILON {
        None
    } else {
        Some(numerator / denominator)
    }
}

fn non_empty_count(values: &[StandardErrorRange]) -> usize {
    values.iter().filter(|value| !value.is_empty()).count()
}

fn sample_stddev(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let values: Vec<f64> = values.collect::<Option<Vec<f64>>>()?;
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_treats_missing_bound_as_observed() {
        let mut total = StandardErrorRange::with_bounds(8.0, 10.0, 12.0);
        total.add(&StandardErrorRange::observed(5.0));

        assert_eq!(total.lower_bound, Some(13.0));
        assert_eq!(total.observed_value, Some(15.0));
        assert_eq!(total.upper_bound, Some(17.0));
    }

    #[test]
    fn test_add_plain_values_does_not_invent_bounds() {
        let mut total = StandardErrorRange::observed(2.0);
        total.add(&StandardErrorRange::observed(3.0));
        assert_eq!(total, StandardErrorRange::observed(5.0));
    }

    #[test]
    fn test_add_empty_is_noop() {
        let mut total = StandardErrorRange::observed(2.0);
        total.add(&StandardErrorRange::default());
        assert_eq!(total, StandardErrorRange::observed(2.0));
    }

    #[test]
    fn test_divide_by_zero_is_absent() {
        let value = StandardErrorRange::observed(4.0).divide(0.0);
        assert!(value.is_empty());
    }

    #[test]
    fn test_subtract_crosses_bounds() {
        let difference = StandardErrorRange::observed(120.0)
            .subtract(&StandardErrorRange::with_bounds(90.0, 100.0, 110.0));
        assert_eq!(difference.lower_bound, Some(10.0));
        assert_eq!(difference.observed_value, Some(20.0));
        assert_eq!(difference.upper_bound, Some(30.0));

        let both = StandardErrorRange::with_bounds(8.0, 10.0, 12.0)
            .subtract(&StandardErrorRange::with_bounds(1.0, 2.0, 3.0));
        assert_eq!(both.lower_bound, Some(5.0));
        assert_eq!(both.observed_value, Some(8.0));
        assert_eq!(both.upper_bound, Some(11.0));
    }

    #[test]
    fn test_divide_range_crosses_bounds() {
        let quotient = StandardErrorRange::observed(100.0)
            .divide_range(&StandardErrorRange::with_bounds(40.0, 50.0, 80.0));
        assert_eq!(quotient.lower_bound, Some(1.25));
        assert_eq!(quotient.observed_value, Some(2.0));
        assert_eq!(quotient.upper_bound, Some(2.5));

        let both = StandardErrorRange::with_bounds(90.0, 100.0, 120.0)
            .divide_range(&StandardErrorRange::with_bounds(40.0, 50.0, 60.0));
        assert_eq!(both.lower_bound, Some(1.5));
        assert_eq!(both.observed_value, Some(2.0));
        assert_eq!(both.upper_bound, Some(3.0));
    }

    #[test]
    fn test_plain_values_stay_plain() {
        let quotient = StandardErrorRange::observed(6.0).divide_range(&StandardErrorRange::observed(3.0));
        assert_eq!(quotient, StandardErrorRange::observed(2.0));
        let product = StandardErrorRange::observed(6.0).multiply_range(&StandardErrorRange::observed(3.0));
        assert_eq!(product, StandardErrorRange::observed(18.0));
    }

    #[test]
    fn test_negative_scale_keeps_bounds_ordered() {
        let scaled = StandardErrorRange::with_bounds(1.0, 2.0, 3.0).multiply(-1.0);
        assert_eq!(scaled.lower_bound, Some(-3.0));
        assert_eq!(scaled.observed_value, Some(-2.0));
        assert_eq!(scaled.upper_bound, Some(-1.0));
    }

    #[test]
    fn test_stddev_requires_two_values() {
        assert!(StandardErrorRange::stddev(&[StandardErrorRange::observed(1.0)]).is_none());
        let spread = StandardErrorRange::stddev(&[
            StandardErrorRange::observed(2.0),
            StandardErrorRange::observed(4.0),
        ])
        .unwrap();
        assert!((spread.observed_value.unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
