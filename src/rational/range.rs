use std::ops::RangeInclusive;

use super::Rational;

/// 闭区间 `[start, end]`
///
/// 不对空区间或反向区间做特殊处理：`start > end` 时区间为空
///
/// # 示例
/// ```
/// # use rational::{DivBy, RationalRange};
/// let range = RationalRange::new(1i64.div_by(3).unwrap(), 2i64.div_by(3).unwrap());
/// assert!(range.contains(&1i64.div_by(2).unwrap()));
/// assert!(!range.contains(&1i64.div_by(4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Rational {
        &self.start
    }

    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// `start <= value && value <= end`
    pub fn contains(&self, value: &Rational) -> bool {
        self.start <= *value && *value <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl Rational {
    /// 以 `self` 为下界、`end` 为上界构造闭区间
    ///
    /// # 示例
    /// ```
    /// # use rational::Rational;
    /// let range = Rational::from(1).range_to(Rational::from(3));
    /// assert!(range.contains(&Rational::from(2)));
    /// assert!(range.contains(&Rational::from(3)));
    /// ```
    pub fn range_to(self, end: Rational) -> RationalRange {
        RationalRange::new(self, end)
    }
}

#[cfg(test)]
mod tests {
    use crate::rational::{DivBy, Rational, RationalRange};

    fn frac(nume: i64, deno: i64) -> Rational {
        nume.div_by(deno).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = frac(1, 3).range_to(frac(2, 3));
        assert!(range.contains(&frac(1, 3)));
        assert!(range.contains(&frac(2, 3)));
        assert!(range.contains(&frac(-2, -4)));
        assert!(!range.contains(&frac(3, 4)));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = RationalRange::new(frac(2, 3), frac(1, 3));
        assert!(range.is_empty());
        assert!(!range.contains(&frac(1, 2)));
        assert!(!range.contains(&frac(1, 3)));
        assert!(!range.contains(&frac(2, 3)));
    }

    #[test]
    fn test_negative_denominator_bounds() {
        // -1/2 stored as 1/-2
        let range = frac(1, -2).range_to(frac(0, 1));
        assert!(!range.is_empty());
        assert!(range.contains(&frac(-1, 4)));
        assert!(!range.contains(&frac(1, 4)));
    }

    #[test]
    fn test_from_range_inclusive() {
        let range: RationalRange = (frac(1, 3)..=frac(2, 3)).into();
        assert_eq!(range.start(), &frac(2, 6));
        assert_eq!(range.end(), &frac(4, 6));
    }
}
