// A high-precision rational lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! # rational
//!
//! 基于任意精度整数的精确有理数运算，所有值在构造时自动约分
//!
//! # 核心功能
//! - 基本四则运算 (`+`, `-`, `*`, `/` 等) 与取负
//! - 比较、相等与哈希（`1/2` 与 `-1/-2` 视为同一个值）
//! - 字符串解析与格式化 (`"n"` 或 `"n/d"`)
//! - 闭区间[成员判断](crate::RationalRange)

pub(crate) mod utils;
mod range;

pub use range::RationalRange;

use std::{
    cmp::Ordering, fmt::{self, Display, Formatter}, hash::{Hash, Hasher}, iter::{Product, Sum}, ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign
    }, str::FromStr
};

use num_bigint::{BigInt, ParseBigIntError, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RationalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("cannot parse {input:?} as a rational")]
    ParseError {
        input: String,
        // None when the literal is rejected before reaching the BigInt parser
        source: Option<ParseBigIntError>,
    },

    #[error("internal consistency failure: {0}")]
    InternalConsistency(&'static str),

    #[error("value does not fit in {target}")]
    OutOfRange { target: &'static str },
}

const ZERO_DENOMINATOR: RationalError = RationalError::InvalidArgument("denominator must not be zero");
const DIVISION_BY_ZERO: RationalError = RationalError::InvalidArgument("division by a rational whose numerator is zero");

const HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// 有理数类型，使用 `BigInt` 存储分子分母
///
/// 同时保留构造时传入的原始分子分母，以及约分后的结果。
/// 约分后的分母恒为正，符号由分子携带
///
/// # 示例 - 基础使用
/// ```
/// use rational::{DivBy, Rational};
///
/// let a = 3i64.div_by(4).unwrap(); // 3/4
/// let b = Rational::from(2);       // 2/1
/// assert_eq!(a + b, 11i64.div_by(4).unwrap());
/// ```
///
/// # 任意精度
/// ```
/// # use rational::Rational;
/// let a: Rational = "1234567890123456789012345678901234567890/2469135780246913578024691357802469135780".parse().unwrap();
/// assert_eq!(a.to_string(), "1/2");
/// ```
#[derive(Debug, Clone)]
pub struct Rational {
    nume: BigInt,
    deno: BigInt,
    normalized_nume: BigInt,
    normalized_deno: BigInt,
    nume_sign: i8,
    deno_sign: i8,
    is_positive: bool,
}

impl Rational {
    /// 创建新有理数，自动约分
    ///
    /// # 参数
    /// - `nume`: 分子
    /// - `deno`: 分母 (非零)
    ///
    /// # 错误
    /// 分母为零时返回 `RationalError::InvalidArgument`
    ///
    /// # 示例
    /// ```
    /// # use rational::{Rational, RationalError};
    /// # use num_bigint::BigInt;
    /// let half = Rational::new(BigInt::from(2), BigInt::from(4)).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    ///
    /// let err = Rational::new(BigInt::from(1), BigInt::from(0));
    /// assert!(matches!(err, Err(RationalError::InvalidArgument(_))));
    /// ```
    pub fn new(nume: BigInt, deno: BigInt) -> Result<Self, RationalError> {
        if deno.is_zero() {
            return Err(ZERO_DENOMINATOR);
        }
        Ok(Self::reduce(nume, deno))
    }

    /// 先除以最大公约数，再以约分后的分子分母构造
    ///
    /// 结果与 [`Rational::new`] 相同，只是记录的原始分子分母已经是约分后的值
    ///
    /// # 示例
    /// ```
    /// # use rational::Rational;
    /// # use num_bigint::BigInt;
    /// let a = Rational::normalize(BigInt::from(6), BigInt::from(-8)).unwrap();
    /// assert_eq!(a.numerator(), &BigInt::from(3));
    /// assert_eq!(a.denominator(), &BigInt::from(-4));
    /// assert_eq!(a.to_string(), "-3/4");
    /// ```
    pub fn normalize(nume: BigInt, deno: BigInt) -> Result<Self, RationalError> {
        if deno.is_zero() {
            return Err(ZERO_DENOMINATOR);
        }
        let gcd = utils::gcd(&nume, &deno);
        Self::new(nume / &gcd, deno / gcd)
    }

    /// 由任意可以转换为 `BigInt` 的整数构造
    ///
    /// # 示例
    /// ```
    /// # use rational::Rational;
    /// let a = Rational::from_integers(2000000000, 4000000000i64).unwrap();
    /// assert_eq!(a, Rational::from_integers(1, 2).unwrap());
    /// ```
    pub fn from_integers<N, D>(nume: N, deno: D) -> Result<Self, RationalError>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        Self::new(nume.into(), deno.into())
    }

    // deno != 0 is guaranteed by every caller
    fn reduce(nume: BigInt, deno: BigInt) -> Self {
        debug_assert!(!deno.is_zero());

        let (normalized_nume, normalized_deno) = utils::reduce_pair(&nume, &deno);
        let (nume_sign, deno_sign) = (utils::sign_of(&nume), utils::sign_of(&deno));

        Self {
            nume,
            deno,
            normalized_nume,
            normalized_deno,
            nume_sign,
            deno_sign,
            is_positive: nume_sign * deno_sign == 1,
        }
    }

    /// 构造时传入的原始分子
    pub fn numerator(&self) -> &BigInt {
        &self.nume
    }

    /// 构造时传入的原始分母
    pub fn denominator(&self) -> &BigInt {
        &self.deno
    }

    /// 约分后的分子，携带整个值的符号
    pub fn normalized_numerator(&self) -> &BigInt {
        &self.normalized_nume
    }

    /// 约分后的分母，恒为正
    pub fn normalized_denominator(&self) -> &BigInt {
        &self.normalized_deno
    }

    /// 原始分子的符号 (`-1`, `0`, `1`)
    pub fn numerator_sign(&self) -> i8 {
        self.nume_sign
    }

    /// 原始分母的符号 (`-1`, `1`)
    pub fn denominator_sign(&self) -> i8 {
        self.deno_sign
    }

    /// 正值返回 true，否则返回 false
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// assert!(2i64.div_by(3).unwrap().is_positive());
    /// assert!((-2i64).div_by(-3).unwrap().is_positive());
    /// assert!(!(-2i64).div_by(3).unwrap().is_positive());
    /// assert!(!0i64.div_by(3).unwrap().is_positive());
    /// ```
    pub fn is_positive(&self) -> bool {
        self.is_positive
    }

    pub fn is_negative(&self) -> bool {
        self.normalized_nume.is_negative()
    }

    pub fn is_zero(&self) -> bool {
        self.normalized_nume.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.normalized_deno.is_one()
    }

    /// 整个值的符号 (`-1`, `0`, `1`)
    pub fn signum(&self) -> i8 {
        utils::sign_of(&self.normalized_nume)
    }

    /// 绝对值
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// assert_eq!((-3i64).div_by(4).unwrap().abs(), 3i64.div_by(4).unwrap());
    /// ```
    pub fn abs(&self) -> Self {
        Self::reduce(self.nume.abs(), self.deno.abs())
    }

    /// 倒数，零没有倒数
    ///
    /// # 示例
    /// ```
    /// # use rational::{DivBy, Rational};
    /// assert_eq!((-3i64).div_by(4).unwrap().reciprocal().unwrap(), (-4i64).div_by(3).unwrap());
    /// assert!(Rational::from(0).reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<Self, RationalError> {
        if self.nume.is_zero() {
            return Err(RationalError::InvalidArgument("zero has no reciprocal"));
        }
        Ok(Self::reduce(self.deno.clone(), self.nume.clone()))
    }

    /// 向零截断为整数
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// # use num_bigint::BigInt;
    /// assert_eq!((-7i64).div_by(2).unwrap().to_integer(), BigInt::from(-3));
    /// ```
    pub fn to_integer(&self) -> BigInt {
        &self.normalized_nume / &self.normalized_deno
    }

    /// 除法，除数的分子为零时返回错误
    ///
    /// # 示例
    /// ```
    /// # use rational::{DivBy, Rational, RationalError};
    /// let a = 1i64.div_by(2).unwrap();
    /// let b = 1i64.div_by(3).unwrap();
    /// assert_eq!(a.checked_div(&b), Ok(3i64.div_by(2).unwrap()));
    /// assert!(matches!(a.checked_div(&Rational::from(0)), Err(RationalError::InvalidArgument(_))));
    /// ```
    pub fn checked_div(&self, rhs: &Rational) -> Result<Self, RationalError> {
        if rhs.normalized_nume.is_zero() {
            return Err(DIVISION_BY_ZERO);
        }
        Ok(Self::reduce(
            &self.normalized_nume * &rhs.normalized_deno,
            &self.normalized_deno * &rhs.normalized_nume,
        ))
    }

    /// 规范字符串：分母为 1 时只输出分子，否则输出 `n/d`，符号在分子上
    ///
    /// # 错误
    /// 约分后的分母为零时返回 `RationalError::InternalConsistency`，正常构造的值不会出现
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// assert_eq!(2i64.div_by(1).unwrap().to_canonical_string().unwrap(), "2");
    /// assert_eq!((-2i64).div_by(4).unwrap().to_canonical_string().unwrap(), "-1/2");
    /// assert_eq!(3i64.div_by(-4).unwrap().to_canonical_string().unwrap(), "-3/4");
    /// ```
    pub fn to_canonical_string(&self) -> Result<String, RationalError> {
        let (nume, deno) = (&self.normalized_nume, &self.normalized_deno);
        if deno.is_one() {
            return Ok(nume.to_string());
        }
        match deno.sign() {
            Sign::Plus => Ok(format!("{}/{}", nume, deno)),
            Sign::Minus => Ok(format!("{}/{}", -nume, -deno)),
            Sign::NoSign => Err(RationalError::InternalConsistency("normalized denominator is zero")),
        }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::reduce(BigInt::zero(), BigInt::one())
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.normalized_nume.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::reduce(BigInt::one(), BigInt::one())
    }
}

// combined from the reduced pairs
impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'a Rational) -> Rational {
        Rational::reduce(
            &self.normalized_nume * &rhs.normalized_deno + &rhs.normalized_nume * &self.normalized_deno,
            &self.normalized_deno * &rhs.normalized_deno,
        )
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'a Rational) -> Rational {
        Rational::reduce(
            &self.normalized_nume * &rhs.normalized_deno - &rhs.normalized_nume * &self.normalized_deno,
            &self.normalized_deno * &rhs.normalized_deno,
        )
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'a Rational) -> Rational {
        Rational::reduce(&self.normalized_nume * &rhs.normalized_nume, &self.normalized_deno * &rhs.normalized_deno)
    }
}

impl<'a> Div<&'a Rational> for &'a Rational {
    type Output = Rational;

    /// # Panics
    /// 除数为零时触发 panic，需要错误处理时使用 [`Rational::checked_div`]
    fn div(self, rhs: &'a Rational) -> Rational {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::reduce(-&self.nume, self.deno.clone())
    }
}

impl<T: Into<Rational>> Add<T> for Rational {
    type Output = Self;

    /// 有理数加法
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// let a = 1i64.div_by(2).unwrap();
    /// let b = 1i64.div_by(3).unwrap();
    /// assert_eq!(a.clone() + b, 5i64.div_by(6).unwrap());
    /// assert_eq!(a + 1, 3i64.div_by(2).unwrap());
    /// ```
    fn add(self, rhs: T) -> Self::Output {
        let rhs: Rational = rhs.into();
        &self + &rhs
    }
}

impl<T: Into<Rational>> Sub<T> for Rational {
    type Output = Self;

    /// 有理数减法
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// let a = 1i64.div_by(2).unwrap();
    /// let b = 1i64.div_by(3).unwrap();
    /// assert_eq!(a.clone() - b, 1i64.div_by(6).unwrap());
    /// assert_eq!(a - 1, (-1i64).div_by(2).unwrap());
    /// ```
    fn sub(self, rhs: T) -> Self::Output {
        let rhs: Rational = rhs.into();
        &self - &rhs
    }
}

impl<T: Into<Rational>> Mul<T> for Rational {
    type Output = Self;

    /// 有理数乘法
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// let a = 1i64.div_by(2).unwrap();
    /// let b = 1i64.div_by(3).unwrap();
    /// assert_eq!(a.clone() * b, 1i64.div_by(6).unwrap());
    /// assert_eq!(a * 3, 3i64.div_by(2).unwrap());
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        let rhs: Rational = rhs.into();
        &self * &rhs
    }
}

impl<T: Into<Rational>> Div<T> for Rational {
    type Output = Self;

    /// 有理数除法
    ///
    /// # Panics
    /// 除数为零时触发 panic，需要错误处理时使用 [`Rational::checked_div`]
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// let a = 1i64.div_by(2).unwrap();
    /// let b = 1i64.div_by(3).unwrap();
    /// assert_eq!(a.clone() / b, 3i64.div_by(2).unwrap());
    /// assert_eq!(a / 3, 1i64.div_by(6).unwrap());
    /// ```
    fn div(self, rhs: T) -> Self::Output {
        let rhs: Rational = rhs.into();
        &self / &rhs
    }
}

impl Neg for Rational {
    type Output = Self;

    /// 取负
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// assert_eq!(-(1i64.div_by(2).unwrap()), (-1i64).div_by(2).unwrap());
    /// ```
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Into<Rational>> AddAssign<T> for Rational {
    fn add_assign(&mut self, rhs: T) {
        let rhs: Rational = rhs.into();
        *self = &*self + &rhs;
    }
}

impl<T: Into<Rational>> SubAssign<T> for Rational {
    fn sub_assign(&mut self, rhs: T) {
        let rhs: Rational = rhs.into();
        *self = &*self - &rhs;
    }
}

impl<T: Into<Rational>> MulAssign<T> for Rational {
    fn mul_assign(&mut self, rhs: T) {
        let rhs: Rational = rhs.into();
        *self = &*self * &rhs;
    }
}

impl<T: Into<Rational>> DivAssign<T> for Rational {
    fn div_assign(&mut self, rhs: T) {
        let rhs: Rational = rhs.into();
        *self = &*self / &rhs;
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| &acc + &value)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, value| &acc + value)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, value| &acc * &value)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, value| &acc * value)
    }
}

impl Display for Rational {
    /// 格式化输出，与 [`Rational::to_canonical_string`] 相同
    ///
    /// 约分后的分母为零时返回 `fmt::Error`，此时 `to_string()` 会 panic。
    /// 公开的构造函数不会产生这种值；需要带类型的错误时使用 [`Rational::to_canonical_string`]
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// assert_eq!(1i64.div_by(2).unwrap().to_string(), "1/2");
    /// assert_eq!(1i64.div_by(-2).unwrap().to_string(), "-1/2");
    /// assert_eq!(0i64.div_by(-7).unwrap().to_string(), "0");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let s = self.to_canonical_string().map_err(|_| fmt::Error)?;
        f.pad(&s)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// 解析 `整数` 或 `整数/整数`，在第一个 `/` 处切分
    ///
    /// # 示例
    /// ```
    /// # use rational::{Rational, RationalError};
    /// let a: Rational = "117/1098".parse().unwrap();
    /// assert_eq!(a.to_string(), "13/122");
    ///
    /// let b: Rational = "-42".parse().unwrap();
    /// assert_eq!(b, Rational::from(-42));
    ///
    /// assert!(matches!("1/x".parse::<Rational>(), Err(RationalError::ParseError { .. })));
    /// assert!(matches!("1/0".parse::<Rational>(), Err(RationalError::InvalidArgument(_))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_part = |part: &str| {
            // BigInt::from_str skips `_` between digits
            if part.bytes().any(|b| b == b'_') {
                return Err(RationalError::ParseError {
                    input: s.to_owned(),
                    source: None,
                });
            }
            BigInt::from_str(part).map_err(|source| RationalError::ParseError {
                input: s.to_owned(),
                source: Some(source),
            })
        };

        let (nume, deno) = match s.split_once('/') {
            Some((nume, deno)) => (parse_part(nume)?, parse_part(deno)?),
            None => (parse_part(s)?, BigInt::one()),
        };
        Self::new(nume, deno)
    }
}

impl PartialEq for Rational {
    /// 判断是否相等
    ///
    /// # 取等规则
    /// 正负性相同，且约分后带符号的分子分母分别相等。
    /// 因此 `1/2` 与 `-1/-2` 相等，`-1/2` 与 `1/-2` 相等
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// let a1 = 2i64.div_by(3).unwrap();
    /// let a2 = (-4i64).div_by(-6).unwrap();
    /// assert!(a1 == a2);
    /// assert!(a1 != (-2i64).div_by(3).unwrap());
    /// ```
    fn eq(&self, other: &Self) -> bool {
        self.is_positive == other.is_positive
            && self.normalized_nume == other.normalized_nume
            && self.normalized_deno == other.normalized_deno
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// 交叉相乘比较，约分后的分母恒为正，所以结果即数值大小关系
    ///
    /// # 示例
    /// ```
    /// # use rational::DivBy;
    /// # use std::cmp::Ordering;
    /// let a = 3i64.div_by(4).unwrap();
    /// let b = 2i64.div_by(3).unwrap();
    /// assert_eq!(a.cmp(&b), Ordering::Greater);
    /// assert!(1i64.div_by(-2).unwrap() < 0i64.div_by(1).unwrap());
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.normalized_nume * &other.normalized_deno;
        let rhs = &other.normalized_nume * &self.normalized_deno;
        lhs.cmp(&rhs)
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(HASH_SEED);
        self.normalized_nume.hash(state);
        self.normalized_deno.hash(state);
    }
}

impl From<&Rational> for Rational {
    fn from(value: &Rational) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Self::reduce(BigInt::from(value), BigInt::one())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);

macro_rules! impl_try_from_for_integer {
    ($($t:ty => $to:ident),*) => {
        $(
            impl TryFrom<&Rational> for $t {
                type Error = RationalError;

                /// 向零截断，超出范围时返回 `RationalError::OutOfRange`
                fn try_from(value: &Rational) -> Result<Self, Self::Error> {
                    value.to_integer().$to().ok_or(RationalError::OutOfRange { target: stringify!($t) })
                }
            }

            impl TryFrom<Rational> for $t {
                type Error = RationalError;

                fn try_from(value: Rational) -> Result<Self, Self::Error> {
                    <$t>::try_from(&value)
                }
            }
        )*
    };
}

impl_try_from_for_integer!(
    i8 => to_i8, i16 => to_i16, i32 => to_i32, i64 => to_i64, i128 => to_i128,
    u8 => to_u8, u16 => to_u16, u32 => to_u32, u64 => to_u64, u128 => to_u128
);

/// 以 `分子.div_by(分母)` 的形式构造有理数
///
/// # 示例
/// ```
/// # use rational::DivBy;
/// let a = 1i64.div_by(2).unwrap();
/// assert_eq!(a, 2i64.div_by(4).unwrap());
/// assert!(1i64.div_by(0).is_err());
/// ```
pub trait DivBy {
    fn div_by(self, deno: Self) -> Result<Rational, RationalError>;
}

macro_rules! impl_div_by {
    ($($t:ty),*) => {
        $(
            impl DivBy for $t {
                fn div_by(self, deno: $t) -> Result<Rational, RationalError> {
                    Rational::new(BigInt::from(self), BigInt::from(deno))
                }
            }
        )*
    };
}

impl_div_by!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);
