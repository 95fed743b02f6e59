use rational::{DivBy, Rational, RationalError};

fn main() -> Result<(), RationalError> {
    let half = 1i64.div_by(2)?;
    let third = 1i64.div_by(3)?;

    println!("{} + {} = {}", half, third, half.clone() + &third);
    println!("{} - {} = {}", half, third, half.clone() - &third);
    println!("{} * {} = {}", half, third, half.clone() * &third);
    println!("{} / {} = {}", half, third, half.checked_div(&third)?);
    println!("-({}) = {}", half, -&half);

    println!("{}", 2i64.div_by(1)?);
    println!("{}", (-2i64).div_by(4)?);
    println!("{}", "117/1098".parse::<Rational>()?);

    println!("{} < {}: {}", half, 2i64.div_by(3)?, half < 2i64.div_by(3)?);
    let range = third.clone().range_to(2i64.div_by(3)?);
    println!("{} in [{}, {}]: {}", half, range.start(), range.end(), range.contains(&half));

    println!("2000000000/4000000000 == 1/2: {}", 2000000000i64.div_by(4000000000)? == half);
    let big: Rational = "1234567890123456789012345678901234567890/2469135780246913578024691357802469135780".parse()?;
    println!("{} == 1/2: {}", big, big == half);

    Ok(())
}
